#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use thiserror::Error;

/// The two failure categories an array operation can report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad construction or configuration input.
    InvalidArgument,
    /// An element index at or past the array length.
    OutOfRange,
}

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(
        feature = "std",
        error("Width {0} is not supported, expected 8, 16, 32 or 64")
    )]
    UnsupportedWidth(u32),

    #[cfg_attr(
        feature = "std",
        error("Element bit width must be in the range 1..={max}, got {bits}")
    )]
    InvalidElementBits { bits: u32, max: u32 },

    #[cfg_attr(
        feature = "std",
        error("Length {len} exceeds the maximum addressable length {max}")
    )]
    LengthTooLarge { len: u64, max: u64 },

    #[cfg_attr(
        feature = "std",
        error("Storage holds {found} units, layout needs {expected}")
    )]
    StorageSizeMismatch { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("Failed to allocate {units} storage units"))]
    AllocationFailed { units: usize },

    #[cfg_attr(feature = "std", error("Invalid value {value:?} for {key}"))]
    InvalidConfigValue { key: &'static str, value: String },

    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of range for length {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },
}

impl BitArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitArrayError::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::UnsupportedWidth(bits) => {
                write!(f, "Width {} is not supported, expected 8, 16, 32 or 64", bits)
            }
            BitArrayError::InvalidElementBits { bits, max } => {
                write!(f, "Element bit width must be in the range 1..={}, got {}", max, bits)
            }
            BitArrayError::LengthTooLarge { len, max } => {
                write!(f, "Length {} exceeds the maximum addressable length {}", len, max)
            }
            BitArrayError::StorageSizeMismatch { expected, found } => {
                write!(f, "Storage holds {} units, layout needs {}", found, expected)
            }
            BitArrayError::AllocationFailed { units } => {
                write!(f, "Failed to allocate {} storage units", units)
            }
            BitArrayError::InvalidConfigValue { key, value } => {
                write!(f, "Invalid value {:?} for {}", value, key)
            }
            BitArrayError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}", index, len)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            BitArrayError::IndexOutOfRange { index: 4, len: 4 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            BitArrayError::UnsupportedWidth(12).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            BitArrayError::LengthTooLarge { len: 256, max: 255 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_values() {
        let err = BitArrayError::IndexOutOfRange { index: 10, len: 10 };
        assert_eq!(err.to_string(), "Index 10 is out of range for length 10");

        let err = BitArrayError::InvalidElementBits { bits: 0, max: 16 };
        assert_eq!(
            err.to_string(),
            "Element bit width must be in the range 1..=16, got 0"
        );
    }
}
