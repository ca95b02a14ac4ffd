//! Width parameters: storage units, elements and the length field.
//!
//! All three are drawn from the same closed set of unsigned integer widths.
//! The traits are sealed and implemented for `u8`, `u16`, `u32` and `u64`.

use crate::BitArrayError;
use bytemuck::Pod;
use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// One of the supported integer widths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    W8 = 8,
    W16 = 16,
    W32 = 32,
    W64 = 64,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Largest value representable at this width.
    #[inline]
    pub const fn max_value(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }

    pub fn from_bits(bits: u32) -> Result<Self, BitArrayError> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(BitArrayError::UnsupportedWidth(other)),
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = BitArrayError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::from_bits(bits)
    }
}

/// An integer type used as one slot of backing storage.
pub trait Unit: sealed::Sealed + Pod + Debug + Eq + Send + Sync + 'static {
    const BITS: u32;
    const WIDTH: Width;

    /// Truncates `value` to the unit width.
    fn from_u64(value: u64) -> Self;
    fn to_u64(self) -> u64;
}

/// An integer type accepted and returned by element accessors.
pub trait Element: sealed::Sealed + Copy + Debug + Eq + Send + Sync + 'static {
    const BITS: u32;
    const WIDTH: Width;

    /// Truncates `value` to the element width.
    fn from_u64(value: u64) -> Self;
    fn to_u64(self) -> u64;
}

/// An integer type whose range bounds the array length.
pub trait SizeType: sealed::Sealed + Copy + Debug + 'static {
    const BITS: u32;
    const WIDTH: Width;
    const MAX_LEN: u64;
}

macro_rules! impl_width {
    ($($t:ty => $w:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Unit for $t {
                const BITS: u32 = <$t>::BITS;
                const WIDTH: Width = Width::$w;

                #[inline(always)]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }

            impl Element for $t {
                const BITS: u32 = <$t>::BITS;
                const WIDTH: Width = Width::$w;

                #[inline(always)]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }

            impl SizeType for $t {
                const BITS: u32 = <$t>::BITS;
                const WIDTH: Width = Width::$w;
                const MAX_LEN: u64 = <$t>::MAX as u64;
            }
        )*
    };
}

impl_width!(u8 => W8, u16 => W16, u32 => W32, u64 => W64);
