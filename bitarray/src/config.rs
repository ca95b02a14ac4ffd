//! The three width parameters of an array.
//!
//! Defaults follow the classic build-time configuration: 32-bit elements,
//! units as wide as elements, a 32-bit length field.
//!
//! ```rust
//! use bitarray::{ArrayConfig, Width};
//!
//! let config = ArrayConfig::new(8, 32, 16)?;
//! assert_eq!(config.unit, Width::W8);
//! assert_eq!(config.max_len(), 65_535);
//!
//! assert!(ArrayConfig::new(12, 32, 32).is_err());
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```

use crate::width::{Element, SizeType, Unit};
use crate::{BitArrayError, Result, Width};

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

pub const UNIT_SIZE_VAR: &str = "BA_UNIT_SIZE_BITS";
pub const ELEMENT_TYPE_VAR: &str = "BA_ELEMENT_TYPE_BITS";
pub const ARRAY_SIZE_VAR: &str = "BA_ARRAY_SIZE_BITS";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayConfig {
    /// Width of one storage unit.
    pub unit: Width,
    /// Width of the element accessor type; caps the element bit width.
    pub element: Width,
    /// Width of the length field; bounds the array length.
    pub size: Width,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            unit: Width::W32,
            element: Width::W32,
            size: Width::W32,
        }
    }
}

impl ArrayConfig {
    pub fn new(unit_bits: u32, element_bits: u32, size_bits: u32) -> Result<Self> {
        Ok(Self {
            unit: Width::from_bits(unit_bits)?,
            element: Width::from_bits(element_bits)?,
            size: Width::from_bits(size_bits)?,
        })
    }

    /// The widths of a `BitArray<U, E, S>`.
    pub const fn of<U: Unit, E: Element, S: SizeType>() -> Self {
        Self {
            unit: U::WIDTH,
            element: E::WIDTH,
            size: S::WIDTH,
        }
    }

    /// Largest array length the size width can address.
    #[inline]
    pub const fn max_len(&self) -> u64 {
        self.size.max_value()
    }

    /// Reads the widths through `lookup`, keyed by the `BA_*` variable names.
    ///
    /// Missing keys take their default, with a warning: element 32, unit equal
    /// to the element width, size 32.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let element = match read_width(&lookup, ELEMENT_TYPE_VAR)? {
            Some(w) => w,
            None => {
                log::warn!("{} not set, using the default 32", ELEMENT_TYPE_VAR);
                Width::W32
            }
        };
        let unit = match read_width(&lookup, UNIT_SIZE_VAR)? {
            Some(w) => w,
            None => {
                log::warn!(
                    "{} not set, using the element width {}",
                    UNIT_SIZE_VAR,
                    element.bits()
                );
                element
            }
        };
        let size = match read_width(&lookup, ARRAY_SIZE_VAR)? {
            Some(w) => w,
            None => {
                log::warn!("{} not set, using the default 32", ARRAY_SIZE_VAR);
                Width::W32
            }
        };
        Ok(Self {
            unit,
            element,
            size,
        })
    }

    /// Reads the widths from the process environment.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn read_width<F>(lookup: &F, key: &'static str) -> Result<Option<Width>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let bits = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| BitArrayError::InvalidConfigValue {
            key,
            value: raw.to_string(),
        })?;
    Width::from_bits(bits).map(Some)
}
