//! Arrays whose widths are chosen at runtime.
//!
//! The unit width selects one of four monomorphized [`BitArray`]s. Element
//! values travel as `u64`; the element and size widths of the
//! [`ArrayConfig`] are enforced on construction.
//!
//! ```rust
//! use bitarray::{ArrayConfig, DynBitArray};
//!
//! let mut array = DynBitArray::create(4, 32, 8)?;
//! array.set(1, 0xAABB_CCDD)?;
//! assert_eq!(array.get(1)?, 0xAABB_CCDD);
//! assert_eq!(array.unit_bits(), 8);
//!
//! assert!(DynBitArray::create(4, 24, 8).is_err());
//! assert!(DynBitArray::new(256, ArrayConfig::new(8, 8, 8)?).is_err());
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```

use crate::{ArrayConfig, BitArray, BitArrayError, Result, Width};

type Packed<U> = BitArray<U, u64, u64>;

#[derive(Clone, Debug)]
enum Inner {
    U8(Packed<u8>),
    U16(Packed<u16>),
    U32(Packed<u32>),
    U64(Packed<u64>),
}

macro_rules! dispatch {
    ($inner:expr, $a:ident => $body:expr) => {
        match $inner {
            Inner::U8($a) => $body,
            Inner::U16($a) => $body,
            Inner::U32($a) => $body,
            Inner::U64($a) => $body,
        }
    };
}

#[derive(Clone, Debug)]
pub struct DynBitArray {
    config: ArrayConfig,
    inner: Inner,
}

impl DynBitArray {
    /// Creates an array from raw widths with a 32-bit length field.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::UnsupportedWidth`] unless both widths are 8, 16, 32 or 64.
    pub fn create(len: usize, element_width: u32, unit_width: u32) -> Result<Self> {
        let config = ArrayConfig {
            unit: Width::from_bits(unit_width)?,
            element: Width::from_bits(element_width)?,
            size: Width::W32,
        };
        Self::new(len, config)
    }

    /// Creates a zeroed array with elements as wide as `config.element`.
    pub fn new(len: usize, config: ArrayConfig) -> Result<Self> {
        Self::with_element_bits(len, config.element.bits(), config)
    }

    /// Creates a zeroed array with `element_bits`-wide elements, at most
    /// `config.element` bits.
    pub fn with_element_bits(len: usize, element_bits: u32, config: ArrayConfig) -> Result<Self> {
        if element_bits == 0 || element_bits > config.element.bits() {
            return Err(BitArrayError::InvalidElementBits {
                bits: element_bits,
                max: config.element.bits(),
            });
        }
        if len as u64 > config.max_len() {
            return Err(BitArrayError::LengthTooLarge {
                len: len as u64,
                max: config.max_len(),
            });
        }
        let inner = match config.unit {
            Width::W8 => Inner::U8(Packed::with_element_bits(len, element_bits)?),
            Width::W16 => Inner::U16(Packed::with_element_bits(len, element_bits)?),
            Width::W32 => Inner::U32(Packed::with_element_bits(len, element_bits)?),
            Width::W64 => Inner::U64(Packed::with_element_bits(len, element_bits)?),
        };
        Ok(Self { config, inner })
    }

    pub fn config(&self) -> ArrayConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        dispatch!(&self.inner, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn element_bits(&self) -> u32 {
        dispatch!(&self.inner, a => a.element_bits())
    }

    pub fn unit_bits(&self) -> u32 {
        self.config.unit.bits()
    }

    pub fn capacity_bits(&self) -> usize {
        dispatch!(&self.inner, a => a.capacity_bits())
    }

    pub fn get(&self, index: usize) -> Result<u64> {
        dispatch!(&self.inner, a => a.get(index))
    }

    /// Stores the low `element_bits` bits of `value` at `index`.
    pub fn set(&mut self, index: usize, value: u64) -> Result<()> {
        dispatch!(&mut self.inner, a => a.set(index, value))
    }

    pub fn clear(&mut self, index: usize) -> Result<()> {
        dispatch!(&mut self.inner, a => a.clear(index))
    }

    pub fn count_set_bits(&self) -> usize {
        dispatch!(&self.inner, a => a.count_set_bits())
    }

    pub fn fill(&mut self, value: u64) {
        dispatch!(&mut self.inner, a => a.fill(value))
    }

    pub fn equals(&self, other: &DynBitArray) -> bool {
        self == other
    }

    pub fn as_bytes(&self) -> &[u8] {
        dispatch!(&self.inner, a => a.as_bytes())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + ExactSizeIterator + '_ {
        (0..self.len()).map(move |i| self.read(i))
    }

    fn read(&self, index: usize) -> u64 {
        dispatch!(&self.inner, a => a.read(index))
    }
}

impl PartialEq for DynBitArray {
    fn eq(&self, other: &Self) -> bool {
        dispatch!(&self.inner, a => dispatch!(&other.inner, b => a == b))
    }
}

impl Eq for DynBitArray {}
