//! Fixed-length array of bit-packed elements over fixed-width storage units.
//!
//! # Examples
//!
//! ## Elements wider than units
//!
//! ```rust
//! use bitarray::BitArray;
//!
//! // 32-bit elements over byte units: every element spans four units
//! let mut array = BitArray::<u8, u32>::new(4)?;
//! array.set(1, 0xAABB_CCDD)?;
//!
//! assert_eq!(array.get(1)?, 0xAABB_CCDD);
//! assert_eq!(array.get(0)?, 0);
//! assert_eq!(array.as_units().len(), 16);
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```
//!
//! ## Narrow elements
//!
//! ```rust
//! use bitarray::BitArray;
//!
//! let mut array = BitArray::<u64, u16>::with_element_bits(10, 3)?;
//! array.set(9, 0b1111)?; // only the low three bits are stored
//!
//! assert_eq!(array.get(9)?, 0b111);
//! assert_eq!(array.capacity_bits(), 30);
//! assert_eq!(array.count_set_bits(), 3);
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```
use crate::bit_ops;
use crate::span::{BitIndex, ElemIndex, low_mask};
use crate::width::{Element, SizeType, Unit};
use crate::{ArrayConfig, BitArrayError, Result};
use core::marker::PhantomData;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A fixed number of `element_bits`-wide values packed into `U` units.
///
/// `E` is the accessor type and caps the element width. `S` is the
/// size-addressing type: the length may not exceed `S::MAX`.
#[derive(Clone, Debug)]
pub struct BitArray<U: Unit, E: Element = U, S: SizeType = u32> {
    units: Vec<U>,
    len: usize,
    element_bits: u32,
    _marker: PhantomData<fn() -> (E, S)>,
}

impl<U: Unit, E: Element, S: SizeType> BitArray<U, E, S> {
    /// Creates a zeroed array of `len` elements, each `E::BITS` wide.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::LengthTooLarge`] if `len` exceeds [`Self::max_len`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let array = BitArray::<u64, u8>::new(10)?;
    /// assert_eq!(array.len(), 10);
    /// assert_eq!(array.as_units().len(), 2);
    /// # Ok::<(), bitarray::BitArrayError>(())
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        Self::with_element_bits(len, E::BITS)
    }

    /// Creates a zeroed array whose elements are `element_bits` wide.
    ///
    /// `element_bits` may be any value in `1..=E::BITS`.
    pub fn with_element_bits(len: usize, element_bits: u32) -> Result<Self> {
        let count = Self::storage_units(len, element_bits)?;
        let units = alloc_units::<U>(count)?;
        log::debug!(
            "bit array allocated: len={} element_bits={} unit_bits={} units={}",
            len,
            element_bits,
            U::BITS,
            count
        );
        Ok(Self {
            units,
            len,
            element_bits,
            _marker: PhantomData,
        })
    }

    /// Adopts an existing unit buffer holding `len` elements.
    ///
    /// Padding bits in the last unit are kept as given and never read back as
    /// element data.
    pub fn from_units(len: usize, element_bits: u32, units: Vec<U>) -> Result<Self> {
        let expected = Self::storage_units(len, element_bits)?;
        if units.len() != expected {
            return Err(BitArrayError::StorageSizeMismatch {
                expected,
                found: units.len(),
            });
        }
        Ok(Self {
            units,
            len,
            element_bits,
            _marker: PhantomData,
        })
    }

    /// Builds an array from a sized sequence of values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let array = BitArray::<u16, u8>::from_elements(5, [1, 2, 31, 0])?;
    /// assert_eq!(array.iter().collect::<Vec<_>>(), vec![1, 2, 31, 0]);
    /// # Ok::<(), bitarray::BitArrayError>(())
    /// ```
    pub fn from_elements<I>(element_bits: u32, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let mut array = Self::with_element_bits(values.len(), element_bits)?;
        for (i, value) in values.enumerate().take(array.len) {
            array.write(i, value.to_u64());
        }
        Ok(array)
    }

    /// Number of units needed for `len` elements of `element_bits` each.
    pub fn storage_units(len: usize, element_bits: u32) -> Result<usize> {
        let total = Self::capacity_for(len, element_bits)?;
        Ok(total.div_ceil(U::BITS as usize))
    }

    /// Number of bytes needed for `len` elements of `element_bits` each.
    pub fn storage_bytes(len: usize, element_bits: u32) -> Result<usize> {
        Ok(Self::storage_units(len, element_bits)? * core::mem::size_of::<U>())
    }

    /// Largest length the size type can address.
    pub fn max_len() -> usize {
        usize::try_from(S::MAX_LEN).unwrap_or(usize::MAX)
    }

    fn capacity_for(len: usize, element_bits: u32) -> Result<usize> {
        if element_bits == 0 || element_bits > E::BITS {
            return Err(BitArrayError::InvalidElementBits {
                bits: element_bits,
                max: E::BITS,
            });
        }
        if len as u64 > S::MAX_LEN {
            return Err(BitArrayError::LengthTooLarge {
                len: len as u64,
                max: S::MAX_LEN,
            });
        }
        len.checked_mul(element_bits as usize)
            .ok_or(BitArrayError::LengthTooLarge {
                len: len as u64,
                max: (usize::MAX / element_bits as usize) as u64,
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn element_bits(&self) -> u32 {
        self.element_bits
    }

    #[inline]
    pub fn unit_bits(&self) -> u32 {
        U::BITS
    }

    /// Unit, element and size widths of this array type.
    #[inline]
    pub fn config(&self) -> ArrayConfig {
        ArrayConfig::of::<U, E, S>()
    }

    /// Bits holding element data; the rest of the last unit is padding.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.len * self.element_bits as usize
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<E> {
        self.check_index(index)?;
        Ok(E::from_u64(self.read(index)))
    }

    /// Stores the low `element_bits` bits of `value` at `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: E) -> Result<()> {
        self.check_index(index)?;
        self.write(index, value.to_u64());
        Ok(())
    }

    /// Sets the element at `index` to zero.
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.write(index, 0);
        Ok(())
    }

    /// Sets every element to zero. Padding is left untouched.
    pub fn clear_all(&mut self) {
        self.fill(E::from_u64(0));
    }

    /// Exchanges the elements at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        let (va, vb) = (self.read(a), self.read(b));
        self.write(a, vb);
        self.write(b, va);
        Ok(())
    }

    /// Number of 1-bits across all elements. Padding is not counted.
    pub fn count_set_bits(&self) -> usize {
        bit_ops::count_ones(&self.units, self.capacity_bits())
    }

    /// Sets every element to the low `element_bits` bits of `value`.
    pub fn fill(&mut self, value: E) {
        let bits = self.element_bits;
        let value = value.to_u64() & low_mask(bits);

        if U::BITS % bits == 0 {
            log::trace!("fill: {}-bit pattern over {}-bit units", bits, U::BITS);
            let mut pattern = 0u64;
            let mut at = 0;
            while at < U::BITS {
                pattern |= value << at;
                at += bits;
            }
            let total = self.capacity_bits();
            let full = total / U::BITS as usize;
            self.units[..full].fill(U::from_u64(pattern));

            let tail = (total % U::BITS as usize) as u32;
            if tail != 0 {
                let start = BitIndex(full * U::BITS as usize);
                bit_ops::set_bits(&mut self.units, start, tail, pattern);
            }
        } else if bits % U::BITS == 0 {
            log::trace!("fill: {}-bit elements as whole {}-bit units", bits, U::BITS);
            let per_element = (bits / U::BITS) as usize;
            for (i, unit) in self.units.iter_mut().enumerate() {
                let chunk = (i % per_element) as u32 * U::BITS;
                *unit = U::from_u64(value >> chunk);
            }
        } else {
            log::trace!("fill: per-element writes of {} bits", bits);
            for i in 0..self.len {
                self.write(i, value);
            }
        }
    }

    /// Element-wise comparison, see the `PartialEq` impl.
    pub fn equals<V: Unit, T: SizeType>(&self, other: &BitArray<V, E, T>) -> bool {
        self == other
    }

    /// Backing units, padding included.
    pub fn as_units(&self) -> &[U] {
        &self.units
    }

    /// The raw packed layout in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.units)
    }

    pub fn into_units(self) -> Vec<U> {
        self.units
    }

    pub fn iter(&self) -> Iter<'_, U, E, S> {
        Iter {
            array: self,
            front: 0,
            back: self.len,
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    #[inline]
    fn bit_index(&self, index: usize) -> BitIndex {
        BitIndex::of_element(ElemIndex(index), self.element_bits)
    }

    #[inline]
    pub(crate) fn read(&self, index: usize) -> u64 {
        bit_ops::get_bits(&self.units, self.bit_index(index), self.element_bits)
    }

    #[inline]
    pub(crate) fn write(&mut self, index: usize, value: u64) {
        let start = self.bit_index(index);
        bit_ops::set_bits(&mut self.units, start, self.element_bits, value);
    }
}

fn alloc_units<U: Unit>(count: usize) -> Result<Vec<U>> {
    let mut units = Vec::new();
    units
        .try_reserve_exact(count)
        .map_err(|_| BitArrayError::AllocationFailed { units: count })?;
    units.resize(count, U::zeroed());
    Ok(units)
}

/// Arrays are equal when they hold the same number of elements of the same
/// bit width with the same values. Unit width, size type and padding bits
/// play no part.
impl<U, V, E, S, T> PartialEq<BitArray<V, E, T>> for BitArray<U, E, S>
where
    U: Unit,
    V: Unit,
    E: Element,
    S: SizeType,
    T: SizeType,
{
    fn eq(&self, other: &BitArray<V, E, T>) -> bool {
        if self.len != other.len || self.element_bits != other.element_bits {
            return false;
        }
        if U::BITS == V::BITS {
            bit_ops::bits_eq(&self.units, &other.units, self.capacity_bits())
        } else {
            self.iter().eq(other.iter())
        }
    }
}

impl<U: Unit, E: Element, S: SizeType> Eq for BitArray<U, E, S> {}

pub struct Iter<'a, U: Unit, E: Element, S: SizeType> {
    array: &'a BitArray<U, E, S>,
    front: usize,
    back: usize,
}

impl<'a, U: Unit, E: Element, S: SizeType> Iterator for Iter<'a, U, E, S> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.front >= self.back {
            return None;
        }
        let value = E::from_u64(self.array.read(self.front));
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, U: Unit, E: Element, S: SizeType> DoubleEndedIterator for Iter<'a, U, E, S> {
    fn next_back(&mut self) -> Option<E> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(E::from_u64(self.array.read(self.back)))
    }
}

impl<'a, U: Unit, E: Element, S: SizeType> ExactSizeIterator for Iter<'a, U, E, S> {}

impl<'a, U: Unit, E: Element, S: SizeType> IntoIterator for &'a BitArray<U, E, S> {
    type Item = E;
    type IntoIter = Iter<'a, U, E, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
