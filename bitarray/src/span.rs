//! Bit addressing over unit-addressed storage.
//!
//! A logical element covers a contiguous range of global bit addresses. The
//! storage is an array of units, so every access first splits that range into
//! one [`UnitSpan`] per touched unit. Reads and writes share this split.

/// Logical element position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElemIndex(pub usize);

/// Global bit address. Bit `b` lives in unit `b / unit_bits` at bit
/// `b % unit_bits`, counting from the least significant bit of the unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitIndex(pub usize);

impl BitIndex {
    /// First bit of element `e` when each element is `element_bits` wide.
    #[inline]
    pub fn of_element(e: ElemIndex, element_bits: u32) -> Self {
        BitIndex(e.0 * element_bits as usize)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub fn unit(self, unit_bits: u32) -> usize {
        self.0 / unit_bits as usize
    }

    #[inline]
    pub fn shift(self, unit_bits: u32) -> u32 {
        (self.0 % unit_bits as usize) as u32
    }
}

/// The part of a bit range that falls inside one unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnitSpan {
    /// Index of the unit in storage.
    pub unit: usize,
    /// Bit offset inside the unit.
    pub shift: u32,
    /// Number of bits taken from this unit.
    pub width: u32,
    /// Bit offset inside the value being read or written.
    pub offset: u32,
}

impl UnitSpan {
    /// Mask of `width` low bits, not yet shifted into unit position.
    #[inline(always)]
    pub fn mask(&self) -> u64 {
        low_mask(self.width)
    }
}

/// Splits `width` bits starting at a global bit address into unit spans,
/// lowest address first.
#[derive(Clone, Debug)]
pub struct Spans {
    next: usize,
    remaining: u32,
    offset: u32,
    unit_bits: u32,
}

impl Spans {
    #[inline]
    pub fn new(start: BitIndex, width: u32, unit_bits: u32) -> Self {
        debug_assert!(width <= 64);
        Self {
            next: start.get(),
            remaining: width,
            offset: 0,
            unit_bits,
        }
    }
}

impl Iterator for Spans {
    type Item = UnitSpan;

    #[inline]
    fn next(&mut self) -> Option<UnitSpan> {
        if self.remaining == 0 {
            return None;
        }
        let pos = BitIndex(self.next);
        let shift = pos.shift(self.unit_bits);
        let width = self.remaining.min(self.unit_bits - shift);
        let span = UnitSpan {
            unit: pos.unit(self.unit_bits),
            shift,
            width,
            offset: self.offset,
        };
        self.next += width as usize;
        self.remaining -= width;
        self.offset += width;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let first = self.next % self.unit_bits as usize;
        let n = (first + self.remaining as usize).div_ceil(self.unit_bits as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Spans {}

/// `bits` low bits set; saturates at 64.
#[inline(always)]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
