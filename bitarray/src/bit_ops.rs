use crate::span::{BitIndex, Spans, low_mask};
use crate::width::Unit;

/// Reads `bit_width` bits starting at `start`, least significant bit first.
#[inline]
pub(crate) fn get_bits<U: Unit>(units: &[U], start: BitIndex, bit_width: u32) -> u64 {
    Spans::new(start, bit_width, U::BITS).fold(0u64, |value, span| {
        let chunk = (units[span.unit].to_u64() >> span.shift) & span.mask();
        value | (chunk << span.offset)
    })
}

/// Writes the low `bit_width` bits of `value` starting at `start`.
///
/// Each touched unit is read, the target bits cleared and the new bits merged
/// in. Bits outside the range are left as they were.
#[inline]
pub(crate) fn set_bits<U: Unit>(units: &mut [U], start: BitIndex, bit_width: u32, value: u64) {
    for span in Spans::new(start, bit_width, U::BITS) {
        let keep = !(span.mask() << span.shift);
        let bits = ((value >> span.offset) & span.mask()) << span.shift;
        let unit = &mut units[span.unit];
        *unit = U::from_u64((unit.to_u64() & keep) | bits);
    }
}

/// Counts 1-bits in the first `total_bits` bits of storage.
pub(crate) fn count_ones<U: Unit>(units: &[U], total_bits: usize) -> usize {
    let unit_bits = U::BITS as usize;
    let full = total_bits / unit_bits;
    let tail = (total_bits % unit_bits) as u32;

    let mut count: usize = units[..full]
        .iter()
        .map(|u| u.to_u64().count_ones() as usize)
        .sum();
    if tail != 0 {
        count += (units[full].to_u64() & low_mask(tail)).count_ones() as usize;
    }
    count
}

/// Compares the first `total_bits` bits of two equally wide unit buffers.
pub(crate) fn bits_eq<U: Unit, V: Unit>(a: &[U], b: &[V], total_bits: usize) -> bool {
    debug_assert_eq!(U::BITS, V::BITS);
    let unit_bits = U::BITS as usize;
    let full = total_bits / unit_bits;
    let tail = (total_bits % unit_bits) as u32;

    let head_eq = a[..full]
        .iter()
        .zip(&b[..full])
        .all(|(x, y)| x.to_u64() == y.to_u64());
    head_eq && (tail == 0 || (a[full].to_u64() ^ b[full].to_u64()) & low_mask(tail) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_bits() {
        let mut buf = [0u8; 8];
        set_bits(&mut buf, BitIndex(3), 5, 0b10101);
        assert_eq!(get_bits(&buf, BitIndex(3), 5), 0b10101);
        assert_eq!(buf[0], 0b1010_1000);
    }

    #[test]
    fn straddling_write_keeps_neighbours() {
        let mut buf = [0xFFFFu16; 3];
        set_bits(&mut buf, BitIndex(10), 20, 0);
        assert_eq!(buf, [0x03FF, 0xC000, 0xFFFF]);
        assert_eq!(get_bits(&buf, BitIndex(0), 10), 0x3FF);
        assert_eq!(get_bits(&buf, BitIndex(30), 18), 0x3FFFF);
    }

    #[test]
    fn full_width_values() {
        let mut buf = [0u8; 16];
        set_bits(&mut buf, BitIndex(4), 64, 0x0123_4567_89AB_CDEF);
        assert_eq!(get_bits(&buf, BitIndex(4), 64), 0x0123_4567_89AB_CDEF);
        assert_eq!(buf[0], 0xF0);
        assert_eq!(buf[8], 0x00);

        let mut words = [0u64; 2];
        set_bits(&mut words, BitIndex(64), 64, u64::MAX);
        assert_eq!(words, [0, u64::MAX]);
    }

    #[test]
    fn excess_value_bits_are_dropped() {
        let mut buf = [0u32; 1];
        set_bits(&mut buf, BitIndex(0), 4, 0xFF);
        assert_eq!(buf[0], 0x0F);
    }

    #[test]
    fn equality_masks_the_tail() {
        let a = [0xABu8, 0x0F];
        let b = [0xABu8, 0xFF];
        assert!(bits_eq(&a, &b, 12));
        assert!(!bits_eq(&a, &b, 13));
        assert!(!bits_eq(&a, &[0xAAu8, 0x0F], 12));
    }

    #[test]
    fn count_ignores_bits_past_total() {
        let buf = [0xFFu8, 0xFF];
        assert_eq!(count_ones(&buf, 16), 16);
        assert_eq!(count_ones(&buf, 12), 12);
        assert_eq!(count_ones(&buf, 0), 0);
    }
}
