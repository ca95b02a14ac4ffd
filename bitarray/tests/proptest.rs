// tests/proptest.rs

use bitarray::{BitArray, Unit};
use proptest::prelude::*;

fn mask(bits: u32) -> u64 {
    u64::MAX >> (64 - bits)
}

//
// -----------------------------------------------------------------------------
// BitArray Properties - Basic Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_and_get_roundtrip(
        bits in 1u32..=32,
        values in prop::collection::vec(any::<u32>(), 0..300)
    ) {
        let mut array = BitArray::<u8, u32>::with_element_bits(values.len(), bits).unwrap();

        for (i, &v) in values.iter().enumerate() {
            array.set(i, v).unwrap();
        }

        prop_assert_eq!(array.len(), values.len());

        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i).unwrap() as u64, v as u64 & mask(bits));
        }
    }
}

proptest! {
    #[test]
    fn prop_set_updates_only_target(
        bits in 1u32..=64,
        values in prop::collection::vec(any::<u64>(), 1..100),
        update_idx in 0usize..100,
        new_val in any::<u64>()
    ) {
        let mut array = BitArray::<u16, u64>::with_element_bits(values.len(), bits).unwrap();

        for (i, &v) in values.iter().enumerate() {
            array.set(i, v).unwrap();
        }

        let idx = update_idx % values.len();
        array.set(idx, new_val).unwrap();
        prop_assert_eq!(array.get(idx).unwrap(), new_val & mask(bits));

        for (i, &expected) in values.iter().enumerate() {
            if i != idx {
                prop_assert_eq!(array.get(i).unwrap(), expected & mask(bits));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_iterator_matches_get(values in prop::collection::vec(0u16..1024, 0..500)) {
        let array = BitArray::<u32, u16>::from_elements(10, values.iter().copied()).unwrap();

        let collected: Vec<_> = array.iter().collect();
        prop_assert_eq!(&collected, &values);

        let reversed: Vec<_> = array.iter().rev().collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(reversed, expected);
    }
}

proptest! {
    #[test]
    fn prop_count_matches_popcount(
        bits in 1u32..=16,
        values in prop::collection::vec(any::<u16>(), 0..300)
    ) {
        let array = BitArray::<u64, u16>::from_elements(bits, values.iter().copied()).unwrap();

        let expected: usize = values
            .iter()
            .map(|&v| (v as u64 & mask(bits)).count_ones() as usize)
            .sum();
        prop_assert_eq!(array.count_set_bits(), expected);
    }
}

//
// -----------------------------------------------------------------------------
// Fill, Padding and Equality across Unit Widths
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_fill_matches_per_element_writes(
        unit in prop::sample::select(vec![8u32, 16, 32, 64]),
        bits in 1u32..=64,
        len in 0usize..200,
        value in any::<u64>()
    ) {
        match unit {
            8 => check_fill::<u8>(bits, len, value),
            16 => check_fill::<u16>(bits, len, value),
            32 => check_fill::<u32>(bits, len, value),
            64 => check_fill::<u64>(bits, len, value),
            _ => Ok(()),
        }?;
    }
}

fn check_fill<U: Unit>(
    bits: u32,
    len: usize,
    value: u64,
) -> Result<(), proptest::test_runner::TestCaseError> {
    let mut filled = BitArray::<U, u64>::with_element_bits(len, bits).unwrap();
    filled.fill(value);

    let mut written = BitArray::<U, u64>::with_element_bits(len, bits).unwrap();
    for i in 0..len {
        written.set(i, value).unwrap();
    }

    prop_assert_eq!(filled.as_units(), written.as_units());
    prop_assert_eq!(filled.count_set_bits(), len * (value & mask(bits)).count_ones() as usize);

    Ok(())
}

proptest! {
    #[test]
    fn prop_padding_survives_writes(
        len in 1usize..40,
        padding in any::<u64>(),
        writes in prop::collection::vec((0usize..40, any::<u16>()), 0..60)
    ) {
        // 7-bit elements in 64-bit units leave padding in the last unit
        let units = BitArray::<u64, u16>::storage_units(len, 7).unwrap();
        let used = len * 7 - (units - 1) * 64;
        let pad_mask = !mask(used as u32);
        let mut raw = vec![0u64; units];
        *raw.last_mut().unwrap() = padding & pad_mask;

        let mut array = BitArray::<u64, u16>::from_units(len, 7, raw).unwrap();
        prop_assert_eq!(array.count_set_bits(), 0);

        for (idx, v) in writes {
            array.set(idx % len, v).unwrap();
        }
        array.fill(0x55);

        prop_assert_eq!(array.as_units().last().unwrap() & pad_mask, padding & pad_mask);
        prop_assert_eq!(array.count_set_bits(), len * 4);
    }
}

proptest! {
    #[test]
    fn prop_equality_across_unit_widths(
        bits in 1u32..=32,
        values in prop::collection::vec(any::<u32>(), 0..100)
    ) {
        let bytes = BitArray::<u8, u32>::from_elements(bits, values.iter().copied()).unwrap();
        let words = BitArray::<u64, u32, u64>::from_elements(bits, values.iter().copied()).unwrap();
        prop_assert!(bytes == words);

        if !values.is_empty() {
            let mut changed = words.clone();
            let old = changed.get(0).unwrap();
            changed.set(0, !old).unwrap();
            prop_assert!(bytes != changed);
            prop_assert!(bytes == words);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Runtime-selected widths
// -----------------------------------------------------------------------------

#[cfg(feature = "dynamic")]
proptest! {
    #[test]
    fn prop_dynamic_matches_generic(
        unit in prop::sample::select(vec![8u32, 16, 32, 64]),
        element in prop::sample::select(vec![8u32, 16, 32, 64]),
        values in prop::collection::vec(any::<u64>(), 0..100)
    ) {
        use bitarray::{ArrayConfig, DynBitArray};

        let config = ArrayConfig::new(unit, element, 32).unwrap();
        let mut dynamic = DynBitArray::new(values.len(), config).unwrap();
        let mut generic = BitArray::<u8, u64>::with_element_bits(values.len(), element).unwrap();

        for (i, &v) in values.iter().enumerate() {
            dynamic.set(i, v).unwrap();
            generic.set(i, v).unwrap();
        }

        prop_assert_eq!(dynamic.iter().collect::<Vec<_>>(), generic.iter().collect::<Vec<_>>());
        prop_assert_eq!(dynamic.count_set_bits(), generic.count_set_bits());
    }
}

//
// -----------------------------------------------------------------------------
// Element type narrower than the unit
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_byte_elements_in_wider_units(values in prop::collection::vec(any::<u8>(), 0..200)) {
        let array = BitArray::<u16, u8>::from_elements(8, values.iter().copied()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i).unwrap(), v);
        }
    }
}
