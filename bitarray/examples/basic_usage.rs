use bitarray::{ArrayConfig, BitArray, BitArrayError, DynBitArray};

fn main() -> Result<(), BitArrayError> {
    println!("=== Bit Array Examples ===\n");

    example_small_integers()?;
    example_straddling_units()?;
    example_runtime_widths()?;
    example_memory_savings()?;

    Ok(())
}

fn example_small_integers() -> Result<(), BitArrayError> {
    println!("Example 1: Storing palette indices (5 bits each)");

    let mut colors = BitArray::<u8, u8>::with_element_bits(3, 5)?;

    colors.set(0, 15)?; // Red shade
    colors.set(1, 8)?; // Green shade
    colors.set(2, 23)?; // Blue shade

    println!("  Stored {} colors in {} bytes", colors.len(), colors.as_bytes().len());
    for (i, c) in colors.iter().enumerate() {
        println!("  Color {i}: {c}");
    }

    // only the low 5 bits are kept
    colors.set(1, 0xFF)?;
    println!("  Color 1 after writing 0xFF: {}", colors.get(1)?);
    println!();

    Ok(())
}

fn example_straddling_units() -> Result<(), BitArrayError> {
    println!("Example 2: 32-bit elements over 8-bit units");

    let mut array = BitArray::<u8, u32>::new(4)?;
    array.set(1, 0xAABB_CCDD)?;

    println!("  Element 1: {:#010x}", array.get(1)?);
    println!("  Raw bytes: {:02x?}", array.as_bytes());
    println!("  Set bits:  {}", array.count_set_bits());

    array.fill(0x0F0F_0F0F);
    println!("  After fill, set bits: {}", array.count_set_bits());

    match array.get(4) {
        Err(e) => println!("  Reading index 4: {e}"),
        Ok(v) => println!("  Reading index 4: {v}"),
    }
    println!();

    Ok(())
}

fn example_runtime_widths() -> Result<(), BitArrayError> {
    println!("Example 3: Widths read from the environment");

    let config = ArrayConfig::from_env()?;
    println!(
        "  unit={} element={} size={}",
        config.unit.bits(),
        config.element.bits(),
        config.size.bits()
    );

    let mut array = DynBitArray::new(8, config)?;
    array.fill(config.element.max_value());
    array.clear(3)?;
    println!("  Values: {:?}", array.iter().collect::<Vec<_>>());
    println!("  Set bits: {}", array.count_set_bits());
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), BitArrayError> {
    println!("Example 4: Memory comparison");

    let size = 10_000;
    let normal = size * std::mem::size_of::<u16>();

    let mut packed = BitArray::<u64, u16>::with_element_bits(size, 10)?;
    for i in 0..size {
        packed.set(i, (i % 1024) as u16)?;
    }
    let packed_bytes = packed.as_bytes().len();

    println!("  {size} values (0-1023):");
    println!("  Vec<u16>:          {normal} bytes");
    println!("  10-bit BitArray:   {packed_bytes} bytes");
    println!(
        "  Savings:           {:.1}%",
        (1.0 - packed_bytes as f64 / normal as f64) * 100.0
    );

    Ok(())
}
