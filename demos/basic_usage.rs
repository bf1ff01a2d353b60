// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging

use number_handler::prelude::*;

fn main() -> Result<(), ConvertError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number Handler Example ===\n");

    // Auto-detecting converter with default rounding (hundreds) and euros
    let mut converter = NumberConverter::default();

    println!("Parsing German input...");
    for input in ["1.234.567,89", "12,5", "1,234.56"] {
        let value = converter.convert_to_float(input)?;
        println!("  {:>14} -> {}", input, value);
    }
    println!("Detected format: {:?}\n", converter.detected_format());

    println!("Rendering with hundreds rounding:");
    println!("  {}", converter.convert_to_currency(1234.567)?);

    // Switch to English input, cents and dollars
    converter.set_format(FormatMode::English);
    converter.set_rounding(Rounding::Precision(2));
    converter.set_currency(Currency::Usd);

    println!("\nRendering English input as dollars:");
    for input in ["1,234.5", "$99.999", "-0.004"] {
        println!("  {:>10} -> {}", input, converter.convert_to_currency(input)?);
    }

    println!("\nLegacy configuration (format=2, rounding=-1, currency=1):");
    let config = ConverterConfig::from_legacy(2, -1, 1)?;
    let mut legacy = NumberConverter::from_config(config)?;
    println!("  {}", legacy.convert_to_currency("1.234,5")?);

    Ok(())
}
