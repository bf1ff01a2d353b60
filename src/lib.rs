// ============================================================================
// Number Handler Library
// Regional number parsing and currency formatting
// ============================================================================

//! # Number Handler
//!
//! Parses numbers written in German (`1.234,56`) or English (`1,234.56`)
//! notation and renders amounts as currency strings.
//!
//! ## Features
//!
//! - **Format auto-detection** from separator patterns, resolved once per converter
//! - **Signed-precision rounding** (half away from zero, `-2` rounds to hundreds)
//! - **Currency rendering** with grouped thousands and a suffixed symbol
//! - **Lenient or strict** parsing of malformed input
//!
//! ## Example
//!
//! ```rust
//! use number_handler::prelude::*;
//!
//! let mut converter = NumberConverter::new(
//!     FormatMode::AutoDetect,
//!     Rounding::Precision(2),
//!     Currency::Usd,
//! );
//!
//! // First string resolves the notation: German
//! assert_eq!(converter.convert_to_float("1.234.567,89").unwrap(), 1234567.89);
//! assert_eq!(converter.detected_format(), FormatMode::German);
//!
//! assert_eq!(converter.convert_to_currency(1234.5).unwrap(), "1,234.50$");
//! assert_eq!(converter.round_value(1.005).unwrap(), 1.01);
//! ```

pub mod converter;
pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::converter::{detect_format, NumberConverter, NumericInput};
    pub use crate::domain::{
        ConverterConfig, Currency, CurrencyStyle, DetectionState, FormatMode, NumberFormat,
        Rounding,
    };
    pub use crate::numeric::{ConvertError, ConvertResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_conversion() {
        let mut converter = NumberConverter::default();

        // German notation resolves detection
        let amount = converter.convert_to_float("12.345,67 €").unwrap();
        assert_eq!(amount, 12345.67);
        assert_eq!(converter.detected_format(), FormatMode::German);

        // Default rounding is to hundreds, display keeps two places
        assert_eq!(converter.convert_to_currency("12.345,67").unwrap(), "12.300,00€");

        // Switch to cents and dollars
        converter.set_rounding(Rounding::Precision(2));
        converter.set_currency(Currency::Usd);
        assert_eq!(converter.convert_to_currency(amount).unwrap(), "12,345.67$");

        // Explicit English input
        converter.set_format(FormatMode::English);
        assert_eq!(converter.round_value("$9,999.995").unwrap(), 10000.0);
        assert_eq!(converter.convert_to_currency("$9,999.995").unwrap(), "10,000.00$");
    }

    #[test]
    fn test_legacy_configuration() {
        // format 3 = English, rounding -1 = none, currency 7 = unknown -> EUR
        let config = ConverterConfig::from_legacy(3, -1, 7).unwrap();
        let mut converter = NumberConverter::from_config(config).unwrap();

        assert_eq!(converter.currency(), Currency::Eur);
        assert_eq!(converter.convert_to_currency("1,234.5").unwrap(), "1.234,50€");

        assert_eq!(
            ConverterConfig::from_legacy(0, 2, 1).unwrap_err(),
            ConvertError::UndefinedFormat(0)
        );
    }

    #[test]
    fn test_independent_instances() {
        let mut first = NumberConverter::default();
        let mut second = NumberConverter::default();

        first.convert_to_float("1.234").unwrap();
        second.convert_to_float("1,234.5").unwrap();

        assert_eq!(first.detected_format(), FormatMode::German);
        assert_eq!(second.detected_format(), FormatMode::English);
    }
}
