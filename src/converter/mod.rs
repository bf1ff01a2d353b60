// ============================================================================
// Converter Module
// Format detection, parsing and currency rendering
// ============================================================================

pub mod currency_format;
pub mod detect;
pub mod input;
pub mod number_converter;

pub use currency_format::{format_amount, group_thousands};
pub use detect::detect_format;
pub use input::NumericInput;
pub use number_converter::NumberConverter;
