// ============================================================================
// Domain Models Module
// Formats, currencies and converter configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod format;

pub use config::{ConverterConfig, Rounding};
pub use currency::{Currency, CurrencyStyle};
pub use format::{DetectionState, FormatMode, NumberFormat};
