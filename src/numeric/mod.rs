// ============================================================================
// Numeric Module
// Rounding and float scanning primitives for the number converter
// ============================================================================
//
// This module provides:
// - ConvertError: Error type for parsing and configuration
// - round_to_precision / to_fixed_places: decimal-exact rounding
// - scan_leading_float: lenient leading-prefix float parsing
//
// Design principles:
// - Callers see f64; rounding goes through rust_decimal internally
// - Fallible operations return Result (no panics)

mod errors;
mod rounding;
mod scan;

pub use errors::{ConvertError, ConvertResult};
pub use rounding::{round_to_precision, to_fixed_places, MAX_PRECISION};
pub use scan::{scan_leading_float, Scanned};
