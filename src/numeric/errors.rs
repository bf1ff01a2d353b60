// ============================================================================
// Conversion Errors
// Error types for number parsing and converter configuration
// ============================================================================

use std::fmt;

/// Errors that can occur while configuring a converter or parsing a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConvertError {
    /// Legacy format code that maps to no known input format
    UndefinedFormat(u8),
    /// Input string is not a number (strict parsing only)
    InvalidNumber {
        /// The raw input as passed by the caller
        input: String,
    },
    /// Rounding precision outside the supported decimal range
    InvalidRounding(i32),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UndefinedFormat(code) => {
                write!(f, "undefined format: no input format for code {}", code)
            },
            ConvertError::InvalidNumber { input } => {
                write!(f, "invalid number: could not parse {:?}", input)
            },
            ConvertError::InvalidRounding(precision) => write!(
                f,
                "invalid rounding: precision {} outside -28..=28",
                precision
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
