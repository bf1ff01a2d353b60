// ============================================================================
// Converter Configuration
// Rounding policy and the complete converter configuration
// ============================================================================

use super::currency::Currency;
use super::format::FormatMode;
use crate::numeric::{ConvertError, ConvertResult, MAX_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding Policy
// ============================================================================

/// How values are rounded before they are returned or rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Values pass through unrounded
    None,
    /// Round half away from zero to this many decimal places.
    /// Negative values round above the decimal point (-2 => hundreds).
    Precision(i32),
}

impl Rounding {
    /// Default rounding of a new converter.
    ///
    /// Rounds to the nearest hundred, while currency display still shows
    /// two decimal places.
    pub const STANDARD_CURRENCY: Rounding = Rounding::Precision(-2);

    /// Legacy integer value meaning "no rounding".
    pub const LEGACY_NO_ROUNDING: i32 = -1;

    /// Map a legacy integer rounding value.
    pub fn from_legacy(value: i32) -> Self {
        if value == Self::LEGACY_NO_ROUNDING {
            Rounding::None
        } else {
            Rounding::Precision(value)
        }
    }

    pub fn precision(&self) -> Option<i32> {
        match self {
            Rounding::None => None,
            Rounding::Precision(p) => Some(*p),
        }
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Self::STANDARD_CURRENCY
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for creating a [`NumberConverter`](crate::converter::NumberConverter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Convention of string input
    pub format: FormatMode,

    /// Rounding applied by round_value and convert_to_currency
    pub rounding: Rounding,

    /// Currency used for rendering
    pub currency: Currency,

    /// Reject strings that are not entirely a number instead of parsing
    /// their numeric prefix (or 0.0)
    #[cfg_attr(feature = "serde", serde(default))]
    pub strict: bool,
}

impl ConverterConfig {
    /// Create a new configuration with required parameters
    pub fn new(format: FormatMode, rounding: Rounding, currency: Currency) -> Self {
        Self {
            format,
            rounding,
            currency,
            strict: false,
        }
    }

    /// Builder method: Set input format
    pub fn with_format(mut self, format: FormatMode) -> Self {
        self.format = format;
        self
    }

    /// Builder method: Set rounding policy
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Set currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builder method: Enable or disable strict parsing
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConvertResult<()> {
        if let Rounding::Precision(p) = self.rounding {
            if !(-MAX_PRECISION..=MAX_PRECISION).contains(&p) {
                return Err(ConvertError::InvalidRounding(p));
            }
        }

        Ok(())
    }

    /// Build a configuration from the legacy integer constants.
    ///
    /// # Errors
    /// Returns `UndefinedFormat` when `format` is not a known format code.
    pub fn from_legacy(format: u8, rounding: i32, currency: u8) -> ConvertResult<Self> {
        Ok(Self::new(
            FormatMode::try_from(format)?,
            Rounding::from_legacy(rounding),
            Currency::from_code(currency),
        ))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// German input, euro output, cent rounding
    pub fn german_euro() -> Self {
        Self::new(FormatMode::German, Rounding::Precision(2), Currency::Eur)
    }

    /// English input, dollar output, cent rounding
    pub fn english_dollar() -> Self {
        Self::new(FormatMode::English, Rounding::Precision(2), Currency::Usd)
    }
}
