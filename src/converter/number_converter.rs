// ============================================================================
// Number Converter
// Parses German/English numeric strings and renders currency amounts
// ============================================================================

use super::currency_format::format_amount;
use super::detect::detect_format;
use super::input::NumericInput;
use crate::domain::{
    ConverterConfig, Currency, DetectionState, FormatMode, NumberFormat, Rounding,
};
use crate::numeric::{round_to_precision, scan_leading_float, ConvertError, ConvertResult};

/// Converter between regional numeric notation, `f64` and currency strings.
///
/// A converter in [`FormatMode::AutoDetect`] resolves the notation from the
/// first string it parses and keeps using it for every later string, even if
/// a later string is written the other way. Call [`set_format`] to reset.
///
/// Parsing mutates the detection state, so operations take `&mut self`.
/// Share an instance across threads only behind your own synchronization.
///
/// [`set_format`]: NumberConverter::set_format
#[derive(Debug, Clone)]
pub struct NumberConverter {
    /// Configured input format
    format: FormatMode,

    /// Notation string input is currently parsed with
    detection: DetectionState,

    /// Rounding for round_value and convert_to_currency
    rounding: Rounding,

    /// Currency for convert_to_currency
    currency: Currency,

    /// Reject non-numeric strings instead of parsing leniently
    strict: bool,
}

impl NumberConverter {
    /// Create a new converter
    pub fn new(format: FormatMode, rounding: Rounding, currency: Currency) -> Self {
        Self {
            format,
            detection: DetectionState::for_mode(format),
            rounding,
            currency,
            strict: false,
        }
    }

    /// Create a converter from a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidRounding` if the rounding precision is out of range.
    pub fn from_config(config: ConverterConfig) -> ConvertResult<Self> {
        config.validate()?;

        let mut converter = Self::new(config.format, config.rounding, config.currency);
        converter.strict = config.strict;
        Ok(converter)
    }

    // ========================================================================
    // Conversion Operations
    // ========================================================================

    /// Convert a float, integer or numeric string to `f64`.
    ///
    /// Numbers pass through unchanged. Strings are parsed in the active
    /// notation after dropping every character that is not a digit, a minus
    /// sign or the decimal separator:
    /// - English: `"1,234.56 $"` -> `1234.56`
    /// - German: `"1.234,56 €"` -> `1234.56`
    ///
    /// Unless strict parsing is on, a string with no digits yields `0.0` and
    /// trailing malformed parts are ignored (`"1.2.3"` -> `1.2`).
    ///
    /// # Errors
    /// Returns `InvalidNumber` in strict mode when the string is not exactly
    /// one number.
    pub fn convert_to_float<'a>(
        &mut self,
        value: impl Into<NumericInput<'a>>,
    ) -> ConvertResult<f64> {
        match value.into() {
            NumericInput::Float(v) => Ok(v),
            NumericInput::Integer(v) => Ok(v as f64),
            NumericInput::Text(text) => self.parse_text(text),
        }
    }

    /// Convert a value to a currency string such as `1.234,56€` or `1,234.50$`.
    ///
    /// The rounding policy is applied first; the amount is then always shown
    /// with the currency's two decimal places, so with the default hundreds
    /// rounding `1234.567` renders as `1.200,00€`.
    pub fn convert_to_currency<'a>(
        &mut self,
        value: impl Into<NumericInput<'a>>,
    ) -> ConvertResult<String> {
        let mut amount = self.convert_to_float(value)?;

        if self.rounding != Rounding::None {
            amount = self.round_value(amount)?;
        }

        let formatted = format_amount(amount, &self.currency.style());
        tracing::trace!("Formatted {} as {:?} ({:?})", amount, formatted, self.currency);
        Ok(formatted)
    }

    /// Convert a value to `f64` and round it by the rounding policy.
    pub fn round_value<'a>(&mut self, value: impl Into<NumericInput<'a>>) -> ConvertResult<f64> {
        let value = self.convert_to_float(value)?;

        match self.rounding.precision() {
            Some(precision) => Ok(round_to_precision(value, precision)),
            None => Ok(value),
        }
    }

    fn parse_text(&mut self, text: &str) -> ConvertResult<f64> {
        let format = match self.detection {
            DetectionState::Resolved(format) => format,
            DetectionState::Pending => {
                let detected = detect_format(text);
                tracing::debug!("Detected {:?} number format from {:?}", detected, text);
                self.detection = DetectionState::Resolved(detected);
                detected
            }
        };

        let normalized = normalize(text, format);
        let scanned = scan_leading_float(&normalized);

        if self.strict && !scanned.is_exact() {
            return Err(ConvertError::InvalidNumber {
                input: text.to_string(),
            });
        }

        tracing::trace!("Parsed {:?} as {} ({:?})", text, scanned.value, format);
        Ok(scanned.value)
    }

    // ========================================================================
    // Configuration Accessors
    // ========================================================================

    /// Set the input format. This also replaces any auto-detected notation.
    pub fn set_format(&mut self, format: FormatMode) {
        tracing::debug!("Input format set to {:?}", format);
        self.format = format;
        self.detection = DetectionState::for_mode(format);
    }

    /// The configured input format
    pub fn format(&self) -> FormatMode {
        self.format
    }

    /// The notation string input is parsed with, `AutoDetect` while
    /// detection is still pending.
    pub fn detected_format(&self) -> FormatMode {
        self.detection
            .resolved()
            .map_or(FormatMode::AutoDetect, FormatMode::from)
    }

    pub fn detection_state(&self) -> DetectionState {
        self.detection
    }

    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ConverterConfig {
        ConverterConfig::new(self.format, self.rounding, self.currency).with_strict(self.strict)
    }
}

impl Default for NumberConverter {
    /// Auto-detected input, hundreds rounding, euro output
    fn default() -> Self {
        Self::new(FormatMode::AutoDetect, Rounding::STANDARD_CURRENCY, Currency::Eur)
    }
}

/// Drop thousands separators, then keep digits, minus signs and the decimal
/// separator, the latter as `.`.
fn normalize(text: &str, format: NumberFormat) -> String {
    let thousands = format.thousands_separator();
    let decimal = format.decimal_separator();
    text.chars()
        .filter(|c| *c != thousands)
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == decimal)
        .map(|c| if c == decimal { '.' } else { c })
        .collect()
}
