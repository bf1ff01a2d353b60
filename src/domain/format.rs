// ============================================================================
// Number Format Domain Model
// Input conventions and the auto-detection state machine
// ============================================================================

use crate::numeric::ConvertError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Number Format
// ============================================================================

/// A concrete regional number convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberFormat {
    /// Dot groups thousands, comma separates decimals: `1.234,56`
    German,
    /// Comma groups thousands, dot separates decimals: `1,234.56`
    English,
}

impl NumberFormat {
    pub fn decimal_separator(&self) -> char {
        match self {
            NumberFormat::German => ',',
            NumberFormat::English => '.',
        }
    }

    pub fn thousands_separator(&self) -> char {
        match self {
            NumberFormat::German => '.',
            NumberFormat::English => ',',
        }
    }
}

// ============================================================================
// Format Mode
// ============================================================================

/// Input format a converter is configured with.
///
/// Legacy integer codes: `1` auto-detect, `2` German, `3` English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatMode {
    /// Infer the convention from the first string parsed, then keep it
    #[default]
    AutoDetect = 1,
    German = 2,
    English = 3,
}

impl FormatMode {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// The fixed convention for explicit modes, `None` for auto-detection.
    pub fn number_format(&self) -> Option<NumberFormat> {
        match self {
            FormatMode::AutoDetect => None,
            FormatMode::German => Some(NumberFormat::German),
            FormatMode::English => Some(NumberFormat::English),
        }
    }
}

impl From<NumberFormat> for FormatMode {
    fn from(format: NumberFormat) -> Self {
        match format {
            NumberFormat::German => FormatMode::German,
            NumberFormat::English => FormatMode::English,
        }
    }
}

impl TryFrom<u8> for FormatMode {
    type Error = ConvertError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(FormatMode::AutoDetect),
            2 => Ok(FormatMode::German),
            3 => Ok(FormatMode::English),
            other => Err(ConvertError::UndefinedFormat(other)),
        }
    }
}

// ============================================================================
// Detection State
// ============================================================================

/// Which convention string input is parsed with.
///
/// Auto-detection starts `Pending` and moves to `Resolved` on the first
/// string parse. It never goes back on its own; only reassigning the format
/// mode resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionState {
    Pending,
    Resolved(NumberFormat),
}

impl DetectionState {
    /// Initial state for a configured mode.
    pub fn for_mode(mode: FormatMode) -> Self {
        match mode.number_format() {
            Some(format) => DetectionState::Resolved(format),
            None => DetectionState::Pending,
        }
    }

    pub fn resolved(&self) -> Option<NumberFormat> {
        match self {
            DetectionState::Pending => None,
            DetectionState::Resolved(format) => Some(*format),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DetectionState::Pending)
    }
}
