// ============================================================================
// Format Detection
// Separator-pattern heuristic choosing German or English notation
// ============================================================================

use crate::domain::NumberFormat;
use regex::Regex;
use std::sync::OnceLock;

/// Single leading digit, dot-grouped thousands, optional comma decimals:
/// `1.234`, `1.234.567`, `1.234,50` (not `1.23`, not `12.345`).
fn dot_grouped() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9](\.[0-9]{3})+(,[0-9]+)?\n?$").expect("valid regex"))
}

/// Exactly one comma with something on both sides.
fn single_comma() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^,]+,[^,]+$").expect("valid regex"))
}

/// Digits, a comma, whole three-digit groups, optional dot decimals:
/// `1,234`, `12,345`, `1,234.56`.
fn comma_grouped() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+,([0-9]{3})+(\.[0-9]+)?\n?$").expect("valid regex"))
}

/// Guess the convention a numeric string is written in.
///
/// Never fails: anything the rules do not recognize is English.
///
/// | Input | Result |
/// |---|---|
/// | `1.234.567,89` | German |
/// | `12,5` | German |
/// | `1,234` | English |
/// | `1,234.56` | English |
/// | `1.23` | English |
pub fn detect_format(value: &str) -> NumberFormat {
    if dot_grouped().is_match(value) {
        return NumberFormat::German;
    }

    if single_comma().is_match(value) {
        if comma_grouped().is_match(value) {
            return NumberFormat::English;
        }
        return NumberFormat::German;
    }

    NumberFormat::English
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_grouped_thousands_are_german() {
        assert_eq!(detect_format("1.234.567,89"), NumberFormat::German);
        assert_eq!(detect_format("1.234.567"), NumberFormat::German);
        assert_eq!(detect_format("1.234"), NumberFormat::German);
        assert_eq!(detect_format("1.234,5"), NumberFormat::German);
    }

    #[test]
    fn test_single_trailing_newline_is_tolerated() {
        assert_eq!(detect_format("1.234\n"), NumberFormat::German);
        assert_eq!(detect_format("1,234\n"), NumberFormat::English);
        assert_eq!(detect_format("1.234\n\n"), NumberFormat::English);
    }

    #[test]
    fn test_single_comma_decimal_is_german() {
        assert_eq!(detect_format("12,5"), NumberFormat::German);
        assert_eq!(detect_format("1234,56"), NumberFormat::German);
        assert_eq!(detect_format("12.345,67"), NumberFormat::German);
        assert_eq!(detect_format("1,23 EUR"), NumberFormat::German);
        // sign is outside the digit-group rule
        assert_eq!(detect_format("-1,234.5"), NumberFormat::German);
    }

    #[test]
    fn test_comma_thousands_is_english() {
        assert_eq!(detect_format("1,234"), NumberFormat::English);
        assert_eq!(detect_format("12,345"), NumberFormat::English);
        assert_eq!(detect_format("1,234567"), NumberFormat::English);
        assert_eq!(detect_format("1,234.56"), NumberFormat::English);
    }

    #[test]
    fn test_fallthrough_is_english() {
        assert_eq!(detect_format("1.23"), NumberFormat::English);
        assert_eq!(detect_format("1,234,567.89"), NumberFormat::English);
        assert_eq!(detect_format("12.345"), NumberFormat::English);
        assert_eq!(detect_format("1234"), NumberFormat::English);
        assert_eq!(detect_format(""), NumberFormat::English);
        assert_eq!(detect_format(",5"), NumberFormat::English);
    }

    #[test]
    fn test_non_ascii_digits_are_not_grouping() {
        // Arabic-Indic digits
        assert_eq!(detect_format("\u{661}.\u{662}\u{663}\u{664}"), NumberFormat::English);
    }
}
