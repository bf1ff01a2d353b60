// ============================================================================
// Currency Domain Model
// Supported currencies and their fixed display conventions
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display convention for a currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// Appended directly after the number, no space
    pub symbol: char,
    pub decimal_places: u32,
}

const EUR_STYLE: CurrencyStyle = CurrencyStyle {
    thousands_separator: '.',
    decimal_separator: ',',
    symbol: '€',
    decimal_places: 2,
};

const USD_STYLE: CurrencyStyle = CurrencyStyle {
    thousands_separator: ',',
    decimal_separator: '.',
    symbol: '$',
    decimal_places: 2,
};

/// Currency used when rendering amounts.
///
/// Legacy integer codes: `1` EUR, `2` USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Currency {
    #[default]
    Eur = 1,
    Usd = 2,
}

impl Currency {
    /// Map a legacy currency code; unknown codes render as euros.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Currency::Usd,
            _ => Currency::Eur,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn style(&self) -> CurrencyStyle {
        match self {
            Currency::Eur => EUR_STYLE,
            Currency::Usd => USD_STYLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        let eur = Currency::Eur.style();
        assert_eq!(eur.thousands_separator, '.');
        assert_eq!(eur.decimal_separator, ',');
        assert_eq!(eur.symbol, '\u{20AC}');
        assert_eq!(eur.decimal_places, 2);

        let usd = Currency::Usd.style();
        assert_eq!(usd.thousands_separator, ',');
        assert_eq!(usd.decimal_separator, '.');
        assert_eq!(usd.symbol, '$');
        assert_eq!(usd.decimal_places, 2);
    }

    #[test]
    fn test_legacy_codes_fall_back_to_euro() {
        assert_eq!(Currency::from_code(1), Currency::Eur);
        assert_eq!(Currency::from_code(2), Currency::Usd);
        assert_eq!(Currency::from_code(0), Currency::Eur);
        assert_eq!(Currency::from_code(99).style(), Currency::Eur.style());
        assert_eq!(Currency::Usd.code(), 2);
    }
}
