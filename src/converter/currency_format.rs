// ============================================================================
// Currency Rendering
// Fixed-place, digit-grouped amounts with a suffixed currency symbol
// ============================================================================

use crate::domain::CurrencyStyle;
use crate::numeric::to_fixed_places;

/// Render `value` as an amount in the given style.
///
/// The number is rounded half away from zero to the style's decimal places,
/// grouped in thousands and followed by the symbol: `1.234,50€`, `1,234.50$`.
/// Negative amounts carry a leading `-`.
pub fn format_amount(value: f64, style: &CurrencyStyle) -> String {
    if !value.is_finite() {
        return format!("{}{}", value, style.symbol);
    }

    let places = style.decimal_places;
    let plain = match to_fixed_places(value, places) {
        Some(fixed) => fixed.to_string(),
        // beyond the decimal range; f64 formatting is exact enough here
        None => format!("{:.*}", places as usize, value),
    };

    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, style.thousands_separator));
    if places > 0 {
        out.push(style.decimal_separator);
        out.push_str(frac_part);
    }
    out.push(style.symbol);
    out
}

/// Insert `separator` between every group of three digits, counted from the
/// right: `1234567` -> `1.234.567`.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;
    use proptest::prelude::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", '.'), "0");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("123456", ','), "123,456");
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
    }

    #[test]
    fn test_euro_amounts() {
        let eur = Currency::Eur.style();
        assert_eq!(format_amount(1234.56, &eur), "1.234,56€");
        assert_eq!(format_amount(1200.0, &eur), "1.200,00€");
        assert_eq!(format_amount(0.5, &eur), "0,50€");
        assert_eq!(format_amount(1234567.891, &eur), "1.234.567,89€");
    }

    #[test]
    fn test_dollar_amounts() {
        let usd = Currency::Usd.style();
        assert_eq!(format_amount(1234.5, &usd), "1,234.50$");
        assert_eq!(format_amount(999.999, &usd), "1,000.00$");
        assert_eq!(format_amount(0.0, &usd), "0.00$");
    }

    #[test]
    fn test_negative_amounts() {
        let eur = Currency::Eur.style();
        assert_eq!(format_amount(-1234.5, &eur), "-1.234,50€");
        assert_eq!(format_amount(-0.004, &eur), "0,00€");
        assert_eq!(format_amount(-0.005, &eur), "-0,01€");
    }

    #[test]
    fn test_zero_decimal_places() {
        let style = CurrencyStyle {
            decimal_places: 0,
            ..Currency::Usd.style()
        };
        assert_eq!(format_amount(1234.5, &style), "1,235$");
    }

    #[test]
    fn test_out_of_range_amounts() {
        let usd = Currency::Usd.style();
        assert_eq!(format_amount(f64::INFINITY, &usd), "inf$");
        assert_eq!(format_amount(1e30, &usd), format!("{}.00$", group_thousands(&format!("{:.0}", 1e30), ',')));
    }

    #[test]
    fn test_amounts_near_decimal_limit_keep_two_places() {
        let usd = Currency::Usd.style();
        for value in [1e27, 1e28] {
            let expected = format!("{}.00$", group_thousands(&format!("{:.0}", value), ','));
            assert_eq!(format_amount(value, &usd), expected);
        }
    }

    proptest! {
        #[test]
        fn prop_grouping_preserves_digits(n in 0u64..u64::MAX) {
            let digits = n.to_string();
            let grouped = group_thousands(&digits, '.');
            prop_assert_eq!(grouped.replace('.', ""), digits);

            let groups: Vec<&str> = grouped.split('.').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
