// ============================================================================
// Decimal Rounding
// Half-away-from-zero rounding at signed decimal precision
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest precision (in either direction) that exact decimal rounding covers.
pub const MAX_PRECISION: i32 = 28;

/// Round `value` to `precision` decimal places, half away from zero.
///
/// Negative precision rounds above the decimal point: `-1` to tens, `-2` to
/// hundreds. The value goes through `rust_decimal` so that inputs such as
/// `1.005` round the way they read (`1.01`) rather than the way their binary
/// representation would. Values outside the decimal range and non-finite
/// values fall back to plain `f64` rounding.
///
/// # Example
/// ```
/// use number_handler::numeric::round_to_precision;
///
/// assert_eq!(round_to_precision(1234.567, 2), 1234.57);
/// assert_eq!(round_to_precision(1234.567, -2), 1200.0);
/// assert_eq!(round_to_precision(-2.5, 0), -3.0);
/// ```
pub fn round_to_precision(value: f64, precision: i32) -> f64 {
    Decimal::from_f64(value)
        .and_then(|d| round_decimal(d, precision))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| round_f64(value, precision))
}

/// Round `value` to exactly `places` fractional digits for display.
///
/// The returned decimal always carries scale `places` (trailing zeros kept),
/// and a value that rounds to zero is never negative. Returns `None` when the
/// value does not fit a decimal at that scale.
pub fn to_fixed_places(value: f64, places: u32) -> Option<Decimal> {
    let mut fixed = Decimal::from_f64(value)?
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    // rescale settles for a smaller scale when the mantissa would overflow
    fixed.rescale(places);
    if fixed.scale() != places {
        return None;
    }
    if fixed.is_zero() {
        fixed.set_sign_positive(true);
    }
    Some(fixed)
}

fn round_decimal(d: Decimal, precision: i32) -> Option<Decimal> {
    if precision >= 0 {
        let dp = precision.min(MAX_PRECISION) as u32;
        return Some(d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero));
    }

    // Every representable decimal is below 10^29, so anything coarser is zero.
    if precision < -MAX_PRECISION {
        return Some(Decimal::ZERO);
    }

    let factor = pow10(precision.unsigned_abs())?;
    d.checked_div(factor)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(factor)
}

fn pow10(exp: u32) -> Option<Decimal> {
    (0..exp).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(Decimal::TEN))
}

fn round_f64(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let mult = 10_f64.powi(precision);
    let rounded = (value * mult).round() / mult;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
