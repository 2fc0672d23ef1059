//! Shared numeric helpers used by every calculator.
//!
//! Rounding, guarded arithmetic and the mean/median statistics live here so
//! that the payroll, demographics and effects calculators cannot drift apart.
//! Decimal arithmetic has no NaN or infinity; the failure modes are division by
//! zero and overflow, and both are coerced to zero.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Decimal places for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Decimal places for percentages and ratios.
pub const PERCENT_DP: u32 = 2;

/// Rounds a currency amount to cents, half away from zero.
///
/// The result always carries exactly two decimal places, so `10000` is
/// rendered as `10000.00`.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    round_to(value, CURRENCY_DP)
}

/// Rounds a percentage to two decimals, half away from zero.
pub fn round_percent(value: Decimal) -> Decimal {
    round_to(value, PERCENT_DP)
}

fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Divides `numerator` by `denominator`, returning zero when the division is
/// undefined (zero denominator) or overflows.
///
/// A zero denominator is an expected condition (empty period, no FTE) and is
/// not logged; overflow is.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    match numerator.checked_div(denominator) {
        Some(value) => value,
        None => {
            warn!(
                numerator = %numerator,
                denominator = %denominator,
                "Division overflowed, coercing to zero"
            );
            Decimal::ZERO
        }
    }
}

/// Adds two values, returning zero on overflow.
pub fn safe_add(left: Decimal, right: Decimal) -> Decimal {
    match left.checked_add(right) {
        Some(value) => value,
        None => {
            warn!(left = %left, right = %right, "Addition overflowed, coercing to zero");
            Decimal::ZERO
        }
    }
}

/// Multiplies two values, returning zero on overflow.
pub fn safe_mul(left: Decimal, right: Decimal) -> Decimal {
    match left.checked_mul(right) {
        Some(value) => value,
        None => {
            warn!(left = %left, right = %right, "Multiplication overflowed, coercing to zero");
            Decimal::ZERO
        }
    }
}

/// Returns `part / whole * 100`, or zero when `whole` is zero.
///
/// The result is not rounded.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    safe_mul(safe_div(part, whole), Decimal::ONE_HUNDRED)
}

/// Arithmetic mean. Returns zero for an empty slice.
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let total = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v));
    match total {
        Some(total) => safe_div(total, Decimal::from(values.len())),
        None => {
            warn!(count = values.len(), "Sum overflowed while computing mean, coercing to zero");
            Decimal::ZERO
        }
    }
}

/// Median of a sequence. Returns zero for an empty slice.
///
/// For an odd number of values this is the middle element once sorted; for an
/// even number it is the average of the two middle elements.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::median;
/// use rust_decimal::Decimal;
///
/// let values = [Decimal::from(4), Decimal::from(1), Decimal::from(3), Decimal::from(2)];
/// assert_eq!(median(&values), Decimal::new(25, 1));
/// assert_eq!(median(&[]), Decimal::ZERO);
/// ```
pub fn median(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        mean(&sorted[mid - 1..=mid])
    }
}
