//! Price/Volume decomposition of a payroll variation.
//!
//! Given the payroll snapshot of a period and of the period it is compared
//! against, the variation of gross payroll is split into:
//!
//! - a **Price effect**: `(current avg cost - comparison avg cost) * comparison FTE`
//! - a **Volume effect**: `(current FTE - comparison FTE) * current avg cost`
//!
//! where the average cost of a period is its gross payroll divided by its FTE.
//! Algebraically the two effects sum to `current gross - comparison gross`;
//! the result carries a coherence check so callers can flag periods where the
//! reconciliation drifts beyond tolerance. The check is reported, never raised.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    BonusDistortion, CoherenceCheck, EffectsStatus, PayrollEffects, PayrollMetrics, SnapshotRole,
};

use super::numeric::{
    percentage, round_currency, round_percent, safe_add, safe_div, safe_mul,
};

/// Maximum reconciliation gap, in percent of the absolute variation.
pub const COHERENCE_TOLERANCE_PERCENT: Decimal = Decimal::ONE;

/// Computes the Price/Volume decomposition between two payroll snapshots.
///
/// Returns the neutral effects object (all zero, coherence passing) when:
/// - `comparison` is `None` (first period, status `NoComparison`)
/// - a gross payroll or FTE total is negative (status `InvalidInput`)
/// - either period has zero FTE (status `ZeroFte`)
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::calculate_effects;
/// use hr_metrics_engine::models::PayrollMetrics;
/// use rust_decimal::Decimal;
///
/// let comparison = PayrollMetrics {
///     record_count: 10,
///     gross_payroll: Decimal::from(100_000),
///     total_fte: Decimal::from(20),
///     ..PayrollMetrics::default()
/// };
/// let current = PayrollMetrics {
///     record_count: 11,
///     gross_payroll: Decimal::from(121_000),
///     total_fte: Decimal::from(22),
///     ..PayrollMetrics::default()
/// };
///
/// let effects = calculate_effects(&current, Some(&comparison));
/// // Average cost 5000 -> 5500
/// assert_eq!(effects.price_effect, Decimal::from(10_000));
/// assert_eq!(effects.volume_effect, Decimal::from(11_000));
/// assert_eq!(effects.real_variation, Decimal::from(21_000));
/// assert!(effects.coherence.coherence_ok);
/// ```
pub fn calculate_effects(
    current: &PayrollMetrics,
    comparison: Option<&PayrollMetrics>,
) -> PayrollEffects {
    let Some(comparison) = comparison else {
        debug!("No comparison snapshot, returning neutral effects");
        return PayrollEffects::neutral(EffectsStatus::NoComparison);
    };

    let current_gross = current.gross_payroll;
    let comparison_gross = comparison.gross_payroll;
    let current_fte = current.total_fte;
    let comparison_fte = comparison.total_fte;

    let any_negative = [current_gross, comparison_gross, current_fte, comparison_fte]
        .iter()
        .any(|value| value.is_sign_negative() && !value.is_zero());
    if any_negative {
        warn!(
            current_gross = %current_gross,
            comparison_gross = %comparison_gross,
            current_fte = %current_fte,
            comparison_fte = %comparison_fte,
            "Negative payroll or FTE total, comparison is unusable"
        );
        return PayrollEffects::neutral(EffectsStatus::InvalidInput);
    }

    if current_fte.is_zero() || comparison_fte.is_zero() {
        warn!(
            current_fte = %current_fte,
            comparison_fte = %comparison_fte,
            "Zero FTE in one of the periods, comparison is unusable"
        );
        return PayrollEffects::neutral(EffectsStatus::ZeroFte);
    }

    let current_avg_cost = safe_div(current_gross, current_fte);
    let comparison_avg_cost = safe_div(comparison_gross, comparison_fte);

    let price_effect = safe_mul(current_avg_cost - comparison_avg_cost, comparison_fte);
    let volume_effect = safe_mul(current_fte - comparison_fte, current_avg_cost);
    let real_variation = current_gross - comparison_gross;

    let coherence = check_coherence(safe_add(price_effect, volume_effect), real_variation);
    if !coherence.coherence_ok {
        warn!(
            price_effect = %price_effect,
            volume_effect = %volume_effect,
            real_variation = %real_variation,
            gap = %coherence.gap,
            gap_percent = %coherence.gap_percent,
            "Price and volume effects do not reconcile with the real variation"
        );
    }

    let effects = PayrollEffects {
        status: EffectsStatus::Computed,
        current_gross: round_currency(current_gross),
        comparison_gross: round_currency(comparison_gross),
        current_avg_cost: round_currency(current_avg_cost),
        comparison_avg_cost: round_currency(comparison_avg_cost),
        current_fte: round_currency(current_fte),
        comparison_fte: round_currency(comparison_fte),
        price_effect: round_currency(price_effect),
        volume_effect: round_currency(volume_effect),
        real_variation: round_currency(real_variation),
        variation_percent: round_percent(percentage(real_variation, comparison_gross)),
        coherence,
    };

    debug!(
        price_effect = %effects.price_effect,
        volume_effect = %effects.volume_effect,
        real_variation = %effects.real_variation,
        "Payroll effects computed"
    );

    effects
}

/// Compares the explained variation with the real one.
///
/// The gap is expressed against `max(1, |real variation|)` so that a zero
/// variation falls back to an absolute tolerance.
fn check_coherence(explained: Decimal, real_variation: Decimal) -> CoherenceCheck {
    let gap = (explained - real_variation).abs();
    let scale = real_variation.abs().max(Decimal::ONE);
    let gap_percent = percentage(gap, scale);
    CoherenceCheck {
        gap: round_currency(gap),
        gap_percent: round_percent(gap_percent),
        coherence_ok: gap_percent < COHERENCE_TOLERANCE_PERCENT,
    }
}

/// Detects an exceptional bonus (e.g. an annual 13th-month payment) large
/// enough to distort a period-over-period comparison.
///
/// A period is flagged when its exceptional bonus exceeds
/// `threshold_percent` of its gross payroll. When both periods are flagged the
/// larger share is reported. The Price/Volume figures are not altered.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::detect_bonus_distortion;
/// use hr_metrics_engine::models::{ComponentTotals, PayrollMetrics, SnapshotRole};
/// use rust_decimal::Decimal;
///
/// let december = PayrollMetrics {
///     gross_payroll: Decimal::from(140_000),
///     components: ComponentTotals {
///         exceptional_bonus: Decimal::from(50_000),
///         ..ComponentTotals::default()
///     },
///     ..PayrollMetrics::default()
/// };
///
/// let distortion = detect_bonus_distortion(&december, None, Decimal::from(30));
/// assert!(distortion.detected);
/// assert_eq!(distortion.period, Some(SnapshotRole::Current));
/// assert_eq!(distortion.percent_of_gross, Decimal::new(3571, 2));
/// ```
pub fn detect_bonus_distortion(
    current: &PayrollMetrics,
    comparison: Option<&PayrollMetrics>,
    threshold_percent: Decimal,
) -> BonusDistortion {
    let candidates = [
        Some((SnapshotRole::Current, current)),
        comparison.map(|metrics| (SnapshotRole::Comparison, metrics)),
    ];

    let mut flagged: Option<BonusDistortion> = None;
    for (role, metrics) in candidates.into_iter().flatten() {
        let amount = metrics.components.exceptional_bonus;
        let share = percentage(amount, metrics.gross_payroll);
        if share <= threshold_percent {
            continue;
        }
        let larger = flagged
            .as_ref()
            .is_none_or(|existing| share > existing.percent_of_gross);
        if larger {
            flagged = Some(BonusDistortion {
                detected: true,
                period: Some(role),
                amount: round_currency(amount),
                percent_of_gross: round_percent(share),
            });
        }
    }

    match flagged {
        Some(distortion) => {
            debug!(
                period = ?distortion.period,
                percent_of_gross = %distortion.percent_of_gross,
                "Exceptional bonus distortion detected"
            );
            distortion
        }
        None => BonusDistortion::none(),
    }
}
