//! Human-readable commentary for a Price/Volume decomposition.

use rust_decimal::Decimal;

use crate::config::EffectsThresholds;
use crate::models::{EffectsStatus, PayrollEffects};

use super::numeric::safe_mul;

fn signed(value: Decimal) -> String {
    if value.is_sign_positive() && !value.is_zero() {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Generates commentary strings for a computed decomposition.
///
/// Rules, in order:
/// 1. one effect dominates when it exceeds the other by `dominance_ratio`
/// 2. otherwise, both effects non-zero and within `balanced_effects_percent`
///    of each other are a balanced contribution
/// 3. a variation above `significant_variation_percent` is flagged
/// 4. a failed reconciliation is flagged
///
/// When no rule fires, a plain increase/decrease/stable statement is
/// returned. Neutral effects get a single line explaining why no comparison
/// was made.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::{calculate_effects, generate_commentary};
/// use hr_metrics_engine::config::EffectsThresholds;
/// use hr_metrics_engine::models::PayrollMetrics;
/// use rust_decimal::Decimal;
///
/// let comparison = PayrollMetrics {
///     gross_payroll: Decimal::from(100_000),
///     total_fte: Decimal::from(20),
///     ..PayrollMetrics::default()
/// };
/// let current = PayrollMetrics {
///     gross_payroll: Decimal::from(110_000),
///     total_fte: Decimal::from(20),
///     ..PayrollMetrics::default()
/// };
///
/// let effects = calculate_effects(&current, Some(&comparison));
/// let lines = generate_commentary(&effects, &EffectsThresholds::default());
/// assert!(lines[0].starts_with("Price effect dominates"));
/// ```
pub fn generate_commentary(effects: &PayrollEffects, thresholds: &EffectsThresholds) -> Vec<String> {
    match effects.status {
        EffectsStatus::Computed => {}
        EffectsStatus::NoComparison => {
            return vec!["No comparison period available: this is the first recorded period".to_string()];
        }
        EffectsStatus::InvalidInput => {
            return vec![
                "Comparison unavailable: a payroll or FTE total is negative in one of the periods"
                    .to_string(),
            ];
        }
        EffectsStatus::ZeroFte => {
            return vec!["Comparison unavailable: one of the periods has no FTE".to_string()];
        }
    }

    let mut lines = Vec::new();
    let price = effects.price_effect;
    let volume = effects.volume_effect;
    let price_abs = price.abs();
    let volume_abs = volume.abs();
    let ratio = thresholds.dominance_ratio;

    if price_abs > safe_mul(volume_abs, ratio) {
        let direction = if price.is_sign_negative() { "lower" } else { "higher" };
        lines.push(format!(
            "Price effect dominates: {} driven by a {} average cost per FTE ({} -> {})",
            signed(price),
            direction,
            effects.comparison_avg_cost,
            effects.current_avg_cost
        ));
    } else if volume_abs > safe_mul(price_abs, ratio) {
        let direction = if volume.is_sign_negative() { "fewer" } else { "more" };
        lines.push(format!(
            "Volume effect dominates: {} driven by {} FTE ({} -> {})",
            signed(volume),
            direction,
            effects.comparison_fte,
            effects.current_fte
        ));
    } else if !price.is_zero() && !volume.is_zero() {
        let larger = price_abs.max(volume_abs);
        let distance = (price_abs - volume_abs).abs();
        if safe_mul(distance, Decimal::ONE_HUNDRED)
            <= safe_mul(larger, thresholds.balanced_effects_percent)
        {
            lines.push(format!(
                "Balanced contribution: price effect {} and volume effect {}",
                signed(price),
                signed(volume)
            ));
        }
    }

    if effects.variation_percent.abs() > thresholds.significant_variation_percent {
        lines.push(format!(
            "Significant variation of {}% between the two periods",
            signed(effects.variation_percent)
        ));
    }

    if !effects.coherence.coherence_ok {
        lines.push(format!(
            "Reconciliation gap of {} ({}%) between the effects and the real variation",
            effects.coherence.gap, effects.coherence.gap_percent
        ));
    }

    if lines.is_empty() {
        let variation = effects.real_variation;
        let line = if variation.is_zero() {
            "Payroll is stable between the two periods".to_string()
        } else if variation.is_sign_positive() {
            format!(
                "Payroll increased by {} ({}%)",
                variation,
                signed(effects.variation_percent)
            )
        } else {
            format!(
                "Payroll decreased by {} ({}%)",
                variation.abs(),
                effects.variation_percent
            )
        };
        lines.push(line);
    }

    lines
}
