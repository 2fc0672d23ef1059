//! Waterfall chart data for a Price/Volume decomposition.

use rust_decimal::Decimal;

use crate::models::{PayrollEffects, WaterfallBar, WaterfallBarKind, WaterfallData};

use super::numeric::safe_add;

fn total(label: &str, value: Decimal) -> WaterfallBar {
    WaterfallBar {
        label: label.to_string(),
        kind: WaterfallBarKind::Total,
        value,
        running_total: value,
    }
}

fn delta(label: &str, value: Decimal, running_total: Decimal) -> WaterfallBar {
    WaterfallBar {
        label: label.to_string(),
        kind: WaterfallBarKind::Delta,
        value,
        running_total,
    }
}

/// Lays out the bars of the payroll waterfall.
///
/// The bars go from the comparison payroll to the current payroll through
/// the price and volume effects. When rounding leaves a residual between the
/// effects and the real variation, an `unexplained_gap` bar closes the
/// waterfall so the running total lands exactly on the current payroll.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::{build_waterfall, calculate_effects};
/// use hr_metrics_engine::models::PayrollMetrics;
/// use rust_decimal::Decimal;
///
/// let comparison = PayrollMetrics {
///     gross_payroll: Decimal::from(100_000),
///     total_fte: Decimal::from(20),
///     ..PayrollMetrics::default()
/// };
/// let current = PayrollMetrics {
///     gross_payroll: Decimal::from(121_000),
///     total_fte: Decimal::from(22),
///     ..PayrollMetrics::default()
/// };
///
/// let waterfall = build_waterfall(&calculate_effects(&current, Some(&comparison)));
/// let labels: Vec<&str> = waterfall.bars.iter().map(|b| b.label.as_str()).collect();
/// assert_eq!(labels, ["comparison_payroll", "price_effect", "volume_effect", "current_payroll"]);
/// ```
pub fn build_waterfall(effects: &PayrollEffects) -> WaterfallData {
    let mut bars = Vec::with_capacity(5);
    let mut running = effects.comparison_gross;
    bars.push(total("comparison_payroll", running));

    running = safe_add(running, effects.price_effect);
    bars.push(delta("price_effect", effects.price_effect, running));

    running = safe_add(running, effects.volume_effect);
    bars.push(delta("volume_effect", effects.volume_effect, running));

    let residual = safe_add(effects.current_gross, -running);
    if !residual.is_zero() {
        bars.push(delta("unexplained_gap", residual, effects.current_gross));
    }

    bars.push(total("current_payroll", effects.current_gross));

    WaterfallData { bars }
}
