//! Price/Volume decomposition results.
//!
//! These types are derived on demand from two [`PayrollMetrics`] snapshots and
//! are never authoritative on their own.
//!
//! [`PayrollMetrics`]: super::PayrollMetrics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why an effects object holds the values it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectsStatus {
    /// Both snapshots were usable and the decomposition was computed.
    Computed,
    /// No comparison snapshot exists (first period of the establishment).
    NoComparison,
    /// A gross payroll or FTE total was negative.
    InvalidInput,
    /// One of the two periods has zero FTE.
    ZeroFte,
}

/// Gap between Price + Volume and the observed variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceCheck {
    /// Absolute gap, in currency.
    pub gap: Decimal,
    /// Gap as a percentage of the absolute variation (floored at one unit).
    pub gap_percent: Decimal,
    /// True when the gap percentage is below the tolerance.
    pub coherence_ok: bool,
}

impl Default for CoherenceCheck {
    fn default() -> Self {
        Self {
            gap: Decimal::ZERO,
            gap_percent: Decimal::ZERO,
            coherence_ok: true,
        }
    }
}

/// Price/Volume decomposition of a payroll variation between two periods.
///
/// # Example
///
/// ```
/// use hr_metrics_engine::models::{EffectsStatus, PayrollEffects};
///
/// let neutral = PayrollEffects::neutral(EffectsStatus::NoComparison);
/// assert!(neutral.coherence.coherence_ok);
/// assert!(neutral.price_effect.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEffects {
    /// How the values were obtained.
    pub status: EffectsStatus,
    /// Gross payroll of the current period.
    pub current_gross: Decimal,
    /// Gross payroll of the comparison period.
    pub comparison_gross: Decimal,
    /// Average cost per FTE in the current period.
    pub current_avg_cost: Decimal,
    /// Average cost per FTE in the comparison period.
    pub comparison_avg_cost: Decimal,
    /// FTE total of the current period.
    pub current_fte: Decimal,
    /// FTE total of the comparison period.
    pub comparison_fte: Decimal,
    /// Variation attributable to the change in average cost per FTE.
    pub price_effect: Decimal,
    /// Variation attributable to the change in FTE.
    pub volume_effect: Decimal,
    /// Observed variation: current gross minus comparison gross.
    pub real_variation: Decimal,
    /// Observed variation as a percentage of the comparison gross.
    pub variation_percent: Decimal,
    /// Reconciliation of the two effects against the observed variation.
    pub coherence: CoherenceCheck,
}

impl PayrollEffects {
    /// Returns the all-zero effects object with a passing coherence check.
    pub fn neutral(status: EffectsStatus) -> Self {
        Self {
            status,
            current_gross: Decimal::ZERO,
            comparison_gross: Decimal::ZERO,
            current_avg_cost: Decimal::ZERO,
            comparison_avg_cost: Decimal::ZERO,
            current_fte: Decimal::ZERO,
            comparison_fte: Decimal::ZERO,
            price_effect: Decimal::ZERO,
            volume_effect: Decimal::ZERO,
            real_variation: Decimal::ZERO,
            variation_percent: Decimal::ZERO,
            coherence: CoherenceCheck::default(),
        }
    }

    /// Returns true when the decomposition was actually computed.
    pub fn is_computed(&self) -> bool {
        self.status == EffectsStatus::Computed
    }

    /// Price effect plus volume effect.
    pub fn explained_variation(&self) -> Decimal {
        self.price_effect + self.volume_effect
    }
}

/// Which snapshot of a comparison a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotRole {
    /// The period being reported on.
    Current,
    /// The period it is compared against.
    Comparison,
}

/// Result of the exceptional-bonus distortion check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusDistortion {
    /// True when a period's exceptional bonus exceeds the threshold share of gross.
    pub detected: bool,
    /// The period carrying the largest exceptional-bonus share, if detected.
    pub period: Option<SnapshotRole>,
    /// Exceptional bonus total of that period.
    pub amount: Decimal,
    /// Exceptional bonus as a percentage of that period's gross payroll.
    pub percent_of_gross: Decimal,
}

impl BonusDistortion {
    /// The "nothing detected" value.
    pub fn none() -> Self {
        Self {
            detected: false,
            period: None,
            amount: Decimal::ZERO,
            percent_of_gross: Decimal::ZERO,
        }
    }

    /// Call-out for the waterfall commentary, when a distortion was detected.
    pub fn commentary(&self) -> Option<String> {
        if !self.detected {
            return None;
        }
        let which = match self.period {
            Some(SnapshotRole::Comparison) => "comparison period",
            _ => "current period",
        };
        Some(format!(
            "Exceptional bonus of {} in the {} represents {}% of gross payroll; \
             an annual bonus is probably distorting the comparison",
            self.amount, which, self.percent_of_gross
        ))
    }
}

/// Kind of bar in a waterfall chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterfallBarKind {
    /// An absolute level (start or end of the waterfall).
    Total,
    /// A signed step between two levels.
    Delta,
}

/// One bar of a waterfall chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallBar {
    /// Stable label used by the UI for translation.
    pub label: String,
    /// Bar kind.
    pub kind: WaterfallBarKind,
    /// Bar value (level for totals, signed step for deltas).
    pub value: Decimal,
    /// Running level after this bar.
    pub running_total: Decimal,
}

/// Ordered bars from the comparison payroll to the current payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallData {
    /// Bars in display order.
    pub bars: Vec<WaterfallBar>,
}
