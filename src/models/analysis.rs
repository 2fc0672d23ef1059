//! Advisory output types: alerts, insights and risk classifications.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{percentage, round_percent, safe_div};

/// Severity of an advisory finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
}

/// A single alert or insight.
///
/// # Example
///
/// ```
/// use hr_metrics_engine::models::{Finding, Severity};
///
/// let finding = Finding::new("AGING_WORKFORCE", "Mean age is 52", Severity::Warning);
/// assert_eq!(finding.code, "AGING_WORKFORCE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier of the rule that produced the finding.
    pub code: String,
    /// Human-readable text.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
}

impl Finding {
    /// Creates a finding.
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Alerts and insights produced by an advisory operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Conditions that deserve attention.
    pub alerts: Vec<Finding>,
    /// Positive or neutral observations.
    pub insights: Vec<Finding>,
}

impl AnalysisReport {
    /// Returns true when the report carries an alert with the given code.
    pub fn has_alert(&self, code: &str) -> bool {
        self.alerts.iter().any(|f| f.code == code)
    }

    /// Returns true when the report carries an insight with the given code.
    pub fn has_insight(&self, code: &str) -> bool {
        self.insights.iter().any(|f| f.code == code)
    }
}

/// Level of age-pyramid inversion risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PyramidRiskLevel {
    /// Senior share is not disproportionate.
    None,
    /// Senior share exceeds the medium multiplier of the young share.
    Medium,
    /// Senior share exceeds the high multiplier of the young share.
    High,
}

/// Age-pyramid inversion classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidRisk {
    /// Risk level.
    pub level: PyramidRiskLevel,
    /// Combined share of the under-25 and 25–35 buckets.
    pub young_percent: Decimal,
    /// Combined share of the 45–55 and 55+ buckets.
    pub senior_percent: Decimal,
    /// Explanation of the classification.
    pub reasoning: String,
}

/// Workforce movement and attendance counts for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceIndicators {
    /// Headcount at the start of the period.
    pub headcount_start: u32,
    /// Headcount at the end of the period.
    pub headcount_end: u32,
    /// Number of departures during the period.
    pub departures: u32,
    /// Days of absence across the workforce.
    pub absence_days: Decimal,
    /// Scheduled working days across the workforce.
    pub scheduled_days: Decimal,
}

impl WorkforceIndicators {
    /// Departures over average headcount, in percent (zero without headcount).
    pub fn turnover_rate(&self) -> Decimal {
        let average_headcount = safe_div(
            Decimal::from(self.headcount_start) + Decimal::from(self.headcount_end),
            Decimal::TWO,
        );
        round_percent(percentage(Decimal::from(self.departures), average_headcount))
    }

    /// Absence days over scheduled days, in percent (zero without schedule).
    pub fn absenteeism_rate(&self) -> Decimal {
        round_percent(percentage(self.absence_days, self.scheduled_days))
    }
}
