//! Turnover and absenteeism alerts.

use tracing::debug;

use crate::config::WorkforceThresholds;
use crate::models::{AnalysisReport, Finding, Severity, WorkforceIndicators};

/// Returns the turnover and absenteeism alerts for one period.
///
/// Turnover is departures over average headcount; absenteeism is absence
/// days over scheduled days. The low-absenteeism insight needs a non-zero
/// schedule so that a missing schedule is not reported as good attendance.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::analysis::analyze_workforce;
/// use hr_metrics_engine::config::WorkforceThresholds;
/// use hr_metrics_engine::models::WorkforceIndicators;
///
/// let indicators = WorkforceIndicators {
///     headcount_start: 100,
///     headcount_end: 100,
///     departures: 20,
///     ..WorkforceIndicators::default()
/// };
///
/// let report = analyze_workforce(&indicators, &WorkforceThresholds::default());
/// assert!(report.has_alert("HIGH_TURNOVER"));
/// ```
pub fn analyze_workforce(
    indicators: &WorkforceIndicators,
    thresholds: &WorkforceThresholds,
) -> AnalysisReport {
    let mut report = AnalysisReport::default();

    let turnover = indicators.turnover_rate();
    if turnover > thresholds.turnover_alert_percent {
        report.alerts.push(Finding::new(
            "HIGH_TURNOVER",
            format!(
                "Turnover rate of {}% exceeds {}%",
                turnover, thresholds.turnover_alert_percent
            ),
            Severity::Warning,
        ));
    }

    if !indicators.scheduled_days.is_zero() {
        let absenteeism = indicators.absenteeism_rate();
        if absenteeism > thresholds.absenteeism_alert_percent {
            report.alerts.push(Finding::new(
                "HIGH_ABSENTEEISM",
                format!(
                    "Absenteeism rate of {}% exceeds {}%",
                    absenteeism, thresholds.absenteeism_alert_percent
                ),
                Severity::Warning,
            ));
        } else if absenteeism < thresholds.absenteeism_healthy_percent {
            report.insights.push(Finding::new(
                "LOW_ABSENTEEISM",
                format!("Absenteeism rate of {}% is healthy", absenteeism),
                Severity::Info,
            ));
        }
    }

    debug!(
        turnover = %turnover,
        alerts = report.alerts.len(),
        insights = report.insights.len(),
        "Workforce analysis completed"
    );

    report
}
