//! Demographic alerts and age-pyramid inversion risk.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::safe_mul;
use crate::config::{DemographicThresholds, PyramidThresholds};
use crate::models::{
    AnalysisReport, DemographicsMetrics, Finding, PyramidRisk, PyramidRiskLevel, Severity,
};

/// Returns the demographic alerts and insights for a snapshot.
///
/// | Code                        | Kind    | Fires when                                   |
/// |-----------------------------|---------|----------------------------------------------|
/// | `AGING_WORKFORCE`           | alert   | mean age > `aging_mean_age`                  |
/// | `SUCCESSION_PLANNING`       | alert   | 55+ bucket > `succession_over_55_percent`    |
/// | `HIGH_TURNOVER_INTEGRATION` | alert   | <1 year bucket > `recent_hires_percent`      |
/// | `DIVERSITY_GAP`             | alert   | gender gap > `diversity_gap_points`          |
/// | `GENDER_BALANCE`            | insight | gender gap < `balanced_gap_points`           |
///
/// The gender rules only apply when at least one employee has a recognized
/// gender. A snapshot without active headcount yields an empty report.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::analysis::analyze_demographics;
/// use hr_metrics_engine::config::DemographicThresholds;
/// use hr_metrics_engine::models::DemographicsMetrics;
/// use rust_decimal::Decimal;
///
/// let metrics = DemographicsMetrics {
///     active_headcount: 40,
///     mean_age: Decimal::new(5240, 2),
///     ..DemographicsMetrics::default()
/// };
///
/// let report = analyze_demographics(&metrics, &DemographicThresholds::default());
/// assert!(report.has_alert("AGING_WORKFORCE"));
/// ```
pub fn analyze_demographics(
    metrics: &DemographicsMetrics,
    thresholds: &DemographicThresholds,
) -> AnalysisReport {
    let mut report = AnalysisReport::default();
    if metrics.active_headcount == 0 {
        return report;
    }

    if metrics.mean_age > thresholds.aging_mean_age {
        report.alerts.push(Finding::new(
            "AGING_WORKFORCE",
            format!(
                "Mean age of {} years exceeds {}: the workforce is aging",
                metrics.mean_age, thresholds.aging_mean_age
            ),
            Severity::Warning,
        ));
    }

    let over_55 = metrics.age_distribution.over_55;
    if over_55 > thresholds.succession_over_55_percent {
        report.alerts.push(Finding::new(
            "SUCCESSION_PLANNING",
            format!("{}% of employees are over 55: plan successions and knowledge transfer", over_55),
            Severity::Warning,
        ));
    }

    let recent = metrics.seniority_distribution.under_1_year;
    if recent > thresholds.recent_hires_percent {
        report.alerts.push(Finding::new(
            "HIGH_TURNOVER_INTEGRATION",
            format!(
                "{}% of employees joined less than a year ago: high turnover or heavy onboarding load",
                recent
            ),
            Severity::Warning,
        ));
    }

    if metrics.male_count + metrics.female_count > 0 {
        let gap = metrics.gender_gap();
        if gap > thresholds.diversity_gap_points {
            report.alerts.push(Finding::new(
                "DIVERSITY_GAP",
                format!(
                    "Gender gap of {} points ({}% male, {}% female)",
                    gap, metrics.male_percent, metrics.female_percent
                ),
                Severity::Warning,
            ));
        } else if gap < thresholds.balanced_gap_points {
            report.insights.push(Finding::new(
                "GENDER_BALANCE",
                format!(
                    "Balanced gender mix ({}% male, {}% female)",
                    metrics.male_percent, metrics.female_percent
                ),
                Severity::Info,
            ));
        }
    }

    debug!(
        alerts = report.alerts.len(),
        insights = report.insights.len(),
        "Demographic analysis completed"
    );

    report
}

/// Classifies the risk of an inverted age pyramid.
///
/// The young share is the `<25` plus `25-35` buckets, the senior share the
/// `45-55` plus `55+` buckets. The risk is high when
/// `senior > young * high_multiplier`, medium when
/// `senior > young * medium_multiplier`, none otherwise.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::analysis::classify_pyramid_risk;
/// use hr_metrics_engine::config::PyramidThresholds;
/// use hr_metrics_engine::models::{AgeDistribution, DemographicsMetrics, PyramidRiskLevel};
/// use rust_decimal::Decimal;
///
/// let metrics = DemographicsMetrics {
///     active_headcount: 10,
///     age_distribution: AgeDistribution {
///         under_25: Decimal::from(10),
///         from_25_to_35: Decimal::from(10),
///         from_35_to_45: Decimal::from(30),
///         from_45_to_55: Decimal::from(25),
///         over_55: Decimal::from(25),
///     },
///     ..DemographicsMetrics::default()
/// };
///
/// let risk = classify_pyramid_risk(&metrics, &PyramidThresholds::default());
/// assert_eq!(risk.level, PyramidRiskLevel::High);
/// ```
pub fn classify_pyramid_risk(
    metrics: &DemographicsMetrics,
    thresholds: &PyramidThresholds,
) -> PyramidRisk {
    let ages = &metrics.age_distribution;
    let young = ages.under_25 + ages.from_25_to_35;
    let senior = ages.from_45_to_55 + ages.over_55;

    let (level, reasoning) = if senior > safe_mul(young, thresholds.high_multiplier) {
        (
            PyramidRiskLevel::High,
            format!(
                "Senior share {}% is more than {} times the young share {}%",
                senior, thresholds.high_multiplier, young
            ),
        )
    } else if senior > safe_mul(young, thresholds.medium_multiplier) {
        (
            PyramidRiskLevel::Medium,
            format!(
                "Senior share {}% is more than {} times the young share {}%",
                senior, thresholds.medium_multiplier, young
            ),
        )
    } else {
        (
            PyramidRiskLevel::None,
            format!(
                "Senior share {}% is in proportion with the young share {}%",
                senior, young
            ),
        )
    };

    PyramidRisk {
        level,
        young_percent: young,
        senior_percent: senior,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeDistribution, SeniorityDistribution};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_metrics() -> DemographicsMetrics {
        DemographicsMetrics {
            active_headcount: 20,
            mean_age: dec("40"),
            male_count: 10,
            female_count: 10,
            male_percent: dec("50"),
            female_percent: dec("50"),
            equality_index: Some(dec("100")),
            ..DemographicsMetrics::default()
        }
    }

    fn ages(young: (&str, &str), middle: &str, senior: (&str, &str)) -> AgeDistribution {
        AgeDistribution {
            under_25: dec(young.0),
            from_25_to_35: dec(young.1),
            from_35_to_45: dec(middle),
            from_45_to_55: dec(senior.0),
            over_55: dec(senior.1),
        }
    }

    /// ANA-001: balanced roster only produces the gender insight
    #[test]
    fn test_ana_001_balanced_roster() {
        let report = analyze_demographics(&base_metrics(), &DemographicThresholds::default());
        assert!(report.alerts.is_empty());
        assert!(report.has_insight("GENDER_BALANCE"));
    }

    /// ANA-002: mean age above threshold
    #[test]
    fn test_ana_002_aging_workforce() {
        let metrics = DemographicsMetrics {
            mean_age: dec("50.01"),
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(report.has_alert("AGING_WORKFORCE"));

        let metrics = DemographicsMetrics {
            mean_age: dec("50"),
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(!report.has_alert("AGING_WORKFORCE"));
    }

    /// ANA-003: large 55+ bucket
    #[test]
    fn test_ana_003_succession_planning() {
        let metrics = DemographicsMetrics {
            age_distribution: ages(("10", "10"), "20", ("25", "35")),
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(report.has_alert("SUCCESSION_PLANNING"));
    }

    /// ANA-004: many recent hires
    #[test]
    fn test_ana_004_high_turnover_integration() {
        let metrics = DemographicsMetrics {
            seniority_distribution: SeniorityDistribution {
                under_1_year: dec("45"),
                from_1_to_3_years: dec("55"),
                ..SeniorityDistribution::default()
            },
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(report.has_alert("HIGH_TURNOVER_INTEGRATION"));
    }

    /// ANA-005: gender gap above the diversity threshold
    #[test]
    fn test_ana_005_diversity_gap() {
        let metrics = DemographicsMetrics {
            male_count: 14,
            female_count: 6,
            male_percent: dec("70"),
            female_percent: dec("30"),
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(report.has_alert("DIVERSITY_GAP"));
        assert!(!report.has_insight("GENDER_BALANCE"));
    }

    /// ANA-006: a gap between both thresholds is silent
    #[test]
    fn test_ana_006_moderate_gap_is_silent() {
        let metrics = DemographicsMetrics {
            male_count: 12,
            female_count: 8,
            male_percent: dec("60"),
            female_percent: dec("40"),
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(report.alerts.is_empty());
        assert!(report.insights.is_empty());
    }

    #[test]
    fn test_unrecognized_genders_skip_gender_rules() {
        let metrics = DemographicsMetrics {
            male_count: 0,
            female_count: 0,
            male_percent: Decimal::ZERO,
            female_percent: Decimal::ZERO,
            equality_index: None,
            ..base_metrics()
        };
        let report = analyze_demographics(&metrics, &DemographicThresholds::default());
        assert!(report.insights.is_empty());
    }

    #[test]
    fn test_empty_headcount_gives_empty_report() {
        let report =
            analyze_demographics(&DemographicsMetrics::default(), &DemographicThresholds::default());
        assert_eq!(report, AnalysisReport::default());
    }

    #[test]
    fn test_custom_thresholds_apply() {
        let thresholds = DemographicThresholds {
            aging_mean_age: dec("35"),
            ..DemographicThresholds::default()
        };
        let report = analyze_demographics(&base_metrics(), &thresholds);
        assert!(report.has_alert("AGING_WORKFORCE"));
    }

    /// PYR-001: senior share more than twice the young share
    #[test]
    fn test_pyr_001_high_risk() {
        let metrics = DemographicsMetrics {
            age_distribution: ages(("5", "15"), "30", ("25", "25")),
            ..base_metrics()
        };
        let risk = classify_pyramid_risk(&metrics, &PyramidThresholds::default());
        assert_eq!(risk.level, PyramidRiskLevel::High);
        assert_eq!(risk.young_percent, dec("20"));
        assert_eq!(risk.senior_percent, dec("50"));
    }

    /// PYR-002: between the two multipliers
    #[test]
    fn test_pyr_002_medium_risk() {
        let metrics = DemographicsMetrics {
            age_distribution: ages(("10", "15"), "35", ("20", "20")),
            ..base_metrics()
        };
        let risk = classify_pyramid_risk(&metrics, &PyramidThresholds::default());
        assert_eq!(risk.level, PyramidRiskLevel::Medium);
    }

    /// PYR-003: exactly at a multiplier is not above it
    #[test]
    fn test_pyr_003_boundaries_are_strict() {
        let metrics = DemographicsMetrics {
            age_distribution: ages(("10", "10"), "20", ("20", "20")),
            ..base_metrics()
        };
        let risk = classify_pyramid_risk(&metrics, &PyramidThresholds::default());
        assert_eq!(risk.level, PyramidRiskLevel::Medium);

        let metrics = DemographicsMetrics {
            age_distribution: ages(("10", "10"), "50", ("15", "15")),
            ..base_metrics()
        };
        let risk = classify_pyramid_risk(&metrics, &PyramidThresholds::default());
        assert_eq!(risk.level, PyramidRiskLevel::None);
    }

    #[test]
    fn test_pyramid_without_headcount_is_none() {
        let risk =
            classify_pyramid_risk(&DemographicsMetrics::default(), &PyramidThresholds::default());
        assert_eq!(risk.level, PyramidRiskLevel::None);
    }
}
