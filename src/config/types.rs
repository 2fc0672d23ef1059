//! Configuration types for the advisory thresholds.
//!
//! These structures are deserialized from `config/thresholds.yaml`. Every
//! section has defaults, so a partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds for the demographic alerts and insights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicThresholds {
    /// Mean age above which the aging-workforce alert fires.
    pub aging_mean_age: Decimal,
    /// Share of 55+ above which the succession-planning alert fires.
    pub succession_over_55_percent: Decimal,
    /// Share of under-1-year seniority above which the integration alert fires.
    pub recent_hires_percent: Decimal,
    /// Gender gap (points) above which the diversity alert fires.
    pub diversity_gap_points: Decimal,
    /// Gender gap (points) below which the balanced-gender insight is emitted.
    pub balanced_gap_points: Decimal,
}

impl Default for DemographicThresholds {
    fn default() -> Self {
        Self {
            aging_mean_age: Decimal::from(50),
            succession_over_55_percent: Decimal::from(30),
            recent_hires_percent: Decimal::from(40),
            diversity_gap_points: Decimal::from(30),
            balanced_gap_points: Decimal::from(10),
        }
    }
}

/// Multipliers for the age-pyramid inversion classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidThresholds {
    /// Senior share above `young * medium_multiplier` is a medium risk.
    pub medium_multiplier: Decimal,
    /// Senior share above `young * high_multiplier` is a high risk.
    pub high_multiplier: Decimal,
}

impl Default for PyramidThresholds {
    fn default() -> Self {
        Self {
            medium_multiplier: Decimal::new(15, 1),
            high_multiplier: Decimal::TWO,
        }
    }
}

/// Thresholds for the waterfall commentary and bonus distortion check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsThresholds {
    /// One effect dominates when it exceeds the other by this factor.
    pub dominance_ratio: Decimal,
    /// Variation (percent) above which the variation is called significant.
    pub significant_variation_percent: Decimal,
    /// Effects within this relative distance (percent) are called balanced.
    pub balanced_effects_percent: Decimal,
    /// Exceptional bonus share of gross (percent) that signals a distortion.
    pub exceptional_bonus_share_percent: Decimal,
}

impl Default for EffectsThresholds {
    fn default() -> Self {
        Self {
            dominance_ratio: Decimal::from(3),
            significant_variation_percent: Decimal::from(50),
            balanced_effects_percent: Decimal::from(30),
            exceptional_bonus_share_percent: Decimal::from(30),
        }
    }
}

/// Thresholds for turnover and absenteeism findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkforceThresholds {
    /// Turnover rate (percent) above which an alert fires.
    pub turnover_alert_percent: Decimal,
    /// Absenteeism rate (percent) above which an alert fires.
    pub absenteeism_alert_percent: Decimal,
    /// Absenteeism rate (percent) below which a positive insight is emitted.
    pub absenteeism_healthy_percent: Decimal,
}

impl Default for WorkforceThresholds {
    fn default() -> Self {
        Self {
            turnover_alert_percent: Decimal::from(15),
            absenteeism_alert_percent: Decimal::from(5),
            absenteeism_healthy_percent: Decimal::from(3),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Demographic alert thresholds.
    pub demographics: DemographicThresholds,
    /// Age-pyramid multipliers.
    pub pyramid: PyramidThresholds,
    /// Effects commentary thresholds.
    pub effects: EffectsThresholds,
    /// Workforce indicator thresholds.
    pub workforce: WorkforceThresholds,
}
