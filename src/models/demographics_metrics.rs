//! Demographic aggregate for one establishment and period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of active headcount per age range, in percent.
///
/// Ranges are lower-bound inclusive: 25 falls in `from_25_to_35`, 55 in
/// `over_55`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeDistribution {
    /// Under 25.
    pub under_25: Decimal,
    /// 25 to 35.
    pub from_25_to_35: Decimal,
    /// 35 to 45.
    pub from_35_to_45: Decimal,
    /// 45 to 55.
    pub from_45_to_55: Decimal,
    /// 55 and over.
    pub over_55: Decimal,
}

impl AgeDistribution {
    /// Sum of the five buckets.
    pub fn total(&self) -> Decimal {
        self.under_25 + self.from_25_to_35 + self.from_35_to_45 + self.from_45_to_55 + self.over_55
    }
}

/// Share of active headcount per seniority range, in percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeniorityDistribution {
    /// Less than one year.
    pub under_1_year: Decimal,
    /// One to three years.
    pub from_1_to_3_years: Decimal,
    /// Three to five years.
    pub from_3_to_5_years: Decimal,
    /// Five to ten years.
    pub from_5_to_10_years: Decimal,
    /// Ten years and more.
    pub over_10_years: Decimal,
}

impl SeniorityDistribution {
    /// Sum of the five buckets.
    pub fn total(&self) -> Decimal {
        self.under_1_year
            + self.from_1_to_3_years
            + self.from_3_to_5_years
            + self.from_5_to_10_years
            + self.over_10_years
    }
}

/// Immutable demographic snapshot computed once per import.
///
/// An all-zero value is returned when the period has no active employee; it is
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicsMetrics {
    /// Number of active employees (the denominator of every percentage).
    pub active_headcount: u32,
    /// Mean age in completed years.
    pub mean_age: Decimal,
    /// Median age in completed years.
    pub median_age: Decimal,
    /// Mean seniority in months.
    pub mean_seniority_months: Decimal,
    /// Median seniority in months.
    pub median_seniority_months: Decimal,
    /// Number of active employees recognized as male.
    pub male_count: u32,
    /// Number of active employees recognized as female.
    pub female_count: u32,
    /// Male share of active headcount.
    pub male_percent: Decimal,
    /// Female share of active headcount.
    pub female_percent: Decimal,
    /// Gender balance score in [0, 100]; `None` when either gender is absent.
    pub equality_index: Option<Decimal>,
    /// Age distribution.
    pub age_distribution: AgeDistribution,
    /// Seniority distribution.
    pub seniority_distribution: SeniorityDistribution,
}

impl DemographicsMetrics {
    /// Absolute gap between the male and female shares, in points.
    pub fn gender_gap(&self) -> Decimal {
        (self.male_percent - self.female_percent).abs()
    }
}
