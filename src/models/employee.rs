//! Employee roster records.
//!
//! One [`EmployeeRecord`] is produced per employee per reporting period by the
//! import pipeline. Records are immutable; a correction means re-importing the
//! whole period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment status as reported by the payroll export.
///
/// Parsing is case-insensitive; any status other than active or inactive
/// becomes [`EmploymentStatus::Other`] instead of rejecting the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EmploymentStatus {
    /// Currently employed and counted in the active headcount.
    Active,
    /// Left the organisation or suspended for the whole period.
    Inactive,
    /// Any other status the export may carry.
    Other,
}

impl From<String> for EmploymentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "active" => EmploymentStatus::Active,
            "inactive" => EmploymentStatus::Inactive,
            _ => EmploymentStatus::Other,
        }
    }
}

/// Normalized gender of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Normalizes a raw gender code.
    ///
    /// Matching is case-insensitive and accepts both one-letter and full-word
    /// codes. Unrecognized codes return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_metrics_engine::models::Gender;
    ///
    /// assert_eq!(Gender::from_code("M"), Some(Gender::Male));
    /// assert_eq!(Gender::from_code("Homme"), Some(Gender::Male));
    /// assert_eq!(Gender::from_code(" female "), Some(Gender::Female));
    /// assert_eq!(Gender::from_code("x"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "m" | "male" | "h" | "homme" => Some(Gender::Male),
            "f" | "female" | "femme" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// One row of the workforce roster for a single period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Identifier, unique within the period.
    pub id: String,
    /// Employment status for the period.
    pub status: EmploymentStatus,
    /// Date of birth, when known.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Hire date, when known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Raw gender code from the export (see [`Gender::from_code`]).
    #[serde(default)]
    pub gender: Option<String>,
    /// Contract type label (e.g. "permanent", "fixed_term").
    #[serde(default)]
    pub contract_type: String,
    /// Full-time-equivalent fraction; `None` means a full-time worker.
    #[serde(default)]
    pub fte: Option<Decimal>,
}

impl EmployeeRecord {
    /// Returns true if the employee counts in the active headcount.
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Returns the normalized gender, if the raw code is recognized.
    pub fn normalized_gender(&self) -> Option<Gender> {
        self.gender.as_deref().and_then(Gender::from_code)
    }

    /// Returns the FTE fraction, defaulting to 1.0 when missing.
    pub fn fte_or_default(&self) -> Decimal {
        self.fte.unwrap_or(Decimal::ONE)
    }
}
