//! Compensation line items.
//!
//! A [`CompensationRecord`] holds everything paid to, or charged for, one
//! employee in one period. All amounts are non-negative; a negative amount is a
//! data-quality error and the record is excluded from aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::safe_add;

/// One employee's compensation for one period.
///
/// # Example
///
/// ```
/// use hr_metrics_engine::models::CompensationRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord {
///     base_salary: Decimal::from(3000),
///     variable_bonus: Decimal::from(200),
///     ..CompensationRecord::empty("emp_001", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
/// };
/// assert_eq!(record.gross_components(), Decimal::from(3200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRecord {
    /// Identifier of the employee this record belongs to.
    pub employee_id: String,
    /// First day of the reporting period.
    pub period: NaiveDate,
    /// Base salary.
    pub base_salary: Decimal,
    /// Fixed bonus.
    #[serde(default)]
    pub fixed_bonus: Decimal,
    /// Variable (performance) bonus.
    #[serde(default)]
    pub variable_bonus: Decimal,
    /// Exceptional bonus, such as an annual 13th-month payment.
    #[serde(default)]
    pub exceptional_bonus: Decimal,
    /// Paid overtime.
    #[serde(default)]
    pub overtime: Decimal,
    /// Benefits in kind.
    #[serde(default)]
    pub benefits_in_kind: Decimal,
    /// Allowances.
    #[serde(default)]
    pub allowances: Decimal,
    /// Employee-side social contributions.
    #[serde(default)]
    pub employee_contributions: Decimal,
    /// Payroll taxes.
    #[serde(default)]
    pub payroll_taxes: Decimal,
    /// Other employer charges.
    #[serde(default)]
    pub other_employer_charges: Decimal,
}

impl CompensationRecord {
    /// Creates a record with every amount set to zero.
    pub fn empty(employee_id: impl Into<String>, period: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            period,
            base_salary: Decimal::ZERO,
            fixed_bonus: Decimal::ZERO,
            variable_bonus: Decimal::ZERO,
            exceptional_bonus: Decimal::ZERO,
            overtime: Decimal::ZERO,
            benefits_in_kind: Decimal::ZERO,
            allowances: Decimal::ZERO,
            employee_contributions: Decimal::ZERO,
            payroll_taxes: Decimal::ZERO,
            other_employer_charges: Decimal::ZERO,
        }
    }

    fn amounts(&self) -> [Decimal; 10] {
        [
            self.base_salary,
            self.fixed_bonus,
            self.variable_bonus,
            self.exceptional_bonus,
            self.overtime,
            self.benefits_in_kind,
            self.allowances,
            self.employee_contributions,
            self.payroll_taxes,
            self.other_employer_charges,
        ]
    }

    /// Returns true if any monetary field is negative.
    pub fn has_negative_amount(&self) -> bool {
        self.amounts().iter().any(|amount| amount.is_sign_negative() && !amount.is_zero())
    }

    /// Sum of the direct compensation components (gross pay).
    pub fn gross_components(&self) -> Decimal {
        [
            self.fixed_bonus,
            self.variable_bonus,
            self.exceptional_bonus,
            self.overtime,
            self.benefits_in_kind,
            self.allowances,
        ]
        .into_iter()
        .fold(self.base_salary, safe_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "employee_id": "emp_001",
            "period": "2025-03-01",
            "base_salary": "3000.00",
            "variable_bonus": "150.50"
        }"#;

        let record: CompensationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_salary, dec("3000.00"));
        assert_eq!(record.variable_bonus, dec("150.50"));
        assert_eq!(record.fixed_bonus, Decimal::ZERO);
        assert_eq!(record.payroll_taxes, Decimal::ZERO);
    }

    #[test]
    fn test_gross_components_excludes_charges() {
        let record = CompensationRecord {
            base_salary: dec("3000"),
            fixed_bonus: dec("100"),
            variable_bonus: dec("200"),
            exceptional_bonus: dec("300"),
            overtime: dec("50"),
            benefits_in_kind: dec("25"),
            allowances: dec("25"),
            employee_contributions: dec("700"),
            payroll_taxes: dec("90"),
            other_employer_charges: dec("10"),
            ..CompensationRecord::empty("emp_001", period())
        };

        assert_eq!(record.gross_components(), dec("3700"));
    }

    #[test]
    fn test_negative_amount_detected() {
        let mut record = CompensationRecord::empty("emp_001", period());
        assert!(!record.has_negative_amount());

        record.overtime = dec("-10");
        assert!(record.has_negative_amount());
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let mut record = CompensationRecord::empty("emp_001", period());
        record.base_salary = dec("-0.00");
        assert!(!record.has_negative_amount());
    }
}
