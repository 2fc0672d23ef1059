//! Payroll aggregate for one establishment and period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized totals of every compensation component across a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentTotals {
    /// Total base salary.
    pub base_salary: Decimal,
    /// Total fixed bonus.
    pub fixed_bonus: Decimal,
    /// Total variable bonus.
    pub variable_bonus: Decimal,
    /// Total exceptional bonus.
    pub exceptional_bonus: Decimal,
    /// Total paid overtime.
    pub overtime: Decimal,
    /// Total benefits in kind.
    pub benefits_in_kind: Decimal,
    /// Total allowances.
    pub allowances: Decimal,
    /// Total employee-side social contributions.
    pub employee_contributions: Decimal,
    /// Total payroll taxes.
    pub payroll_taxes: Decimal,
    /// Total other employer charges.
    pub other_employer_charges: Decimal,
}

/// Immutable payroll snapshot computed once per import.
///
/// An all-zero value (see [`PayrollMetrics::default`]) means "no payroll data
/// for this period"; callers distinguish it from a populated-but-zero period
/// through [`PayrollMetrics::record_count`].
///
/// # Example
///
/// ```
/// use hr_metrics_engine::models::PayrollMetrics;
///
/// let metrics = PayrollMetrics::default();
/// assert!(metrics.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollMetrics {
    /// Number of employees whose compensation was aggregated.
    pub record_count: u32,
    /// Number of compensation records excluded as bad data.
    pub excluded_record_count: u32,
    /// Sum of the FTE fractions of aggregated employees.
    pub total_fte: Decimal,
    /// Gross payroll: all direct compensation components.
    pub gross_payroll: Decimal,
    /// Gross payroll plus half of the employee-side contributions.
    pub loaded_payroll: Decimal,
    /// Gross payroll plus contributions, payroll taxes and other charges.
    pub total_employer_cost: Decimal,
    /// Mean base salary per employee.
    pub mean_base_salary: Decimal,
    /// Median base salary per employee.
    pub median_base_salary: Decimal,
    /// Gross payroll divided by total FTE.
    pub mean_cost_per_fte: Decimal,
    /// Median of the per-employee gross cost divided by that employee's FTE.
    pub median_cost_per_fte: Decimal,
    /// Itemized component totals.
    pub components: ComponentTotals,
    /// Variable and exceptional bonuses as a percentage of base salary.
    pub variable_pay_share: Decimal,
    /// Contributions, taxes and other charges as a percentage of gross payroll.
    pub charges_rate: Decimal,
}

impl PayrollMetrics {
    /// Returns true when no compensation record was aggregated.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
