//! Payroll aggregation for one establishment and period.
//!
//! This module turns a period's compensation line items into a
//! [`PayrollMetrics`] snapshot: totals, per-employee averages, per-FTE costs
//! and the two headline ratios.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{CompensationRecord, ComponentTotals, EmployeeRecord, PayrollMetrics};

use super::numeric::{
    mean, median, percentage, round_currency, round_percent, safe_add, safe_div, safe_mul,
};

/// Share of the employee-side contributions added to gross payroll to obtain
/// the loaded payroll. This is a fixed business convention, not a computed split.
pub const LOADED_CONTRIBUTION_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

#[derive(Debug, Default)]
struct EmployeeTotals {
    base_salary: Decimal,
    gross: Decimal,
}

impl ComponentTotals {
    fn accumulate(&mut self, record: &CompensationRecord) {
        self.base_salary = safe_add(self.base_salary, record.base_salary);
        self.fixed_bonus = safe_add(self.fixed_bonus, record.fixed_bonus);
        self.variable_bonus = safe_add(self.variable_bonus, record.variable_bonus);
        self.exceptional_bonus = safe_add(self.exceptional_bonus, record.exceptional_bonus);
        self.overtime = safe_add(self.overtime, record.overtime);
        self.benefits_in_kind = safe_add(self.benefits_in_kind, record.benefits_in_kind);
        self.allowances = safe_add(self.allowances, record.allowances);
        self.employee_contributions =
            safe_add(self.employee_contributions, record.employee_contributions);
        self.payroll_taxes = safe_add(self.payroll_taxes, record.payroll_taxes);
        self.other_employer_charges =
            safe_add(self.other_employer_charges, record.other_employer_charges);
    }

    /// Sum of the direct compensation components.
    pub fn gross(&self) -> Decimal {
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

    /// Contributions, payroll taxes and other employer charges.
    pub fn charges(&self) -> Decimal {
        safe_add(
            safe_add(self.employee_contributions, self.payroll_taxes),
            self.other_employer_charges,
        )
    }

    fn rounded(&self) -> Self {
        Self {
            base_salary: round_currency(self.base_salary),
            fixed_bonus: round_currency(self.fixed_bonus),
            variable_bonus: round_currency(self.variable_bonus),
            exceptional_bonus: round_currency(self.exceptional_bonus),
            overtime: round_currency(self.overtime),
            benefits_in_kind: round_currency(self.benefits_in_kind),
            allowances: round_currency(self.allowances),
            employee_contributions: round_currency(self.employee_contributions),
            payroll_taxes: round_currency(self.payroll_taxes),
            other_employer_charges: round_currency(self.other_employer_charges),
        }
    }
}

/// Aggregates one period's compensation records into payroll metrics.
///
/// `employees` is only used to look up each employee's FTE fraction; an
/// employee missing from the roster, or without an FTE, counts as 1.0.
///
/// Records with a negative amount are excluded and counted in
/// `excluded_record_count`. Several records for the same employee are summed
/// into one. An empty (or entirely excluded) input yields an all-zero result.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::calculate_payroll;
/// use hr_metrics_engine::models::CompensationRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let records = vec![
///     CompensationRecord {
///         base_salary: Decimal::from(3000),
///         ..CompensationRecord::empty("emp_001", period)
///     },
///     CompensationRecord {
///         base_salary: Decimal::from(4000),
///         ..CompensationRecord::empty("emp_002", period)
///     },
/// ];
///
/// let metrics = calculate_payroll(&records, &[]);
/// assert_eq!(metrics.gross_payroll, Decimal::from(7000));
/// assert_eq!(metrics.mean_cost_per_fte, Decimal::from(3500));
/// ```
pub fn calculate_payroll(
    compensation: &[CompensationRecord],
    employees: &[EmployeeRecord],
) -> PayrollMetrics {
    if compensation.is_empty() {
        debug!("No compensation records, returning empty payroll metrics");
        return PayrollMetrics::default();
    }

    let fte_by_id: HashMap<&str, Decimal> = employees
        .iter()
        .map(|e| (e.id.as_str(), e.fte_or_default()))
        .collect();

    let mut components = ComponentTotals::default();
    let mut per_employee: BTreeMap<&str, EmployeeTotals> = BTreeMap::new();
    let mut excluded: u32 = 0;

    for record in compensation {
        if record.has_negative_amount() {
            warn!(
                employee_id = %record.employee_id,
                period = %record.period,
                "Compensation record has a negative amount, excluding it"
            );
            excluded += 1;
            continue;
        }
        components.accumulate(record);
        let entry = per_employee.entry(record.employee_id.as_str()).or_default();
        entry.base_salary = safe_add(entry.base_salary, record.base_salary);
        entry.gross = safe_add(entry.gross, record.gross_components());
    }

    if per_employee.is_empty() {
        warn!(
            excluded_records = excluded,
            "Every compensation record was excluded, returning empty payroll metrics"
        );
        return PayrollMetrics {
            excluded_record_count: excluded,
            ..PayrollMetrics::default()
        };
    }

    let mut total_fte = Decimal::ZERO;
    let mut base_salaries = Vec::with_capacity(per_employee.len());
    let mut costs_per_fte = Vec::with_capacity(per_employee.len());

    for (employee_id, totals) in &per_employee {
        let fte = fte_by_id.get(employee_id).copied().unwrap_or(Decimal::ONE);
        if fte.is_sign_negative() && !fte.is_zero() {
            warn!(employee_id = %employee_id, fte = %fte, "Negative FTE, counting it as zero");
        } else {
            total_fte = safe_add(total_fte, fte);
        }
        base_salaries.push(totals.base_salary);
        if fte > Decimal::ZERO {
            costs_per_fte.push(safe_div(totals.gross, fte));
        }
    }

    let gross = components.gross();
    let contributions = components.employee_contributions;
    let loaded = safe_add(gross, safe_mul(contributions, LOADED_CONTRIBUTION_SHARE));
    let employer_cost = safe_add(gross, components.charges());
    let variable_pay = safe_add(components.variable_bonus, components.exceptional_bonus);

    let metrics = PayrollMetrics {
        record_count: per_employee.len() as u32,
        excluded_record_count: excluded,
        total_fte: round_currency(total_fte),
        gross_payroll: round_currency(gross),
        loaded_payroll: round_currency(loaded),
        total_employer_cost: round_currency(employer_cost),
        mean_base_salary: round_currency(mean(&base_salaries)),
        median_base_salary: round_currency(median(&base_salaries)),
        mean_cost_per_fte: round_currency(safe_div(gross, total_fte)),
        median_cost_per_fte: round_currency(median(&costs_per_fte)),
        components: components.rounded(),
        variable_pay_share: round_percent(percentage(variable_pay, components.base_salary)),
        charges_rate: round_percent(percentage(components.charges(), gross)),
    };

    debug!(
        record_count = metrics.record_count,
        excluded_records = excluded,
        gross_payroll = %metrics.gross_payroll,
        total_fte = %metrics.total_fte,
        "Payroll metrics computed"
    );

    metrics
}
