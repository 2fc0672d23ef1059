//! Demographic aggregation over a roster snapshot.
//!
//! Only active employees are considered. Ages and seniority are measured
//! against the period date; values that cannot be right (negative seniority,
//! an age outside [0, 120)) are dropped from the statistics but the employee
//! still counts in the active headcount.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    AgeDistribution, DemographicsMetrics, EmployeeRecord, Gender, SeniorityDistribution,
};

use super::numeric::{mean, median, percentage, round_percent};

/// Ages at or above this bound are treated as bad data.
pub const MAX_PLAUSIBLE_AGE: i32 = 120;

/// Lower bounds (years) of the 25–35, 35–45, 45–55 and 55+ age buckets.
const AGE_BUCKET_BOUNDS: [i32; 4] = [25, 35, 45, 55];

/// Lower bounds (months) of the 1–3, 3–5, 5–10 and 10+ year seniority buckets.
const SENIORITY_BUCKET_BOUNDS: [i32; 4] = [12, 36, 60, 120];

/// Completed years between `birth_date` and `at`.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::age_in_years;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
/// assert_eq!(age_in_years(birth, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), 34);
/// assert_eq!(age_in_years(birth, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()), 35);
/// ```
pub fn age_in_years(birth_date: NaiveDate, at: NaiveDate) -> i32 {
    let mut age = at.year() - birth_date.year();
    if (at.month(), at.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Whole months of seniority: year difference times twelve plus month
/// difference. The day of month is ignored.
pub fn seniority_in_months(hire_date: NaiveDate, at: NaiveDate) -> i32 {
    (at.year() - hire_date.year()) * 12 + (at.month() as i32 - hire_date.month() as i32)
}

fn bucket_index(value: i32, bounds: &[i32; 4]) -> usize {
    bounds.iter().take_while(|bound| value >= **bound).count()
}

fn bucket_percentages(counts: [u32; 5], headcount: u32) -> [Decimal; 5] {
    let whole = Decimal::from(headcount);
    counts.map(|count| round_percent(percentage(Decimal::from(count), whole)))
}

/// Computes the demographic snapshot of a roster at `period_date`.
///
/// Returns [`DemographicsMetrics::default`] when no employee is active.
///
/// # Examples
///
/// ```
/// use hr_metrics_engine::calculation::calculate_demographics;
/// use hr_metrics_engine::models::{EmployeeRecord, EmploymentStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     id: "emp_001".to_string(),
///     status: EmploymentStatus::Active,
///     birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1),
///     gender: Some("F".to_string()),
///     contract_type: "permanent".to_string(),
///     fte: None,
/// };
///
/// let period = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let metrics = calculate_demographics(&[employee], period);
/// assert_eq!(metrics.active_headcount, 1);
/// assert_eq!(metrics.mean_seniority_months, Decimal::from(60));
/// // Only one gender present: the index is undefined.
/// assert!(metrics.equality_index.is_none());
/// ```
pub fn calculate_demographics(
    employees: &[EmployeeRecord],
    period_date: NaiveDate,
) -> DemographicsMetrics {
    let active: Vec<&EmployeeRecord> = employees.iter().filter(|e| e.is_active()).collect();
    if active.is_empty() {
        debug!(period = %period_date, "No active employees, returning empty demographics");
        return DemographicsMetrics::default();
    }
    let headcount = active.len() as u32;

    let mut ages = Vec::with_capacity(active.len());
    let mut age_counts = [0u32; 5];
    let mut seniorities = Vec::with_capacity(active.len());
    let mut seniority_counts = [0u32; 5];
    let mut male_count = 0u32;
    let mut female_count = 0u32;

    for employee in &active {
        if let Some(birth_date) = employee.birth_date {
            let age = age_in_years(birth_date, period_date);
            if (0..MAX_PLAUSIBLE_AGE).contains(&age) {
                ages.push(Decimal::from(age));
                age_counts[bucket_index(age, &AGE_BUCKET_BOUNDS)] += 1;
            } else {
                warn!(employee_id = %employee.id, age, "Implausible age, excluding it");
            }
        }

        if let Some(hire_date) = employee.hire_date {
            let months = seniority_in_months(hire_date, period_date);
            if months >= 0 {
                seniorities.push(Decimal::from(months));
                seniority_counts[bucket_index(months, &SENIORITY_BUCKET_BOUNDS)] += 1;
            } else {
                warn!(
                    employee_id = %employee.id,
                    months,
                    "Hire date after period date, excluding seniority"
                );
            }
        }

        match employee.normalized_gender() {
            Some(Gender::Male) => male_count += 1,
            Some(Gender::Female) => female_count += 1,
            None => {}
        }
    }

    let whole = Decimal::from(headcount);
    let male_share = percentage(Decimal::from(male_count), whole);
    let female_share = percentage(Decimal::from(female_count), whole);

    let equality_index = if male_count > 0 && female_count > 0 {
        let imbalance = (male_share - Decimal::from(50)).abs() * Decimal::TWO;
        let index = (Decimal::ONE_HUNDRED - imbalance).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        Some(round_percent(index))
    } else {
        None
    };

    let [under_25, from_25_to_35, from_35_to_45, from_45_to_55, over_55] =
        bucket_percentages(age_counts, headcount);
    let [under_1_year, from_1_to_3_years, from_3_to_5_years, from_5_to_10_years, over_10_years] =
        bucket_percentages(seniority_counts, headcount);

    let metrics = DemographicsMetrics {
        active_headcount: headcount,
        mean_age: round_percent(mean(&ages)),
        median_age: round_percent(median(&ages)),
        mean_seniority_months: round_percent(mean(&seniorities)),
        median_seniority_months: round_percent(median(&seniorities)),
        male_count,
        female_count,
        male_percent: round_percent(male_share),
        female_percent: round_percent(female_share),
        equality_index,
        age_distribution: AgeDistribution {
            under_25,
            from_25_to_35,
            from_35_to_45,
            from_45_to_55,
            over_55,
        },
        seniority_distribution: SeniorityDistribution {
            under_1_year,
            from_1_to_3_years,
            from_3_to_5_years,
            from_5_to_10_years,
            over_10_years,
        },
    };

    debug!(
        period = %period_date,
        active_headcount = headcount,
        aged = ages.len(),
        with_seniority = seniorities.len(),
        "Demographics computed"
    );

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period_date() -> NaiveDate {
        date(2025, 6, 30)
    }

    fn create_employee(id: &str, birth_year: Option<i32>, gender: Option<&str>) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            status: EmploymentStatus::Active,
            birth_date: birth_year.map(|y| date(y, 1, 15)),
            hire_date: None,
            gender: gender.map(str::to_string),
            contract_type: "permanent".to_string(),
            fte: None,
        }
    }

    fn with_hire_date(mut employee: EmployeeRecord, hire: NaiveDate) -> EmployeeRecord {
        employee.hire_date = Some(hire);
        employee
    }

    #[test]
    fn test_age_before_birthday_is_one_less() {
        let birth = date(1990, 12, 31);
        assert_eq!(age_in_years(birth, date(2025, 12, 30)), 34);
        assert_eq!(age_in_years(birth, date(2025, 12, 31)), 35);
    }

    #[test]
    fn test_seniority_ignores_day_of_month() {
        assert_eq!(seniority_in_months(date(2024, 1, 31), date(2025, 3, 1)), 14);
        assert_eq!(seniority_in_months(date(2025, 7, 1), date(2025, 6, 30)), -1);
    }

    /// DEM-001: no active employee
    #[test]
    fn test_dem_001_no_active_employees_returns_default() {
        let mut inactive = create_employee("emp_001", Some(1980), Some("M"));
        inactive.status = EmploymentStatus::Inactive;

        let metrics = calculate_demographics(&[inactive], period_date());
        assert_eq!(metrics, DemographicsMetrics::default());

        let metrics = calculate_demographics(&[], period_date());
        assert_eq!(metrics, DemographicsMetrics::default());
    }

    /// DEM-002: five employees, one per age bucket
    #[test]
    fn test_dem_002_one_employee_per_age_bucket() {
        // Birthdays on 15 January, already passed at 30 June 2025.
        let employees = vec![
            create_employee("emp_001", Some(2001), None), // 24
            create_employee("emp_002", Some(1995), None), // 30
            create_employee("emp_003", Some(1985), None), // 40
            create_employee("emp_004", Some(1975), None), // 50
            create_employee("emp_005", Some(1965), None), // 60
        ];

        let metrics = calculate_demographics(&employees, period_date());
        let ages = &metrics.age_distribution;

        assert_eq!(ages.under_25, dec("20"));
        assert_eq!(ages.from_25_to_35, dec("20"));
        assert_eq!(ages.from_35_to_45, dec("20"));
        assert_eq!(ages.from_45_to_55, dec("20"));
        assert_eq!(ages.over_55, dec("20"));
        assert_eq!(ages.total(), dec("100"));
        assert_eq!(metrics.mean_age, dec("40.8"));
        assert_eq!(metrics.median_age, dec("40"));
    }

    /// DEM-003: inactive employees are excluded from every figure
    #[test]
    fn test_dem_003_inactive_excluded_from_denominator() {
        let mut inactive = create_employee("emp_003", Some(1960), Some("F"));
        inactive.status = EmploymentStatus::Other;
        let employees = vec![
            create_employee("emp_001", Some(2001), Some("M")),
            create_employee("emp_002", Some(1995), Some("F")),
            inactive,
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.active_headcount, 2);
        assert_eq!(metrics.age_distribution.under_25, dec("50"));
        assert_eq!(metrics.age_distribution.over_55, Decimal::ZERO);
        assert_eq!(metrics.female_percent, dec("50"));
    }

    /// DEM-004: implausible ages are dropped but still count as headcount
    #[test]
    fn test_dem_004_implausible_age_excluded() {
        let employees = vec![
            create_employee("emp_001", Some(1985), None),
            create_employee("emp_002", Some(1850), None), // 175 years old
            create_employee("emp_003", Some(2030), None), // not born yet
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.active_headcount, 3);
        assert_eq!(metrics.mean_age, dec("40"));
        assert_eq!(metrics.median_age, dec("40"));
        assert_eq!(metrics.age_distribution.from_35_to_45, dec("33.33"));
        assert_eq!(metrics.age_distribution.total(), dec("33.33"));
    }

    /// DEM-005: seniority buckets and statistics
    #[test]
    fn test_dem_005_seniority_buckets() {
        let employees = vec![
            with_hire_date(create_employee("emp_001", None, None), date(2025, 1, 1)), // 5 months
            with_hire_date(create_employee("emp_002", None, None), date(2023, 6, 1)), // 24
            with_hire_date(create_employee("emp_003", None, None), date(2021, 6, 1)), // 48
            with_hire_date(create_employee("emp_004", None, None), date(2018, 6, 1)), // 84
            with_hire_date(create_employee("emp_005", None, None), date(2010, 6, 1)), // 180
        ];

        let metrics = calculate_demographics(&employees, period_date());
        let seniority = &metrics.seniority_distribution;

        assert_eq!(seniority.under_1_year, dec("20"));
        assert_eq!(seniority.from_1_to_3_years, dec("20"));
        assert_eq!(seniority.from_3_to_5_years, dec("20"));
        assert_eq!(seniority.from_5_to_10_years, dec("20"));
        assert_eq!(seniority.over_10_years, dec("20"));
        assert_eq!(metrics.median_seniority_months, dec("48"));
        // (5 + 24 + 48 + 84 + 180) / 5
        assert_eq!(metrics.mean_seniority_months, dec("68.2"));
    }

    /// DEM-006: hire date after period date is bad data
    #[test]
    fn test_dem_006_future_hire_date_excluded() {
        let employees = vec![
            with_hire_date(create_employee("emp_001", None, None), date(2024, 6, 1)),
            with_hire_date(create_employee("emp_002", None, None), date(2025, 9, 1)),
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.mean_seniority_months, dec("12"));
        assert_eq!(metrics.seniority_distribution.from_1_to_3_years, dec("50"));
        assert_eq!(metrics.seniority_distribution.total(), dec("50"));
    }

    #[test]
    fn test_bucket_edges_are_lower_inclusive() {
        assert_eq!(bucket_index(24, &AGE_BUCKET_BOUNDS), 0);
        assert_eq!(bucket_index(25, &AGE_BUCKET_BOUNDS), 1);
        assert_eq!(bucket_index(55, &AGE_BUCKET_BOUNDS), 4);
        assert_eq!(bucket_index(11, &SENIORITY_BUCKET_BOUNDS), 0);
        assert_eq!(bucket_index(12, &SENIORITY_BUCKET_BOUNDS), 1);
        assert_eq!(bucket_index(120, &SENIORITY_BUCKET_BOUNDS), 4);
    }

    /// DEM-007: all male workforce has no equality index
    #[test]
    fn test_dem_007_single_gender_has_undefined_index() {
        let employees = vec![
            create_employee("emp_001", Some(1980), Some("M")),
            create_employee("emp_002", Some(1981), Some("male")),
            create_employee("emp_003", Some(1982), Some("H")),
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.male_count, 3);
        assert_eq!(metrics.female_count, 0);
        assert_eq!(metrics.male_percent, dec("100"));
        assert!(metrics.equality_index.is_none());
    }

    /// DEM-008: perfect balance scores 100
    #[test]
    fn test_dem_008_balanced_workforce_scores_100() {
        let employees = vec![
            create_employee("emp_001", None, Some("M")),
            create_employee("emp_002", None, Some("F")),
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.equality_index, Some(dec("100")));
    }

    /// DEM-009: 3 men and 1 woman
    #[test]
    fn test_dem_009_imbalanced_workforce_index() {
        let employees = vec![
            create_employee("emp_001", None, Some("M")),
            create_employee("emp_002", None, Some("m")),
            create_employee("emp_003", None, Some("Male")),
            create_employee("emp_004", None, Some("femme")),
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.male_percent, dec("75"));
        assert_eq!(metrics.female_percent, dec("25"));
        // 100 - 2 * |75 - 50|
        assert_eq!(metrics.equality_index, Some(dec("50")));
    }

    /// DEM-010: unspecified genders stay in the denominator
    #[test]
    fn test_dem_010_unspecified_gender_in_denominator() {
        let employees = vec![
            create_employee("emp_001", None, Some("M")),
            create_employee("emp_002", None, Some("F")),
            create_employee("emp_003", None, Some("X")),
            create_employee("emp_004", None, None),
        ];

        let metrics = calculate_demographics(&employees, period_date());

        assert_eq!(metrics.male_percent, dec("25"));
        assert_eq!(metrics.female_percent, dec("25"));
        assert_eq!(metrics.male_percent + metrics.female_percent, dec("50"));
        // 100 - 2 * |25 - 50|
        assert_eq!(metrics.equality_index, Some(dec("50")));
    }
}
