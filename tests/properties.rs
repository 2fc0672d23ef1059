//! Property tests for the calculators.

use chrono::{Days, NaiveDate};
use hr_metrics_engine::calculation::{
    calculate_demographics, calculate_effects, calculate_payroll, median,
};
use hr_metrics_engine::models::{
    CompensationRecord, EffectsStatus, EmployeeRecord, EmploymentStatus, PayrollMetrics,
};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

fn period_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn snapshot(gross_cents: i64, fte_hundredths: i64) -> PayrollMetrics {
    PayrollMetrics {
        record_count: 1,
        gross_payroll: Decimal::new(gross_cents, 2),
        total_fte: Decimal::new(fte_hundredths, 2),
        ..PayrollMetrics::default()
    }
}

fn roster_member(index: usize, age_days: u64, seniority_days: u64, gender: &str) -> EmployeeRecord {
    let period = period_date();
    EmployeeRecord {
        id: format!("emp_{index:04}"),
        status: EmploymentStatus::Active,
        birth_date: period.checked_sub_days(Days::new(age_days)),
        hire_date: period.checked_sub_days(Days::new(seniority_days)),
        gender: Some(gender.to_string()),
        contract_type: "permanent".to_string(),
        fte: None,
    }
}

fn roster() -> impl Strategy<Value = Vec<EmployeeRecord>> {
    prop::collection::vec(
        (
            18 * 365_u64..75 * 365,
            0_u64..40 * 365,
            prop::sample::select(vec!["M", "F", "male", "femme", "X", ""]),
        ),
        1..60,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (age, seniority, gender))| roster_member(i, age, seniority, gender))
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn effects_reconcile_with_real_variation(
        current_gross in 0_i64..1_000_000_000,
        comparison_gross in 0_i64..1_000_000_000,
        current_fte in 1_i64..100_000,
        comparison_fte in 1_i64..100_000
    ) {
        let current = snapshot(current_gross, current_fte);
        let comparison = snapshot(comparison_gross, comparison_fte);

        let effects = calculate_effects(&current, Some(&comparison));

        prop_assert_eq!(effects.status, EffectsStatus::Computed);
        prop_assert!(effects.coherence.coherence_ok);
        let drift = (effects.explained_variation() - effects.real_variation).abs();
        prop_assert!(drift <= Decimal::new(1, 2), "drift {}", drift);
    }

    #[test]
    fn missing_comparison_is_always_neutral(
        gross in 0_i64..1_000_000_000,
        fte in 0_i64..100_000
    ) {
        let effects = calculate_effects(&snapshot(gross, fte), None);

        prop_assert_eq!(effects.status, EffectsStatus::NoComparison);
        prop_assert!(effects.price_effect.is_zero());
        prop_assert!(effects.volume_effect.is_zero());
        prop_assert!(effects.coherence.coherence_ok);
    }

    #[test]
    fn zero_fte_is_always_neutral(
        current_gross in 0_i64..1_000_000_000,
        comparison_gross in 0_i64..1_000_000_000,
        fte in 1_i64..100_000,
        zero_current in any::<bool>()
    ) {
        let (current, comparison) = if zero_current {
            (snapshot(current_gross, 0), snapshot(comparison_gross, fte))
        } else {
            (snapshot(current_gross, fte), snapshot(comparison_gross, 0))
        };

        let effects = calculate_effects(&current, Some(&comparison));

        prop_assert_eq!(effects.status, EffectsStatus::ZeroFte);
        prop_assert!(effects.real_variation.is_zero());
    }

    #[test]
    fn distributions_cover_the_whole_headcount(employees in roster()) {
        let metrics = calculate_demographics(&employees, period_date());

        let tolerance = Decimal::new(1, 1);
        let hundred = Decimal::ONE_HUNDRED;
        prop_assert_eq!(metrics.active_headcount as usize, employees.len());
        prop_assert!((metrics.age_distribution.total() - hundred).abs() <= tolerance);
        prop_assert!((metrics.seniority_distribution.total() - hundred).abs() <= tolerance);
    }

    #[test]
    fn equality_index_is_bounded_or_undefined(employees in roster()) {
        let metrics = calculate_demographics(&employees, period_date());

        match metrics.equality_index {
            Some(index) => {
                prop_assert!(metrics.male_count > 0 && metrics.female_count > 0);
                prop_assert!(index >= Decimal::ZERO && index <= Decimal::ONE_HUNDRED);
            }
            None => prop_assert!(metrics.male_count == 0 || metrics.female_count == 0),
        }
    }

    #[test]
    fn median_lies_within_the_range(values in prop::collection::vec(-1_000_000_i64..1_000_000, 1..50)) {
        let decimals: Vec<Decimal> = values.iter().map(|v| Decimal::new(*v, 2)).collect();
        let result = median(&decimals);

        let min = decimals.iter().min().copied().unwrap();
        let max = decimals.iter().max().copied().unwrap();
        prop_assert!(result >= min && result <= max);
        if decimals.len() % 2 == 1 {
            prop_assert!(decimals.contains(&result));
        }
    }

    #[test]
    fn payroll_is_idempotent(
        rows in prop::collection::vec((0_usize..10, 0_i64..1_000_000, 0_i64..100_000), 0..30)
    ) {
        let period = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let records: Vec<CompensationRecord> = rows
            .iter()
            .map(|(employee, base, bonus)| CompensationRecord {
                base_salary: Decimal::new(*base, 2),
                variable_bonus: Decimal::new(*bonus, 2),
                ..CompensationRecord::empty(format!("emp_{employee}"), period)
            })
            .collect();

        let first = calculate_payroll(&records, &[]);
        let second = calculate_payroll(&records, &[]);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn demographics_are_idempotent(employees in roster()) {
        let first = calculate_demographics(&employees, period_date());
        let second = calculate_demographics(&employees, period_date());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn effects_are_idempotent(
        current_gross in 0_i64..1_000_000_000,
        comparison_gross in 0_i64..1_000_000_000,
        current_fte in 0_i64..100_000,
        comparison_fte in 0_i64..100_000
    ) {
        let current = snapshot(current_gross, current_fte);
        let comparison = snapshot(comparison_gross, comparison_fte);

        let first = calculate_effects(&current, Some(&comparison));
        let second = calculate_effects(&current, Some(&comparison));

        prop_assert_eq!(first, second);
    }
}
