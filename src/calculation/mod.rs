//! Calculation logic for the HR metrics engine.
//!
//! This module contains the pure calculators: payroll aggregation per
//! snapshot, demographic aggregation, Price/Volume decomposition between two
//! snapshots, exceptional bonus detection, commentary generation and waterfall
//! chart data. None of them perform I/O; they are called once per snapshot
//! and can run in parallel across establishments.

mod commentary;
mod demographics;
mod effects;
mod numeric;
mod payroll;
mod waterfall;

pub use commentary::generate_commentary;
pub use demographics::{MAX_PLAUSIBLE_AGE, age_in_years, calculate_demographics, seniority_in_months};
pub use effects::{COHERENCE_TOLERANCE_PERCENT, calculate_effects, detect_bonus_distortion};
pub use numeric::{
    CURRENCY_DP, PERCENT_DP, mean, median, percentage, round_currency, round_percent, safe_add,
    safe_div, safe_mul,
};
pub use payroll::{LOADED_CONTRIBUTION_SHARE, calculate_payroll};
pub use waterfall::build_waterfall;
