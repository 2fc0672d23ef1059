//! Core data models for the HR metrics engine.
//!
//! Input records delivered by the import pipeline, the metrics snapshots the
//! calculators produce, and the advisory types the analysis layer returns.

mod analysis;
mod compensation;
mod demographics_metrics;
mod employee;
mod payroll_effects;
mod payroll_metrics;
mod snapshot;

pub use analysis::{
    AnalysisReport, Finding, PyramidRisk, PyramidRiskLevel, Severity, WorkforceIndicators,
};
pub use compensation::CompensationRecord;
pub use demographics_metrics::{AgeDistribution, DemographicsMetrics, SeniorityDistribution};
pub use employee::{EmployeeRecord, EmploymentStatus, Gender};
pub use payroll_effects::{
    BonusDistortion, CoherenceCheck, EffectsStatus, PayrollEffects, SnapshotRole, WaterfallBar,
    WaterfallBarKind, WaterfallData,
};
pub use payroll_metrics::{ComponentTotals, PayrollMetrics};
pub use snapshot::{ComparisonKind, SnapshotKey, month_start};
