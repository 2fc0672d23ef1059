//! Request types for the HR metrics API.
//!
//! This module defines the JSON request bodies of each endpoint. Records and
//! snapshots are deserialized straight into the domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    CompensationRecord, DemographicsMetrics, EmployeeRecord, PayrollMetrics, WorkforceIndicators,
};

/// Request body for `POST /payroll/metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollMetricsRequest {
    /// Compensation records of one establishment and period.
    pub compensation: Vec<CompensationRecord>,
    /// Roster used to look up each employee's FTE.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

/// Request body for `POST /demographics/metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicsMetricsRequest {
    /// Roster of one establishment and period.
    pub employees: Vec<EmployeeRecord>,
    /// Reference date for ages and seniority.
    pub period_date: NaiveDate,
}

/// Request body for `POST /demographics/analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicsAnalysisRequest {
    /// A previously computed demographic snapshot.
    pub metrics: DemographicsMetrics,
}

/// Request body for `POST /effects`.
///
/// `comparison` is absent for the first recorded period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsRequest {
    /// Snapshot of the period being analyzed.
    pub current: PayrollMetrics,
    /// Snapshot of the period it is compared against.
    #[serde(default)]
    pub comparison: Option<PayrollMetrics>,
}

/// Request body for `POST /workforce/analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceAnalysisRequest {
    /// Movement and attendance counts for the period.
    pub indicators: WorkforceIndicators,
}
