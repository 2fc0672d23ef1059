//! Response types for the HR metrics API.
//!
//! This module defines the composite response bodies and the error body of
//! the HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::{AnalysisReport, BonusDistortion, PayrollEffects, PyramidRisk, WaterfallData};

/// Response body for `POST /demographics/analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicsAnalysisResponse {
    /// Demographic alerts and insights.
    pub report: AnalysisReport,
    /// Age-pyramid inversion classification.
    pub pyramid_risk: PyramidRisk,
}

/// Response body for `POST /effects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsResponse {
    /// Price/Volume decomposition.
    pub effects: PayrollEffects,
    /// Bars of the waterfall chart.
    pub waterfall: WaterfallData,
    /// Exceptional bonus check across both periods.
    pub bonus_distortion: BonusDistortion,
    /// Commentary lines, bonus call-out last.
    pub commentary: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
