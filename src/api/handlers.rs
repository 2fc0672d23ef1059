//! HTTP request handlers for the HR metrics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_demographics, analyze_workforce, classify_pyramid_risk};
use crate::calculation::{
    build_waterfall, calculate_demographics, calculate_effects, calculate_payroll,
    detect_bonus_distortion, generate_commentary,
};

use super::request::{
    DemographicsAnalysisRequest, DemographicsMetricsRequest, EffectsRequest,
    PayrollMetricsRequest, WorkforceAnalysisRequest,
};
use super::response::{ApiError, DemographicsAnalysisResponse, EffectsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/metrics", post(payroll_metrics_handler))
        .route("/demographics/metrics", post(demographics_metrics_handler))
        .route("/demographics/analysis", post(demographics_analysis_handler))
        .route("/effects", post(effects_handler))
        .route("/workforce/analysis", post(workforce_analysis_handler))
        .with_state(state)
}

/// Handler for POST /payroll/metrics.
///
/// Aggregates the compensation records of one snapshot.
async fn payroll_metrics_handler(
    payload: Result<Json<PayrollMetricsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll metrics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let metrics = calculate_payroll(&request.compensation, &request.employees);
    info!(
        correlation_id = %correlation_id,
        records = request.compensation.len(),
        excluded = metrics.excluded_record_count,
        gross_payroll = %metrics.gross_payroll,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll metrics computed"
    );

    json_ok(metrics)
}

/// Handler for POST /demographics/metrics.
///
/// Aggregates a roster at the given reference date.
async fn demographics_metrics_handler(
    payload: Result<Json<DemographicsMetricsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing demographics metrics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let metrics = calculate_demographics(&request.employees, request.period_date);
    info!(
        correlation_id = %correlation_id,
        employees = request.employees.len(),
        active_headcount = metrics.active_headcount,
        duration_us = start_time.elapsed().as_micros(),
        "Demographics metrics computed"
    );

    json_ok(metrics)
}

/// Handler for POST /demographics/analysis.
///
/// Returns the demographic alerts and the age-pyramid risk of a snapshot.
async fn demographics_analysis_handler(
    State(state): State<AppState>,
    payload: Result<Json<DemographicsAnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing demographics analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let response = DemographicsAnalysisResponse {
        report: analyze_demographics(&request.metrics, &config.demographics),
        pyramid_risk: classify_pyramid_risk(&request.metrics, &config.pyramid),
    };
    info!(
        correlation_id = %correlation_id,
        alerts = response.report.alerts.len(),
        pyramid_risk = ?response.pyramid_risk.level,
        "Demographics analysis completed"
    );

    json_ok(response)
}

/// Handler for POST /effects.
///
/// Recomputes the Price/Volume decomposition between two snapshots and
/// returns it with the waterfall bars and commentary.
async fn effects_handler(
    State(state): State<AppState>,
    payload: Result<Json<EffectsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing effects request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let thresholds = &state.config().effects;
    let start_time = Instant::now();

    let effects = calculate_effects(&request.current, request.comparison.as_ref());
    let waterfall = build_waterfall(&effects);
    let bonus_distortion = detect_bonus_distortion(
        &request.current,
        request.comparison.as_ref(),
        thresholds.exceptional_bonus_share_percent,
    );
    let mut commentary = generate_commentary(&effects, thresholds);
    commentary.extend(bonus_distortion.commentary());

    if !effects.coherence.coherence_ok {
        warn!(
            correlation_id = %correlation_id,
            gap = %effects.coherence.gap,
            gap_percent = %effects.coherence.gap_percent,
            "Effects did not reconcile"
        );
    }
    info!(
        correlation_id = %correlation_id,
        status = ?effects.status,
        price_effect = %effects.price_effect,
        volume_effect = %effects.volume_effect,
        duration_us = start_time.elapsed().as_micros(),
        "Effects computed"
    );

    json_ok(EffectsResponse {
        effects,
        waterfall,
        bonus_distortion,
        commentary,
    })
}

/// Handler for POST /workforce/analysis.
async fn workforce_analysis_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkforceAnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workforce analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let report = analyze_workforce(&request.indicators, &state.config().workforce);
    info!(
        correlation_id = %correlation_id,
        alerts = report.alerts.len(),
        insights = report.insights.len(),
        "Workforce analysis completed"
    );

    json_ok(report)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::with_details("MALFORMED_JSON", "Invalid JSON syntax", err.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
