//! HTTP API module for the HR metrics engine.
//!
//! This module exposes the calculators and advisory operations to the
//! reporting layer as JSON endpoints. Persistence stays with the caller:
//! every request carries the records or snapshots it needs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DemographicsAnalysisRequest, DemographicsMetricsRequest, EffectsRequest,
    PayrollMetricsRequest, WorkforceAnalysisRequest,
};
pub use response::{ApiError, DemographicsAnalysisResponse, EffectsResponse};
pub use state::AppState;
