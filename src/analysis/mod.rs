//! Advisory analysis over computed metrics.
//!
//! These operations never change a metric. They read a metrics snapshot and
//! the configured thresholds and return alerts, insights or a risk
//! classification for the reporting layer to render.

mod demographics;
mod workforce;

pub use demographics::{analyze_demographics, classify_pyramid_risk};
pub use workforce::analyze_workforce;
