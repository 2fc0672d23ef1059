//! Configuration loading and management for the HR metrics engine.
//!
//! The calculators themselves take no configuration; the thresholds used by
//! the advisory layer and the waterfall commentary are loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use hr_metrics_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/thresholds.yaml").unwrap();
//! println!("Dominance ratio: {}", config.config().effects.dominance_ratio);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DemographicThresholds, EffectsThresholds, EngineConfig, PyramidThresholds,
    WorkforceThresholds,
};
