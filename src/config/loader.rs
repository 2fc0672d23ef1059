//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the advisory
//! thresholds from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and validates the engine configuration.
///
/// # Example
///
/// ```no_run
/// use hr_metrics_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/thresholds.yaml").unwrap();
/// println!("Aging alert above {}", loader.config().demographics.aging_mean_age);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A threshold is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded engine configuration");
        Ok(Self { config })
    }

    /// Builds a loader from YAML text, e.g. an embedded default.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> EngineResult<EngineConfig> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        validate(&config)?;
        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

fn validate(config: &EngineConfig) -> EngineResult<()> {
    let d = &config.demographics;
    require_non_negative("demographics.aging_mean_age", d.aging_mean_age)?;
    require_non_negative(
        "demographics.succession_over_55_percent",
        d.succession_over_55_percent,
    )?;
    require_non_negative("demographics.recent_hires_percent", d.recent_hires_percent)?;
    require_non_negative("demographics.diversity_gap_points", d.diversity_gap_points)?;
    require_non_negative("demographics.balanced_gap_points", d.balanced_gap_points)?;

    let p = &config.pyramid;
    require_non_negative("pyramid.medium_multiplier", p.medium_multiplier)?;
    require_non_negative("pyramid.high_multiplier", p.high_multiplier)?;
    if p.high_multiplier < p.medium_multiplier {
        return Err(EngineError::InvalidConfig {
            field: "pyramid.high_multiplier".to_string(),
            message: format!(
                "must be at least medium_multiplier ({}), got {}",
                p.medium_multiplier, p.high_multiplier
            ),
        });
    }

    let e = &config.effects;
    require_non_negative("effects.dominance_ratio", e.dominance_ratio)?;
    require_non_negative(
        "effects.significant_variation_percent",
        e.significant_variation_percent,
    )?;
    require_non_negative("effects.balanced_effects_percent", e.balanced_effects_percent)?;
    require_non_negative(
        "effects.exceptional_bonus_share_percent",
        e.exceptional_bonus_share_percent,
    )?;

    let w = &config.workforce;
    require_non_negative("workforce.turnover_alert_percent", w.turnover_alert_percent)?;
    require_non_negative(
        "workforce.absenteeism_alert_percent",
        w.absenteeism_alert_percent,
    )?;
    require_non_negative(
        "workforce.absenteeism_healthy_percent",
        w.absenteeism_healthy_percent,
    )?;

    Ok(())
}
