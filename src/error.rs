//! Error types for the HR metrics engine.
//!
//! The calculators never fail: missing data, bad records and numerical
//! failures all degrade to well-defined results. Errors only arise while
//! loading configuration.

use thiserror::Error;

/// The main error type for the HR metrics engine.
///
/// # Example
///
/// ```
/// use hr_metrics_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/thresholds.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/thresholds.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but a value is out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, as a dotted path.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
