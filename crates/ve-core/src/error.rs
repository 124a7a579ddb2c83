//! Configuration error type.
//!
//! Raised synchronously by [`SimConfig::validate`][crate::SimConfig::validate];
//! a run whose configuration fails validation is never started.

use thiserror::Error;

/// Rejected run configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("arrival rate must be positive and finite, got {0}")]
    InvalidRate(f64),

    #[error("traversal time must be positive and finite, got {0}")]
    InvalidTraversalTime(f64),

    #[error("opening hours must be positive and finite, got {0}")]
    InvalidHours(f64),

    #[error("infection proportion must lie in [0, 1], got {0}")]
    InvalidProportion(f64),

    #[error("{what} must be non-negative and finite, got {value}")]
    InvalidCapacity { what: &'static str, value: f64 },

    #[error("basket-size {what} is invalid: {value}")]
    InvalidBasket { what: &'static str, value: f64 },
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
