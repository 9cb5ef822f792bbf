//! Configuration errors.
//!
//! Only configuration can fail. Malformed collaborator output is filtered
//! out during a turn and never reaches the caller as an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("{field} must lie in [0, 1] (got {value})")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("invalid range for {field}: min {min} exceeds max {max}")]
    InvalidRange { field: &'static str, min: u32, max: u32 },

    #[error("max dice must be between 1 and 6 (got {0})")]
    InvalidDiceCount(usize),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
