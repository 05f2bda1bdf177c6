//! Core error types

use crate::core::pricing::PricingError;
use thiserror::Error;

/// Result type alias for studio pricing
pub type Result<T> = std::result::Result<T, StudioError>;

/// Main error type for studio pricing
#[derive(Error, Debug)]
pub enum StudioError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pricing kernel errors
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
