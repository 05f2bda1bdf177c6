//! Helper functions for creating specific error types

use super::types::StudioError;

impl StudioError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Message safe to show to an end user
    ///
    /// Pricing and configuration failures are data errors from the caller;
    /// they all collapse into one generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            StudioError::Pricing(err) => err.user_message(),
            StudioError::Config(_) | StudioError::Validation(_) | StudioError::Yaml(_) => {
                "Invalid pricing configuration"
            }
            StudioError::Serialization(_) | StudioError::Io(_) => "Internal error",
        }
    }

    /// Whether the error comes from bad pricing data rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            StudioError::Pricing(_) | StudioError::Validation(_) | StudioError::Config(_)
        )
    }
}
