//! Configuration data models
//!
//! This module defines the configuration structures read from tenant
//! settings files and the environment.

pub mod logging;
pub mod tenant;

// Re-export all configuration types
pub use logging::*;
pub use tenant::*;

/// Default tenant currency
pub fn default_currency() -> String {
    "MXN".to_string()
}

/// Default markup percentage when a tenant never set one
pub fn default_markup_percent() -> String {
    "0".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
