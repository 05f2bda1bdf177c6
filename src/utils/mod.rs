//! Utility modules for studio pricing
//!
//! - **error**: crate-level error type and helpers
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging
