//! Error handling for studio pricing
//!
//! This module defines the crate-level error type that wraps kernel,
//! configuration and I/O failures.

mod helpers;
mod types;

pub use types::{Result, StudioError};
