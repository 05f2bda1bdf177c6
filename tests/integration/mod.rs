//! Integration tests for studio-pricing
//!
//! These tests exercise the public API the way callers use it: load a
//! tenant configuration, normalize it and price services and packages.

pub mod config_loading_tests;
pub mod error_handling_tests;
