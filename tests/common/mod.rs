//! Common test utilities for studio-pricing
//!
//! - Tenant configuration and line item factories
//! - Custom assertions and helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{ConfigFactory, LineItemFactory};
//!
//! #[test]
//! fn my_test() {
//!     let config = ConfigFactory::studio();
//!     let item = LineItemFactory::session(1000.0);
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{ConfigFactory, LineItemFactory};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
