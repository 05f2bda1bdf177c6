//! Configuration validation
//!
//! Validation runs when a tenant configuration is loaded or saved, so that
//! bad percentages never reach the pricing kernel in steady state.
//!
//! - `trait_def`: core Validate trait definition
//! - `config_validators`: validators for tenant, pricing and logging settings
//! - `tests`: test suite for all validators

mod config_validators;
mod trait_def;

pub use config_validators::MAX_PERCENT;
pub use trait_def::Validate;
