//! # studio-pricing
//!
//! Pricing and cost-allocation engine for multi-tenant studio management.
//!
//! Given a service's cost, its fixed expenses, whether it is a service or a
//! product and the tenant's pricing configuration, the engine derives the
//! recommended system price and reconciles any manual sale price against
//! the utility the tenant expected to earn.
//!
//! ## Features
//!
//! - **Forward pricing**: utility, markup and commission inversion with cent rounding
//! - **Manual-price reconciliation**: real commission, real profit and a health status
//! - **Packages**: quantity-weighted totals derived from per-line breakdowns
//! - **Snapshots**: denormalized price records ready to persist
//! - **Tenant configuration**: YAML or environment, validated and normalized once
//!
//! ## Quick Start
//!
//! ```rust
//! use studio_pricing::{PricingConfig, UtilityType, compute_service_price, reconcile_manual_price};
//!
//! let config = PricingConfig::new(0.30, 0.40, 0.10, 0.05)?;
//! let breakdown = compute_service_price(1000.0, 0.0, UtilityType::Service, &config)?;
//! assert_eq!(breakdown.system_price, 1516.67);
//!
//! let analysis = reconcile_manual_price(&breakdown, 1200.0, &config)?;
//! assert_eq!(analysis.real_profit, 80.0);
//! # Ok::<(), studio_pricing::PricingError>(())
//! ```
//!
//! ## Tenant configuration
//!
//! ```rust,no_run
//! use studio_pricing::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/pricing.yaml").await?;
//!     let pricing = config.pricing()?;
//!     println!("commission: {}", pricing.commission_percent);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{Config, TenantConfig, TenantPricingSettings};
pub use utils::error::{Result, StudioError};

// Export the pricing kernel
pub use core::pricing::{
    Expense, HealthStatus, LineItem, PackageLine, PackageTotals, PriceBreakdown, PriceSnapshot,
    PricingConfig, PricingError, PricingMode, ProfitAnalysis, UtilityType, aggregate_package,
    classify_health, compute_service_price, compute_unconfigured_price, reconcile_manual_price,
    reconcile_package,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
