//! Pricing and cost-allocation engine
//!
//! The single source of truth for studio pricing. Every screen that shows a
//! price (service forms, package builder, quotations) delegates here instead
//! of re-deriving the arithmetic.
//!
//! ## Flow
//! - `compute_service_price`: cost + expenses + utility, markup, then the
//!   commission inversion that yields the system price
//! - `reconcile_manual_price`: realized profit of a hand-picked sale price
//! - `aggregate_package` / `reconcile_package`: quantity-weighted totals
//!
//! All functions are pure and take the tenant [`PricingConfig`] explicitly.

pub mod calculator;
pub mod package;
pub mod snapshot;
pub mod types;
pub mod utils;

// Re-export main types and functions
pub use calculator::{
    ALERT_UTILITY_LOSS_RATIO, classify_health, compute_service_price, compute_unconfigured_price,
    reconcile_manual_price,
};
pub use package::{aggregate_package, reconcile_package};
pub use snapshot::PriceSnapshot;
pub use types::{
    Expense, HealthStatus, LineItem, PackageLine, PackageTotals, PriceBreakdown, PricingConfig,
    PricingError, PricingMode, ProfitAnalysis, UtilityType,
};
pub use utils::{
    discount_percent, format_amount, max_discount, parse_percent, percent_to_fraction, round2,
    sum_expenses,
};
