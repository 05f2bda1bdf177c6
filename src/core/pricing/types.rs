//! Pricing Types
//!
//! Configuration, line items and the computed breakdown / profit records
//! shared by every pricing call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which utility margin a line item draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilityType {
    /// Labour / session work, priced with `utility_service_percent`
    #[serde(alias = "servicio")]
    Service,
    /// Physical deliverables, priced with `utility_product_percent`
    #[serde(alias = "producto")]
    Product,
}

impl UtilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UtilityType::Service => "service",
            UtilityType::Product => "product",
        }
    }
}

impl fmt::Display for UtilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UtilityType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "service" | "servicio" => Ok(UtilityType::Service),
            "product" | "producto" => Ok(UtilityType::Product),
            other => Err(PricingError::invalid_input(format!(
                "unknown utility type '{}' (expected 'service' or 'product')",
                other
            ))),
        }
    }
}

/// Tenant pricing configuration, expressed as fractions (`0.30` == 30%)
///
/// Build it with [`PricingConfig::new`] or from stored settings through
/// `TenantPricingSettings::normalize`; both check the invariants below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Margin applied to service lines
    pub utility_service_percent: f64,
    /// Margin applied to product lines
    pub utility_product_percent: f64,
    /// Sales commission, taken from the final system price
    pub commission_percent: f64,
    /// Markup / safety factor applied to the subtotal
    pub markup_percent: f64,
}

impl PricingConfig {
    /// Create a validated configuration from fractions
    pub fn new(
        utility_service_percent: f64,
        utility_product_percent: f64,
        commission_percent: f64,
        markup_percent: f64,
    ) -> Result<Self, PricingError> {
        let config = Self {
            utility_service_percent,
            utility_product_percent,
            commission_percent,
            markup_percent,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every fraction is finite and non-negative and that the
    /// commission leaves a positive denominator
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("utility_service_percent", self.utility_service_percent),
            ("utility_product_percent", self.utility_product_percent),
            ("commission_percent", self.commission_percent),
            ("markup_percent", self.markup_percent),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PricingError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be a finite, non-negative fraction (got {})", value),
                });
            }
        }

        if self.commission_percent >= 1.0 {
            return Err(PricingError::InvalidConfig {
                field: "commission_percent".to_string(),
                message: format!(
                    "commission must be below 100% (got {}%)",
                    self.commission_percent * 100.0
                ),
            });
        }

        Ok(())
    }

    /// Margin fraction for the given utility type
    pub fn utility_percent(&self, utility_type: UtilityType) -> f64 {
        match utility_type {
            UtilityType::Service => self.utility_service_percent,
            UtilityType::Product => self.utility_product_percent,
        }
    }
}

/// One itemized fixed expense attached to a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// A priced service occurrence inside a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name of the service
    #[serde(default)]
    pub name: String,
    /// Base unit cost
    pub cost: f64,
    /// Itemized fixed expenses; only their sum is priced
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub utility_type: UtilityType,
    /// Multiplier applied to every per-line amount
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    pub fn new(name: impl Into<String>, cost: f64, utility_type: UtilityType) -> Self {
        Self {
            name: name.into(),
            cost,
            expenses: Vec::new(),
            utility_type,
            quantity: 1,
        }
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sum of the itemized expenses, rejecting negative amounts
    pub fn expenses_total(&self) -> Result<f64, PricingError> {
        super::utils::sum_expenses(&self.expenses)
    }
}

/// How a breakdown was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Full utility / markup / commission inversion
    Configured,
    /// No tenant configuration was available: cost plus expenses only
    Degraded,
}

/// Result of pricing one line item against one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub cost: f64,
    pub expenses: f64,
    pub utility_type: UtilityType,
    /// Margin fraction that was applied
    pub utility_percent: f64,
    /// Margin amount in currency
    pub base_utility: f64,
    /// `cost + expenses + base_utility`
    pub subtotal: f64,
    pub markup_amount: f64,
    /// `subtotal + markup_amount`, what remains once commission is paid
    pub after_markup: f64,
    /// Recommended price before any manual adjustment
    pub system_price: f64,
    /// Commission owed on `system_price`
    pub commission_amount: f64,
    pub mode: PricingMode,
}

impl PriceBreakdown {
    pub fn is_degraded(&self) -> bool {
        self.mode == PricingMode::Degraded
    }

    /// Cost plus expenses
    pub fn costs_total(&self) -> f64 {
        super::utils::round2(self.cost + self.expenses)
    }
}

/// Qualitative health of a manual sale price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The sale does not cover costs and commission
    Loss,
    /// More than half of the expected utility was given away
    Alert,
    /// Some utility was given away, but no more than half
    Caution,
    /// Expected utility met or exceeded
    Healthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Loss => "loss",
            HealthStatus::Alert => "alert",
            HealthStatus::Caution => "caution",
            HealthStatus::Healthy => "healthy",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Realized profit of a manual sale price compared to the expected utility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitAnalysis {
    pub sale_price: f64,
    /// Commission owed on `sale_price`
    pub real_commission: f64,
    /// Cost plus expenses
    pub costs_total: f64,
    pub real_profit: f64,
    /// `real_profit / sale_price * 100`
    pub margin_percent: f64,
    pub expected_utility: f64,
    /// `real_profit - expected_utility`
    pub deviation: f64,
    pub deviation_percent: f64,
    pub health_status: HealthStatus,
}

/// Package-level totals, every amount already weighted by quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTotals {
    pub total_cost: f64,
    pub total_expenses: f64,
    pub total_utility_services: f64,
    pub total_utility_products: f64,
    pub total_utility: f64,
    pub package_system_price: f64,
    /// Per-line breakdowns, in input order, not multiplied by quantity
    pub lines: Vec<PackageLine>,
}

/// One priced line of a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageLine {
    pub name: String,
    pub quantity: u32,
    pub breakdown: PriceBreakdown,
    /// `breakdown.system_price * quantity`
    pub line_system_price: f64,
}

/// Pricing errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid pricing input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid pricing configuration for {field}: {message}")]
    InvalidConfig { field: String, message: String },
}

impl PricingError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Message safe to show to an end user
    pub fn user_message(&self) -> &'static str {
        "Invalid pricing configuration"
    }
}
