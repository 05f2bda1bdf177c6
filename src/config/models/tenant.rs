//! Tenant pricing settings
//!
//! Tenants store their percentages as whole-number decimal strings
//! (`"30.00"` meaning 30%). [`TenantPricingSettings::normalize`] is the only
//! place those strings become kernel fractions.

use super::{default_currency, default_markup_percent};
use crate::core::pricing::{PricingConfig, PricingError, parse_percent, percent_to_fraction};
use serde::{Deserialize, Deserializer, Serialize};

/// Pricing percentages as persisted in the tenant settings store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantPricingSettings {
    /// Utility margin for services, e.g. `"30.00"`
    #[serde(deserialize_with = "percent_string")]
    pub utility_service_percent: String,
    /// Utility margin for products, e.g. `"40.00"`
    #[serde(deserialize_with = "percent_string")]
    pub utility_product_percent: String,
    /// Sales commission, e.g. `"10.00"`
    #[serde(deserialize_with = "percent_string")]
    pub commission_percent: String,
    /// Markup / safety factor, e.g. `"5.00"`
    #[serde(
        default = "default_markup_percent",
        deserialize_with = "percent_string"
    )]
    pub markup_percent: String,
}

impl TenantPricingSettings {
    pub fn new(
        utility_service_percent: &str,
        utility_product_percent: &str,
        commission_percent: &str,
        markup_percent: &str,
    ) -> Self {
        Self {
            utility_service_percent: utility_service_percent.to_string(),
            utility_product_percent: utility_product_percent.to_string(),
            commission_percent: commission_percent.to_string(),
            markup_percent: markup_percent.to_string(),
        }
    }

    /// Parse the stored percentages and convert them to fractions
    pub fn normalize(&self) -> Result<PricingConfig, PricingError> {
        let field = |name: &str, raw: &str| {
            parse_percent(raw)
                .map(percent_to_fraction)
                .map_err(|e| PricingError::InvalidConfig {
                    field: name.to_string(),
                    message: e.to_string(),
                })
        };

        PricingConfig::new(
            field("utility_service_percent", &self.utility_service_percent)?,
            field("utility_product_percent", &self.utility_product_percent)?,
            field("commission_percent", &self.commission_percent)?,
            field("markup_percent", &self.markup_percent)?,
        )
    }
}

/// Accept `"30.00"` as well as a bare YAML number `30`
fn percent_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPercent {
        Text(String),
        Number(f64),
    }

    Ok(match RawPercent::deserialize(deserializer)? {
        RawPercent::Text(text) => text,
        RawPercent::Number(number) => number.to_string(),
    })
}

/// One tenant's studio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Tenant identifier (studio slug)
    pub tenant_id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Currency code used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency: String,
    pub pricing: TenantPricingSettings,
}
