//! Tenant configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::pricing::parse_percent;
use crate::utils::logging::LogLevel;
use tracing::debug;

/// Upper bound for any stored percentage; anything above is a typo
pub const MAX_PERCENT: f64 = 1000.0;

impl Validate for TenantConfig {
    fn validate(&self) -> Result<(), String> {
        debug!(tenant = %self.tenant_id, "Validating tenant configuration");

        if self.tenant_id.trim().is_empty() {
            return Err("Tenant id cannot be empty".to_string());
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!(
                "Currency must be a three-letter ISO code, got '{}'",
                self.currency
            ));
        }

        self.pricing.validate()
    }
}

impl Validate for TenantPricingSettings {
    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("utility_service_percent", &self.utility_service_percent),
            ("utility_product_percent", &self.utility_product_percent),
            ("commission_percent", &self.commission_percent),
            ("markup_percent", &self.markup_percent),
        ];

        for (name, raw) in fields {
            let value = parse_percent(raw).map_err(|e| format!("{}: {}", name, e))?;
            if value < 0.0 {
                return Err(format!("{} cannot be negative (got {})", name, raw));
            }
            if value > MAX_PERCENT {
                return Err(format!(
                    "{} seems too high (>{}%), got {}",
                    name, MAX_PERCENT, raw
                ));
            }
        }

        let commission = parse_percent(&self.commission_percent).map_err(|e| e.to_string())?;
        if commission >= 100.0 {
            return Err(format!(
                "commission_percent must be below 100, got {}",
                self.commission_percent
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        self.level
            .parse::<LogLevel>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
