//! Configuration loading from environment variables
//!
//! Variables mirror the tenant settings store:
//! `STUDIO_TENANT_ID`, `STUDIO_TENANT_NAME`, `STUDIO_CURRENCY`,
//! `STUDIO_UTILITY_SERVICE_PERCENT`, `STUDIO_UTILITY_PRODUCT_PERCENT`,
//! `STUDIO_COMMISSION_PERCENT`, `STUDIO_MARKUP_PERCENT`,
//! `STUDIO_LOG_LEVEL`, `STUDIO_LOG_JSON`.

use super::Config;
use super::models::*;
use crate::utils::error::{Result, StudioError};
use std::env;
use tracing::info;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| StudioError::Config(format!("Missing environment variable {}", key)))
        };

        let pricing = TenantPricingSettings {
            utility_service_percent: required("STUDIO_UTILITY_SERVICE_PERCENT")?,
            utility_product_percent: required("STUDIO_UTILITY_PRODUCT_PERCENT")?,
            commission_percent: required("STUDIO_COMMISSION_PERCENT")?,
            markup_percent: lookup("STUDIO_MARKUP_PERCENT")
                .unwrap_or_else(default_markup_percent),
        };

        let tenant = TenantConfig {
            tenant_id: required("STUDIO_TENANT_ID")?,
            name: lookup("STUDIO_TENANT_NAME"),
            currency: lookup("STUDIO_CURRENCY").unwrap_or_else(default_currency),
            pricing,
        };

        let json = match lookup("STUDIO_LOG_JSON") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| StudioError::Config(format!("Invalid STUDIO_LOG_JSON: {}", raw)))?,
            None => false,
        };

        let logging = LoggingConfig {
            level: lookup("STUDIO_LOG_LEVEL").unwrap_or_else(default_log_level),
            json,
        };

        let config = Self { tenant, logging };
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
