//! Configuration management
//!
//! Loads a tenant's pricing settings from a YAML file or the environment,
//! validates them and hands the kernel a normalized [`PricingConfig`].

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::{MAX_PERCENT, Validate};

use crate::core::pricing::PricingConfig;
use crate::utils::error::{Result, StudioError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tenant settings, including pricing percentages
    pub tenant: TenantConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StudioError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| StudioError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Get tenant configuration
    pub fn tenant(&self) -> &TenantConfig {
        &self.tenant
    }

    /// Normalized pricing configuration for the kernel
    pub fn pricing(&self) -> Result<PricingConfig> {
        Ok(self.tenant.pricing.normalize()?)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.tenant
            .validate()
            .map_err(|e| StudioError::Validation(format!("Tenant config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| StudioError::Validation(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| StudioError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
