//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use studio_pricing::{
    Expense, LineItem, PricingConfig, TenantConfig, TenantPricingSettings, UtilityType,
};

/// Factory for tenant pricing configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// 30% services, 40% products, 10% commission, 5% markup
    pub fn studio() -> PricingConfig {
        PricingConfig::new(0.30, 0.40, 0.10, 0.05).unwrap()
    }

    /// No markup, no commission: system price equals the subtotal
    pub fn no_commission() -> PricingConfig {
        PricingConfig::new(0.30, 0.40, 0.0, 0.0).unwrap()
    }

    /// A heavy commission, far from the usual 10%
    pub fn high_commission() -> PricingConfig {
        PricingConfig::new(0.25, 0.35, 0.45, 0.10).unwrap()
    }

    /// Stored settings equivalent to [`ConfigFactory::studio`]
    pub fn studio_settings() -> TenantPricingSettings {
        TenantPricingSettings::new("30.00", "40.00", "10.00", "5.00")
    }

    /// A tenant carrying [`ConfigFactory::studio_settings`]
    pub fn tenant(tenant_id: &str) -> TenantConfig {
        TenantConfig {
            tenant_id: tenant_id.to_string(),
            name: Some("Estudio de Prueba".to_string()),
            currency: "MXN".to_string(),
            pricing: Self::studio_settings(),
        }
    }

    /// YAML document for a full configuration file
    pub fn yaml(commission: &str) -> String {
        format!(
            r#"tenant:
  tenant_id: estudio-luz
  name: Estudio Luz
  currency: MXN
  pricing:
    utility_service_percent: "30.00"
    utility_product_percent: "40.00"
    commission_percent: "{}"
    markup_percent: "5.00"
logging:
  level: info
  json: false
"#,
            commission
        )
    }
}

/// Factory for package line items
pub struct LineItemFactory;

impl LineItemFactory {
    /// A photo session (service)
    pub fn session(cost: f64) -> LineItem {
        LineItem::new("Photo session", cost, UtilityType::Service)
    }

    /// A printed product
    pub fn product(cost: f64, quantity: u32) -> LineItem {
        LineItem::new("Printed album", cost, UtilityType::Product).with_quantity(quantity)
    }

    /// A session with travel and assistant expenses
    pub fn session_with_expenses(cost: f64) -> LineItem {
        Self::session(cost)
            .with_expense(Expense::new("travel", 150.0))
            .with_expense(Expense::new("assistant", 350.0))
    }

    /// A typical wedding package
    pub fn wedding_package() -> Vec<LineItem> {
        vec![
            Self::session_with_expenses(3500.0),
            Self::product(800.0, 2),
            LineItem::new("Video edit", 1200.0, UtilityType::Service),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_settings_match_studio_config() {
        let normalized = ConfigFactory::studio_settings().normalize().unwrap();
        assert_eq!(normalized, ConfigFactory::studio());
    }

    #[test]
    fn test_session_with_expenses_total() {
        let item = LineItemFactory::session_with_expenses(1000.0);
        assert_eq!(item.expenses_total().unwrap(), 500.0);
        assert_eq!(item.quantity, 1);
    }
}
