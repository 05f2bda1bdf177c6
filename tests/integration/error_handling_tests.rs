//! Error handling integration tests
//!
//! Every invalid input fails fast with a typed error and a generic
//! user-facing message.

#[cfg(test)]
mod tests {
    use crate::assert_err;
    use crate::common::fixtures::ConfigFactory;
    use studio_pricing::{
        Expense, LineItem, PriceSnapshot, PricingConfig, PricingError, StudioError, UtilityType,
        compute_service_price, compute_unconfigured_price, reconcile_manual_price,
    };

    #[test]
    fn test_negative_cost() {
        let err = assert_err!(compute_service_price(
            -1.0,
            0.0,
            UtilityType::Service,
            &ConfigFactory::studio()
        ));
        assert!(matches!(err, PricingError::InvalidInput { .. }));
    }

    #[test]
    fn test_negative_expenses() {
        let err = compute_service_price(100.0, -0.01, UtilityType::Service, &ConfigFactory::studio())
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput { .. }));
    }

    #[test]
    fn test_non_finite_amounts() {
        let config = ConfigFactory::studio();
        assert!(compute_service_price(f64::NAN, 0.0, UtilityType::Service, &config).is_err());
        assert!(compute_service_price(100.0, f64::INFINITY, UtilityType::Product, &config).is_err());
        assert!(compute_unconfigured_price(f64::NAN, 0.0, UtilityType::Service).is_err());
    }

    #[test]
    fn test_full_commission_config() {
        assert!(PricingConfig::new(0.30, 0.40, 1.0, 0.0).is_err());
        assert!(PricingConfig::new(0.30, 0.40, 1.5, 0.0).is_err());
        assert!(PricingConfig::new(-0.1, 0.40, 0.1, 0.0).is_err());
    }

    #[test]
    fn test_unchecked_config_is_still_rejected() {
        // Fields are public; the kernel re-checks what it receives
        let mut config = ConfigFactory::studio();
        config.commission_percent = 1.0;
        let err = compute_service_price(100.0, 0.0, UtilityType::Service, &config).unwrap_err();
        assert_eq!(err.user_message(), "Invalid pricing configuration");
    }

    #[test]
    fn test_non_positive_sale_price() {
        let config = ConfigFactory::studio();
        let breakdown = compute_service_price(1000.0, 0.0, UtilityType::Service, &config).unwrap();

        for sale_price in [0.0, -100.0, f64::NAN] {
            let err = reconcile_manual_price(&breakdown, sale_price, &config).unwrap_err();
            assert!(matches!(err, PricingError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_negative_expense_line_item() {
        let item = LineItem::new("Session", 100.0, UtilityType::Service)
            .with_expense(Expense::new("refund", -20.0));
        let err = item.expenses_total().unwrap_err();
        assert!(err.to_string().contains("refund"));
    }

    #[test]
    fn test_invalid_public_price_snapshot() {
        let breakdown =
            compute_service_price(1000.0, 0.0, UtilityType::Service, &ConfigFactory::studio())
                .unwrap();
        assert!(PriceSnapshot::capture(&breakdown, Some(-5.0)).is_err());
    }

    #[test]
    fn test_unknown_utility_type() {
        let err = "bundle".parse::<UtilityType>().unwrap_err();
        assert!(err.to_string().contains("bundle"));
    }

    #[test]
    fn test_studio_error_wraps_pricing_error() {
        let pricing_err = PricingError::invalid_input("cost must be >= 0");
        let err: StudioError = pricing_err.clone().into();

        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), pricing_err.to_string());
        assert_eq!(err.user_message(), "Invalid pricing configuration");
    }
}
