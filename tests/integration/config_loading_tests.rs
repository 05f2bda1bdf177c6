//! Configuration loading integration tests
//!
//! Loads tenant configurations from disk and from an environment lookup,
//! and checks that only valid settings reach the kernel.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ConfigFactory;
    use std::collections::HashMap;
    use std::io::Write;
    use studio_pricing::config::{MAX_PERCENT, Validate};
    use studio_pricing::{Config, StudioError, UtilityType, compute_service_price};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    // ==================== File loading ====================

    #[tokio::test]
    async fn test_load_config_from_file() {
        let file = write_config(&ConfigFactory::yaml("10.00"));
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.tenant.tenant_id, "estudio-luz");
        assert_eq!(config.tenant.name.as_deref(), Some("Estudio Luz"));
        assert_eq!(config.pricing().unwrap(), ConfigFactory::studio());
    }

    #[tokio::test]
    async fn test_loaded_config_prices_like_factory() {
        let file = write_config(&ConfigFactory::yaml("10.00"));
        let config = Config::from_file(file.path()).await.unwrap();
        let pricing = config.pricing().unwrap();

        let breakdown = compute_service_price(1000.0, 0.0, UtilityType::Service, &pricing).unwrap();
        assert_eq!(breakdown.system_price, 1516.67);
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("missing.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));
    }

    #[tokio::test]
    async fn test_full_commission_rejected_at_load() {
        let file = write_config(&ConfigFactory::yaml("100.00"));
        let err = Config::from_file(file.path()).await.unwrap_err();

        assert!(matches!(err, StudioError::Validation(_)));
        assert!(err.to_string().contains("commission_percent"));
    }

    #[tokio::test]
    async fn test_unparseable_percentage_rejected_at_load() {
        let file = write_config(&ConfigFactory::yaml("ten"));
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, StudioError::Validation(_)));
    }

    #[tokio::test]
    async fn test_minimal_file_uses_defaults() {
        let file = write_config(
            r#"
tenant:
  tenant_id: minimal
  pricing:
    utility_service_percent: 25
    utility_product_percent: 35
    commission_percent: 0
"#,
        );
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.tenant.currency, "MXN");
        assert_eq!(config.logging.level, "info");
        let pricing = config.pricing().unwrap();
        assert_eq!(pricing.markup_percent, 0.0);
        assert_eq!(pricing.utility_service_percent, 0.25);
    }

    // ==================== Environment loading ====================

    #[test]
    fn test_load_config_from_env_lookup() {
        let lookup = env_lookup(&[
            ("STUDIO_TENANT_ID", "estudio-env"),
            ("STUDIO_TENANT_NAME", "Estudio Env"),
            ("STUDIO_UTILITY_SERVICE_PERCENT", "30.00"),
            ("STUDIO_UTILITY_PRODUCT_PERCENT", "40.00"),
            ("STUDIO_COMMISSION_PERCENT", "10.00"),
            ("STUDIO_MARKUP_PERCENT", "5.00"),
            ("STUDIO_LOG_LEVEL", "debug"),
        ]);
        let config = Config::from_env_with(lookup).unwrap();

        assert_eq!(config.tenant.tenant_id, "estudio-env");
        assert_eq!(config.tenant.name.as_deref(), Some("Estudio Env"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.pricing().unwrap(), ConfigFactory::studio());
    }

    #[test]
    fn test_env_negative_percentage_rejected() {
        let lookup = env_lookup(&[
            ("STUDIO_TENANT_ID", "estudio-env"),
            ("STUDIO_UTILITY_SERVICE_PERCENT", "-5"),
            ("STUDIO_UTILITY_PRODUCT_PERCENT", "40"),
            ("STUDIO_COMMISSION_PERCENT", "10"),
        ]);
        let err = Config::from_env_with(lookup).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_env_missing_tenant_rejected() {
        let lookup = env_lookup(&[
            ("STUDIO_UTILITY_SERVICE_PERCENT", "30"),
            ("STUDIO_UTILITY_PRODUCT_PERCENT", "40"),
            ("STUDIO_COMMISSION_PERCENT", "10"),
        ]);
        let err = Config::from_env_with(lookup).unwrap_err();
        assert!(err.to_string().contains("STUDIO_TENANT_ID"));
    }

    // ==================== Validation ====================

    #[test]
    fn test_tenant_validation() {
        let tenant = ConfigFactory::tenant("estudio");
        assert!(tenant.validate().is_ok());

        let mut bad_currency = tenant.clone();
        bad_currency.currency = "pesos".to_string();
        assert!(bad_currency.validate().is_err());

        let mut empty_id = tenant.clone();
        empty_id.tenant_id = "  ".to_string();
        assert!(empty_id.validate().is_err());
    }

    #[test]
    fn test_percentage_ceiling() {
        let mut tenant = ConfigFactory::tenant("estudio");
        tenant.pricing.utility_product_percent = format!("{}", MAX_PERCENT);
        assert!(tenant.validate().is_ok());

        tenant.pricing.utility_product_percent = format!("{}", MAX_PERCENT + 0.01);
        let err = tenant.validate().unwrap_err();
        assert!(err.contains("utility_product_percent"));
    }
}
