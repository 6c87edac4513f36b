// tests/config_tests.rs - Store configuration from environment lookups

use std::collections::HashMap;
use std::path::PathBuf;

use rust_decimal::Decimal;
use storefront::web_app::config::{
    StoreConfig, ENV_CATALOG_PATH, ENV_FLAT_SHIPPING, ENV_LOW_STOCK_THRESHOLD, ENV_PRICE_CEILING,
    ENV_TAX_RATE,
};
use storefront::web_app::error::ConfigError;

fn load(pairs: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    StoreConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_all_overrides() {
    let config = load(&[
        (ENV_TAX_RATE, "0.0725"),
        (ENV_FLAT_SHIPPING, "49.00"),
        (ENV_LOW_STOCK_THRESHOLD, "3"),
        (ENV_PRICE_CEILING, "10000"),
        (ENV_CATALOG_PATH, "/srv/catalog.json"),
    ])
    .unwrap();

    assert_eq!(config.pricing.tax_rate, Decimal::new(725, 4));
    assert_eq!(config.pricing.flat_shipping, Decimal::from(49));
    assert_eq!(config.low_stock_threshold, 3);
    assert_eq!(config.price_ceiling, Decimal::from(10000));
    assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
}

#[test]
fn test_malformed_decimal_is_rejected() {
    let err = load(&[(ENV_TAX_RATE, "eight percent")]).unwrap_err();
    match err {
        ConfigError::InvalidValue { var, value, .. } => {
            assert_eq!(var, ENV_TAX_RATE);
            assert_eq!(value, "eight percent");
        }
    }
}

#[test]
fn test_tax_rate_must_be_a_fraction() {
    assert!(load(&[(ENV_TAX_RATE, "8")]).is_err());
    assert!(load(&[(ENV_TAX_RATE, "-0.01")]).is_err());
    assert!(load(&[(ENV_TAX_RATE, "0")]).is_ok());
}

#[test]
fn test_threshold_must_be_a_whole_number() {
    assert!(load(&[(ENV_LOW_STOCK_THRESHOLD, "2.5")]).is_err());
    assert!(load(&[(ENV_LOW_STOCK_THRESHOLD, "-1")]).is_err());
}

#[test]
fn test_price_ceiling_must_be_positive() {
    assert!(load(&[(ENV_PRICE_CEILING, "0")]).is_err());
}

#[test]
fn test_error_message_names_the_variable() {
    let err = load(&[(ENV_FLAT_SHIPPING, "lots")]).unwrap_err();
    assert!(err.to_string().starts_with("STORE_FLAT_SHIPPING has invalid value 'lots'"));
}

#[test]
fn test_config_serializes() {
    let config = StoreConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: StoreConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
