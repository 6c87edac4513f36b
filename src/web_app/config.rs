// web_app/config.rs - Store configuration
//
// Pricing policy and display thresholds. Defaults match the live store:
// flat 8% tax, free shipping, low stock at 5 units, a 0-5000 price slider.
// The server binary overrides them from STORE_* environment variables
// (after loading `.env`) and hands the result to the views via context.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::web_app::error::ConfigError;
use crate::web_app::model::{LOW_STOCK_THRESHOLD, PRICE_SLIDER_MAX};

pub const ENV_TAX_RATE: &str = "STORE_TAX_RATE";
pub const ENV_FLAT_SHIPPING: &str = "STORE_FLAT_SHIPPING";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STORE_LOW_STOCK_THRESHOLD";
pub const ENV_PRICE_CEILING: &str = "STORE_PRICE_CEILING";
pub const ENV_CATALOG_PATH: &str = "STORE_CATALOG_PATH";

/// Flat-rate tax and shipping applied to every order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fraction of the subtotal, e.g. 0.08
    pub tax_rate: Decimal,
    pub flat_shipping: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            tax_rate: Decimal::new(8, 2),
            flat_shipping: Decimal::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub pricing: PricingPolicy,
    pub low_stock_threshold: u32,
    /// Upper bound of the catalog price control
    pub price_ceiling: Decimal,
    /// Alternative catalog JSON; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            pricing: PricingPolicy::default(),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            price_ceiling: Decimal::from(PRICE_SLIDER_MAX),
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; unset or empty variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = StoreConfig::default();

        if let Some(raw) = get(ENV_TAX_RATE) {
            let rate: Decimal = parse(ENV_TAX_RATE, &raw)?;
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(invalid(ENV_TAX_RATE, &raw, "must be a fraction in [0, 1)"));
            }
            config.pricing.tax_rate = rate;
        }

        if let Some(raw) = get(ENV_FLAT_SHIPPING) {
            let shipping: Decimal = parse(ENV_FLAT_SHIPPING, &raw)?;
            if shipping < Decimal::ZERO {
                return Err(invalid(ENV_FLAT_SHIPPING, &raw, "must not be negative"));
            }
            config.pricing.flat_shipping = shipping;
        }

        if let Some(raw) = get(ENV_LOW_STOCK_THRESHOLD) {
            config.low_stock_threshold = parse(ENV_LOW_STOCK_THRESHOLD, &raw)?;
        }

        if let Some(raw) = get(ENV_PRICE_CEILING) {
            let ceiling: Decimal = parse(ENV_PRICE_CEILING, &raw)?;
            if ceiling <= Decimal::ZERO {
                return Err(invalid(ENV_PRICE_CEILING, &raw, "must be positive"));
            }
            config.price_ceiling = ceiling;
        }

        config.catalog_path = get(ENV_CATALOG_PATH).map(PathBuf::from);

        Ok(config)
    }
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid(var, raw, &e.to_string()))
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.pricing.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.pricing.flat_shipping, Decimal::ZERO);
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(config.price_ceiling, Decimal::from(5000));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_empty_environment_keeps_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = StoreConfig::from_lookup(lookup_from(&[(ENV_TAX_RATE, "  ")])).unwrap();
        assert_eq!(config.pricing.tax_rate, Decimal::new(8, 2));
    }

    #[test]
    fn test_negative_shipping_rejected() {
        let err = StoreConfig::from_lookup(lookup_from(&[(ENV_FLAT_SHIPPING, "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_FLAT_SHIPPING, .. }));
    }
}
