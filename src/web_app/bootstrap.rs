// web_app/bootstrap.rs - Server state handed to the browser
//
// The server resolves `StoreConfig` and the catalog from the environment at
// start-up. The WASM client cannot, so the HTML shell carries both as a JSON
// `<script>` block and `hydrate()` installs them before mounting the app.
// Client and server then render from the same data.

use serde::{Deserialize, Serialize};

use crate::web_app::api::catalog::{init_catalog, CatalogProvider, StaticCatalog};
use crate::web_app::config::StoreConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::{Category, Product};

/// `id` of the `<script type="application/json">` element in the shell
pub const BOOTSTRAP_ELEMENT_ID: &str = "store-bootstrap";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreBootstrap {
    pub config: StoreConfig,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl StoreBootstrap {
    pub fn new(config: StoreConfig, catalog: &impl CatalogProvider) -> Self {
        StoreBootstrap {
            config,
            categories: catalog.categories().to_vec(),
            products: catalog.list_all().to_vec(),
        }
    }

    /// JSON that is safe to place inside a `<script>` element
    ///
    /// `<` only occurs inside JSON strings, where the `\u003c` escape decodes
    /// to the same character, so no `</script>` can close the element early.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the catalog and install it process-wide; returns the config
    pub fn install(self) -> Result<StoreConfig, CatalogError> {
        let catalog = StaticCatalog::new(self.products, self.categories)?;
        init_catalog(catalog);
        Ok(self.config)
    }
}

/// Read the shell's bootstrap block, install its catalog and return its config
///
/// A missing or unreadable block leaves the bundled catalog and the default
/// config in place.
#[cfg(feature = "hydrate")]
pub fn install_from_document() -> StoreConfig {
    use leptos::prelude::document;

    let Some(json) = document()
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        tracing::warn!("no store bootstrap in page, using defaults");
        return StoreConfig::default();
    };

    match StoreBootstrap::from_json(&json).and_then(StoreBootstrap::install) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "invalid store bootstrap, using defaults");
            StoreConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::config::PricingPolicy;
    use rust_decimal::Decimal;

    fn custom_config() -> StoreConfig {
        StoreConfig {
            pricing: PricingPolicy {
                tax_rate: Decimal::new(10, 2),
                flat_shipping: Decimal::new(2500, 2),
            },
            low_stock_threshold: 3,
            ..StoreConfig::default()
        }
    }

    #[test]
    fn test_script_json_carries_config_and_catalog() {
        let catalog = StaticCatalog::bundled();
        let json = StoreBootstrap::new(custom_config(), &catalog).to_script_json().unwrap();

        let restored = StoreBootstrap::from_json(&json).unwrap();
        assert_eq!(restored.config, custom_config());
        assert_eq!(restored.products, catalog.list_all());
        assert_eq!(restored.categories, catalog.categories());
    }

    #[test]
    fn test_script_json_cannot_close_script_element() {
        let catalog = StaticCatalog::bundled();
        let mut bootstrap = StoreBootstrap::new(StoreConfig::default(), &catalog);
        bootstrap.products[0].description = "Sturdy</script><script>alert(1)</script>".to_string();

        let json = bootstrap.to_script_json().unwrap();
        assert!(!json.contains('<'));

        let restored = StoreBootstrap::from_json(&json).unwrap();
        assert_eq!(restored.products[0].description, "Sturdy</script><script>alert(1)</script>");
    }

    #[test]
    fn test_install_rejects_invalid_catalog() {
        let bootstrap = StoreBootstrap {
            config: custom_config(),
            categories: vec![],
            products: vec![],
        };
        assert!(matches!(bootstrap.install(), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(StoreBootstrap::from_json("{"), Err(CatalogError::Json(_))));
    }
}
