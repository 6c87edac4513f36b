// web_app/api/catalog.rs - Read-only catalog provider
//
// The store's only data source. `StaticCatalog` holds the records in memory,
// and a process-wide instance is set once at start-up, in the same way the
// server would hold a connection pool.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::fixtures::tables::{CategoriesTable, ProductsTable};
use crate::fixtures::SeedTable;
use crate::web_app::error::CatalogError;
use crate::web_app::model::{Category, Product};

static CATALOG: OnceLock<StaticCatalog> = OnceLock::new();

/// Read access to products and categories
///
/// Only `list_all` and `categories` are required; every lookup is derived
/// from them.
pub trait CatalogProvider {
    fn list_all(&self) -> &[Product];

    fn categories(&self) -> &[Category];

    fn by_id(&self, id: i32) -> Option<&Product> {
        self.list_all().iter().find(|p| p.id == id)
    }

    /// Look up a product from a raw route parameter
    ///
    /// Malformed and unknown ids both give `None`; the view renders that as
    /// "Product Not Found".
    fn by_id_param(&self, raw: &str) -> Option<&Product> {
        let id = raw.trim().parse::<i32>().ok()?;
        self.by_id(id)
    }

    /// Up to `count` other products, same category first, then the rest
    fn related(&self, id: i32, count: usize) -> Vec<&Product> {
        let all = self.list_all();
        let Some(anchor) = self.by_id(id) else {
            return all.iter().take(count).collect();
        };

        let same = all
            .iter()
            .filter(|p| p.id != id && p.category == anchor.category);
        let rest = all
            .iter()
            .filter(|p| p.id != id && p.category != anchor.category);

        same.chain(rest).take(count).collect()
    }

    fn featured(&self) -> Vec<&Product> {
        self.list_all().iter().filter(|p| p.featured).collect()
    }

    fn bestsellers(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.list_all().iter().collect();
        products.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
        products
    }

    fn new_arrivals(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.list_all().iter().collect();
        products.sort_by(|a, b| b.added_on.cmp(&a.added_on));
        products
    }

    fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == id)
    }

    fn category_for_product(&self, product: &Product) -> Option<&Category> {
        self.categories().iter().find(|c| c.name == product.category)
    }
}

/// In-memory catalog
#[derive(Clone, Debug, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// On-disk shape accepted by `StaticCatalog::from_json`
#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl StaticCatalog {
    /// The catalog compiled into the binary
    pub fn bundled() -> Self {
        StaticCatalog {
            products: ProductsTable::rows(),
            categories: CategoriesTable::rows(),
        }
    }

    /// Build from explicit records after validating them
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        validate(&products, &categories)?;
        Ok(StaticCatalog {
            products,
            categories,
        })
    }

    /// Parse `{"categories": [...], "products": [...]}`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        StaticCatalog::new(file.products, file.categories)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        StaticCatalog::from_json(&json)
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_all(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

fn validate(products: &[Product], categories: &[Category]) -> Result<(), CatalogError> {
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }

    let names: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let mut seen: HashSet<i32> = HashSet::new();

    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
        if !names.contains(product.category.as_str()) {
            return Err(CatalogError::UnknownCategory {
                id: product.id,
                category: product.category.clone(),
            });
        }
        if product.price < Decimal::ZERO {
            return Err(CatalogError::InvalidField {
                id: product.id,
                field: "price",
                reason: format!("{} is negative", product.price),
            });
        }
        if product.rating < Decimal::ZERO || product.rating > Decimal::from(5) {
            return Err(CatalogError::InvalidField {
                id: product.id,
                field: "rating",
                reason: format!("{} is outside 0-5", product.rating),
            });
        }
    }

    Ok(())
}

/// Install the process-wide catalog. The first call wins.
pub fn init_catalog(catalog: StaticCatalog) {
    let count = catalog.products.len();
    if CATALOG.set(catalog).is_err() {
        tracing::warn!("Catalog already initialized, keeping the existing one");
    } else {
        tracing::info!(products = count, "Catalog initialized");
    }
}

/// The process-wide catalog, falling back to the bundled one
pub fn catalog() -> &'static StaticCatalog {
    CATALOG.get_or_init(StaticCatalog::bundled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_validates() {
        let bundled = StaticCatalog::bundled();
        assert!(StaticCatalog::new(bundled.products.clone(), bundled.categories.clone()).is_ok());
    }

    #[test]
    fn test_by_id_param() {
        let catalog = StaticCatalog::bundled();
        assert_eq!(catalog.by_id_param("7").map(|p| p.name.as_str()), Some("Bed Frame"));
        assert!(catalog.by_id_param("999").is_none());
        assert!(catalog.by_id_param("seven").is_none());
        assert!(catalog.by_id_param("").is_none());
    }

    #[test]
    fn test_related_prefers_same_category() {
        let catalog = StaticCatalog::bundled();
        let related = catalog.related(7, 4);
        let ids: Vec<i32> = related.iter().map(|p| p.id).collect();
        // Other bedroom pieces first, then catalog order
        assert_eq!(ids, vec![8, 11, 20, 1]);
    }

    #[test]
    fn test_related_unknown_id_falls_back_to_catalog_head() {
        let catalog = StaticCatalog::bundled();
        let ids: Vec<i32> = catalog.related(404, 2).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_category_lookups() {
        let catalog = StaticCatalog::bundled();
        assert_eq!(catalog.category_by_id("office").map(|c| c.name.as_str()), Some("Office"));
        let lamp = catalog.by_id(3).unwrap();
        assert_eq!(catalog.category_for_product(lamp).map(|c| c.id.as_str()), Some("lighting"));
    }

    #[test]
    fn test_global_catalog_defaults_to_bundled() {
        assert!(!catalog().list_all().is_empty());
    }
}
