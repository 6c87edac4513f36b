// web_app/error.rs - Error types for the storefront library
//
// Catalog queries and cart math are total functions and never fail.
// The errors below come from the edges: parsing user-controlled strings,
// loading an alternative catalog file, and reading configuration.

use thiserror::Error;

/// Invalid values for model types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("price range is inverted: min {min} is greater than max {max}")]
    InvertedPriceRange { min: String, max: String },
}

/// Unknown sort key in a URL or select value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option '{0}'")]
pub struct ParseSortOptionError(pub String);

/// Problems loading a catalog from JSON
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog contains no products")]
    Empty,

    #[error("duplicate product id {0}")]
    DuplicateId(i32),

    #[error("product {id} references unknown category '{category}'")]
    UnknownCategory { id: i32, category: String },

    #[error("product {id} has invalid {field}: {reason}")]
    InvalidField {
        id: i32,
        field: &'static str,
        reason: String,
    },
}

/// Malformed environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}
