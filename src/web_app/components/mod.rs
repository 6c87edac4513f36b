// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Badge, StarRating, etc.)
// - filters.rs: Catalog filter controls (SearchBar, FilterPanel, etc.)
// - product.rs: Product display components (ProductCard, ProductDetail)
// - cart.rs: Cart lines and order summary
// - nav.rs: Site navigation

pub mod cart;
pub mod common;
pub mod filters;
pub mod nav;
pub mod product;

// Re-export commonly used components for convenience
pub use cart::*;
pub use common::*;
pub use filters::*;
pub use nav::*;
pub use product::*;
