// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - HomePage: hero, category grid and product shelves
// - CatalogPage: filterable product listing
// - ProductPage: product detail with related products
// - CartPage: cart lines and order summary
// - AccountPage: profile, orders and wishlist of the demo customer
// - admin/: AdminLayout sidebar with dashboard, inventory, users and settings

pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod home;
pub mod product;

// Re-export page components
pub use account::AccountPage;
pub use admin::{AdminDashboardPage, AdminLayout, AdminProductsPage, AdminSettingsPage, AdminUsersPage};
pub use cart::CartPage;
pub use catalog::CatalogPage;
pub use home::HomePage;
pub use product::ProductPage;

use leptos::prelude::use_context;

use crate::web_app::config::StoreConfig;

/// Store configuration provided by the root component, or the defaults
pub fn use_store_config() -> StoreConfig {
    use_context::<StoreConfig>().unwrap_or_default()
}
