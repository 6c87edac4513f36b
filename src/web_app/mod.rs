// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - error.rs, config.rs: Error enums and store configuration
// - bootstrap.rs: Config and catalog serialized into the page for hydration
// - api/: Catalog provider, filter/sort engine and cart (plain Rust)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod error;

pub mod config;

pub mod api;

pub mod bootstrap;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
