// web_app/api/mod.rs - Store logic behind the views
//
// Plain Rust with no Leptos dependency: the catalog provider, the
// filter/sort engine, the cart, accounts and the back-office summaries.
// Compiled for server, client and tests.

pub mod accounts;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod queries;
