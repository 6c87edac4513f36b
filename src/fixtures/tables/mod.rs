// fixtures/tables/mod.rs
//
// Seed tables for the bundled store: categories, products, the lines the
// cart page starts with, and the accounts behind the dashboard pages.

pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;
pub mod users;

pub use cart::DemoCartTable;
pub use categories::CategoriesTable;
pub use orders::{OrdersTable, WishlistTable};
pub use products::ProductsTable;
pub use users::UsersTable;
