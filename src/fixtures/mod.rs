// fixtures/mod.rs - Static seed data for the storefront
//
// The store has no persistence layer. Every record the views show comes
// from the tables in this module, which build the bundled catalog once at
// start-up (see `web_app::api::catalog::StaticCatalog::bundled`).
//
// Each table is a zero-sized type implementing `SeedTable`, so tests and
// the catalog provider can ask for rows without caring where they live.

pub mod tables;

/// A static table of seed rows
pub trait SeedTable {
    type Row;

    /// All rows, in table order. Table order is catalog order.
    fn rows() -> Vec<Self::Row>;
}
