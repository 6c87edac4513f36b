// fixtures/tables/cart.rs
//
// Lines the cart page starts with. Each row points at a product id in
// `ProductsTable`; the cart snapshots name, price and image from the catalog.

use crate::fixtures::SeedTable;

/// A seeded cart line: product id, selected colour, quantity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartSeed {
    pub product_id: i32,
    pub color: &'static str,
    pub quantity: u32,
}

pub struct DemoCartTable;

impl SeedTable for DemoCartTable {
    type Row = CartSeed;

    fn rows() -> Vec<CartSeed> {
        vec![
            CartSeed { product_id: 1, color: "Gray", quantity: 1 },
            CartSeed { product_id: 2, color: "Natural", quantity: 1 },
            CartSeed { product_id: 3, color: "Black", quantity: 1 },
        ]
    }
}
