// common/mod.rs - Shared test utilities
//
// A small builder for hand-made products, plus helpers to build catalogs
// from them. Integration suites use these when the bundled catalog is too
// large to reason about.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use storefront::web_app::model::{Category, Product};

/// The seven store categories, ids and display names
pub fn store_categories() -> Vec<Category> {
    [
        ("living-room", "Living Room"),
        ("bedroom", "Bedroom"),
        ("dining-room", "Dining Room"),
        ("office", "Office"),
        ("kitchen", "Kitchen"),
        ("outdoor", "Outdoor"),
        ("lighting", "Lighting"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
        image: None,
    })
    .collect()
}

/// Builder for test products with sensible defaults
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: i32) -> Self {
        ProductBuilder {
            product: Product {
                id,
                name: format!("Product {}", id),
                category: "Living Room".to_string(),
                price: Decimal::from(100),
                compare_at_price: None,
                style: "Modern".to_string(),
                material: "Wood".to_string(),
                color: "Natural".to_string(),
                colors: vec![],
                rating: Decimal::from(4),
                review_count: 10,
                stock: 10,
                images: vec![],
                description: String::new(),
                features: vec![],
                specifications: BTreeMap::new(),
                added_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                featured: false,
                units_sold: 0,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.product.name = name.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.product.category = category.to_string();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.product.price = Decimal::from(price);
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.product.style = style.to_string();
        self
    }

    pub fn material(mut self, material: &str) -> Self {
        self.product.material = material.to_string();
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.product.color = color.to_string();
        self
    }

    /// Rating in tenths of a star, e.g. 45 for 4.5
    pub fn rating(mut self, tenths: i64, review_count: u32) -> Self {
        self.product.rating = Decimal::new(tenths, 1);
        self.product.review_count = review_count;
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.product.stock = stock;
        self
    }

    pub fn added_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.product.added_on = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

/// Ten products alternating Living Room / Bedroom
pub fn two_room_catalog() -> Vec<Product> {
    (1..=10)
        .map(|id| {
            let category = if id % 2 == 0 { "Bedroom" } else { "Living Room" };
            ProductBuilder::new(id).category(category).price(100 * id as i64).build()
        })
        .collect()
}

pub fn ids(products: &[&Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}
