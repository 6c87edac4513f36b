// fixtures/tables/categories.rs
//
// The fixed category set. Ids are URL slugs (`/products?category=<id>`),
// names are what `Product::category` holds.

use crate::fixtures::SeedTable;
use crate::web_app::model::Category;

const CATEGORIES: &[(&str, &str)] = &[
    ("living-room", "Living Room"),
    ("bedroom", "Bedroom"),
    ("dining-room", "Dining Room"),
    ("office", "Office"),
    ("kitchen", "Kitchen"),
    ("outdoor", "Outdoor"),
    ("lighting", "Lighting"),
];

pub struct CategoriesTable;

impl SeedTable for CategoriesTable {
    type Row = Category;

    fn rows() -> Vec<Category> {
        CATEGORIES
            .iter()
            .map(|(id, name)| Category {
                id: (*id).to_string(),
                name: (*name).to_string(),
                image: Some(format!("/images/categories/{id}.webp")),
            })
            .collect()
    }
}
