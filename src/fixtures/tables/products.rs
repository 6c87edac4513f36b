// fixtures/tables/products.rs
//
// The bundled furniture catalog. Rows are kept as `&'static` seed structs so
// the whole table lives in the binary; `ProductsTable::rows()` turns them into
// owned `Product` records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::fixtures::SeedTable;
use crate::web_app::model::Product;

/// Images generated per product
const IMAGES_PER_PRODUCT: usize = 3;

struct ProductSeed {
    id: i32,
    name: &'static str,
    category: &'static str,
    /// Price in cents
    price: i64,
    compare_at: Option<i64>,
    style: &'static str,
    material: &'static str,
    color: &'static str,
    colors: &'static [&'static str],
    /// Rating in tenths of a star
    rating: i64,
    reviews: u32,
    stock: u32,
    description: &'static str,
    features: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
    added_on: (i32, u32, u32),
    featured: bool,
    units_sold: u32,
}

impl ProductSeed {
    fn to_product(&self) -> Product {
        let (y, m, d) = self.added_on;
        Product {
            id: self.id,
            name: self.name.to_string(),
            category: self.category.to_string(),
            price: Decimal::new(self.price, 2),
            compare_at_price: self.compare_at.map(|cents| Decimal::new(cents, 2)),
            style: self.style.to_string(),
            material: self.material.to_string(),
            color: self.color.to_string(),
            colors: self.colors.iter().map(|c| (*c).to_string()).collect(),
            rating: Decimal::new(self.rating, 1),
            review_count: self.reviews,
            stock: self.stock,
            images: (1..=IMAGES_PER_PRODUCT)
                .map(|n| format!("/images/products/{}-{}.webp", self.id, n))
                .collect(),
            description: self.description.to_string(),
            features: self.features.iter().map(|f| (*f).to_string()).collect(),
            specifications: self
                .specifications
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<BTreeMap<_, _>>(),
            added_on: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            featured: self.featured,
            units_sold: self.units_sold,
        }
    }
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: 1,
        name: "Modern Sofa",
        category: "Living Room",
        price: 129900,
        compare_at: Some(149900),
        style: "Modern",
        material: "Fabric",
        color: "Gray",
        colors: &["Gray", "Beige", "Navy"],
        rating: 48,
        reviews: 124,
        stock: 15,
        description: "A deep-seated three-seater with clean lines and feather-wrapped cushions.",
        features: &["Removable, washable covers", "Kiln-dried hardwood frame", "No-sag spring base"],
        specifications: &[
            ("dimensions", "84\" W x 36\" D x 34\" H"),
            ("weight", "110 lbs"),
            ("assembly", "Legs attach, no tools required"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2024, 1, 15),
        featured: true,
        units_sold: 340,
    },
    ProductSeed {
        id: 2,
        name: "Coffee Table",
        category: "Living Room",
        price: 49900,
        compare_at: None,
        style: "Scandinavian",
        material: "Wood",
        color: "Natural",
        colors: &["Natural", "Walnut"],
        rating: 46,
        reviews: 89,
        stock: 23,
        description: "Solid ash top on tapered legs, with a lower shelf for books and trays.",
        features: &["Solid ash construction", "Lower storage shelf", "Rounded corners"],
        specifications: &[
            ("dimensions", "48\" W x 24\" D x 17\" H"),
            ("weight", "38 lbs"),
            ("assembly", "Required, about 15 minutes"),
            ("warranty", "2-year limited warranty"),
        ],
        added_on: (2024, 2, 3),
        featured: true,
        units_sold: 410,
    },
    ProductSeed {
        id: 3,
        name: "Floor Lamp",
        category: "Lighting",
        price: 17900,
        compare_at: Some(19900),
        style: "Industrial",
        material: "Metal",
        color: "Black",
        colors: &["Black", "Brass"],
        rating: 45,
        reviews: 67,
        stock: 25,
        description: "An arched steel floor lamp with a dimmable linen shade.",
        features: &["Foot dimmer switch", "Weighted marble base", "E26 bulb socket"],
        specifications: &[
            ("dimensions", "16\" W x 16\" D x 65\" H"),
            ("weight", "18 lbs"),
            ("assembly", "Shade and pole connect"),
            ("warranty", "1-year limited warranty"),
        ],
        added_on: (2024, 3, 10),
        featured: false,
        units_sold: 520,
    },
    ProductSeed {
        id: 4,
        name: "Dining Table",
        category: "Dining Room",
        price: 89900,
        compare_at: None,
        style: "Rustic",
        material: "Wood",
        color: "Oak",
        colors: &["Oak", "Walnut"],
        rating: 47,
        reviews: 56,
        stock: 8,
        description: "A farmhouse table in reclaimed oak that seats six comfortably.",
        features: &["Reclaimed oak top", "Trestle base", "Seats six"],
        specifications: &[
            ("dimensions", "72\" W x 38\" D x 30\" H"),
            ("weight", "120 lbs"),
            ("assembly", "Required, about 30 minutes"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2023, 11, 20),
        featured: true,
        units_sold: 150,
    },
    ProductSeed {
        id: 5,
        name: "Office Desk",
        category: "Office",
        price: 69900,
        compare_at: Some(79900),
        style: "Modern",
        material: "Wood",
        color: "Walnut",
        colors: &["Walnut", "White"],
        rating: 44,
        reviews: 48,
        stock: 12,
        description: "A writing desk with two soft-close drawers and a cable grommet.",
        features: &["Two soft-close drawers", "Rear cable grommet", "Walnut veneer"],
        specifications: &[
            ("dimensions", "55\" W x 26\" D x 30\" H"),
            ("weight", "70 lbs"),
            ("assembly", "Required, about 40 minutes"),
            ("warranty", "3-year limited warranty"),
        ],
        added_on: (2024, 4, 18),
        featured: false,
        units_sold: 210,
    },
    ProductSeed {
        id: 6,
        name: "Bookshelf",
        category: "Living Room",
        price: 34900,
        compare_at: None,
        style: "Industrial",
        material: "Metal",
        color: "Black",
        colors: &["Black"],
        rating: 43,
        reviews: 41,
        stock: 18,
        description: "Five open shelves on a powder-coated steel frame.",
        features: &["Five shelves", "Wall anchor included", "Adjustable feet"],
        specifications: &[
            ("dimensions", "36\" W x 14\" D x 72\" H"),
            ("weight", "52 lbs"),
            ("assembly", "Required, about 25 minutes"),
            ("warranty", "2-year limited warranty"),
        ],
        added_on: (2023, 9, 5),
        featured: false,
        units_sold: 190,
    },
    ProductSeed {
        id: 7,
        name: "Bed Frame",
        category: "Bedroom",
        price: 89900,
        compare_at: Some(109900),
        style: "Mid-Century",
        material: "Wood",
        color: "Walnut",
        colors: &["Walnut", "Oak"],
        rating: 49,
        reviews: 102,
        stock: 5,
        description: "A queen platform bed with a slatted headboard and splayed legs.",
        features: &["No box spring needed", "Slatted headboard", "Center support legs"],
        specifications: &[
            ("dimensions", "64\" W x 86\" D x 40\" H"),
            ("weight", "95 lbs"),
            ("assembly", "Required, about 45 minutes"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2024, 5, 2),
        featured: true,
        units_sold: 275,
    },
    ProductSeed {
        id: 8,
        name: "Nightstand",
        category: "Bedroom",
        price: 24900,
        compare_at: None,
        style: "Mid-Century",
        material: "Wood",
        color: "Walnut",
        colors: &["Walnut", "White"],
        rating: 42,
        reviews: 37,
        stock: 0,
        description: "A single-drawer nightstand with an open cubby below.",
        features: &["Dovetail drawer", "Open cubby", "Matches the Bed Frame"],
        specifications: &[
            ("dimensions", "20\" W x 16\" D x 24\" H"),
            ("weight", "22 lbs"),
            ("assembly", "Legs attach"),
            ("warranty", "2-year limited warranty"),
        ],
        added_on: (2023, 12, 12),
        featured: false,
        units_sold: 160,
    },
    ProductSeed {
        id: 9,
        name: "Desk Chair",
        category: "Office",
        price: 29900,
        compare_at: None,
        style: "Modern",
        material: "Leather",
        color: "Black",
        colors: &["Black", "Brown"],
        rating: 45,
        reviews: 88,
        stock: 14,
        description: "A swivel task chair in top-grain leather with tilt lock.",
        features: &["Tilt lock", "Height adjustable", "Top-grain leather"],
        specifications: &[
            ("dimensions", "25\" W x 25\" D x 38\" H"),
            ("weight", "35 lbs"),
            ("assembly", "Required, about 10 minutes"),
            ("warranty", "3-year limited warranty"),
        ],
        added_on: (2024, 6, 21),
        featured: false,
        units_sold: 380,
    },
    ProductSeed {
        id: 10,
        name: "Accent Armchair",
        category: "Living Room",
        price: 59900,
        compare_at: None,
        style: "Mid-Century",
        material: "Fabric",
        color: "Green",
        colors: &["Green", "Mustard"],
        rating: 46,
        reviews: 54,
        stock: 9,
        description: "A wingback lounge chair in a soft boucle weave.",
        features: &["Boucle upholstery", "Solid beech legs", "High-resilience foam"],
        specifications: &[
            ("dimensions", "30\" W x 32\" D x 36\" H"),
            ("weight", "40 lbs"),
            ("assembly", "Legs attach"),
            ("warranty", "3-year limited warranty"),
        ],
        added_on: (2024, 7, 8),
        featured: true,
        units_sold: 140,
    },
    ProductSeed {
        id: 11,
        name: "Dresser",
        category: "Bedroom",
        price: 79900,
        compare_at: None,
        style: "Traditional",
        material: "Wood",
        color: "White",
        colors: &["White", "Gray"],
        rating: 44,
        reviews: 29,
        stock: 6,
        description: "A six-drawer double dresser with brushed nickel pulls.",
        features: &["Six drawers", "Anti-tip kit", "Felt-lined top drawers"],
        specifications: &[
            ("dimensions", "60\" W x 18\" D x 32\" H"),
            ("weight", "130 lbs"),
            ("assembly", "Fully assembled"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2023, 10, 30),
        featured: false,
        units_sold: 95,
    },
    ProductSeed {
        id: 12,
        name: "Pendant Light",
        category: "Lighting",
        price: 22900,
        compare_at: None,
        style: "Scandinavian",
        material: "Glass",
        color: "White",
        colors: &["White", "Smoke"],
        rating: 41,
        reviews: 22,
        stock: 30,
        description: "A hand-blown opal glass globe on an adjustable cord.",
        features: &["Hand-blown glass", "Adjustable cord", "Dimmable"],
        specifications: &[
            ("dimensions", "12\" diameter"),
            ("weight", "6 lbs"),
            ("assembly", "Hardwired installation"),
            ("warranty", "1-year limited warranty"),
        ],
        added_on: (2024, 8, 14),
        featured: false,
        units_sold: 130,
    },
    ProductSeed {
        id: 13,
        name: "Dining Chair Set",
        category: "Dining Room",
        price: 44900,
        compare_at: Some(52900),
        style: "Scandinavian",
        material: "Wood",
        color: "Natural",
        colors: &["Natural", "Black"],
        rating: 45,
        reviews: 63,
        stock: 11,
        description: "Two spindle-back chairs with woven paper-cord seats.",
        features: &["Set of two", "Paper-cord seats", "Solid beech frame"],
        specifications: &[
            ("dimensions", "19\" W x 21\" D x 31\" H"),
            ("weight", "24 lbs"),
            ("assembly", "Fully assembled"),
            ("warranty", "2-year limited warranty"),
        ],
        added_on: (2024, 2, 27),
        featured: false,
        units_sold: 230,
    },
    ProductSeed {
        id: 14,
        name: "Bar Stool",
        category: "Kitchen",
        price: 15900,
        compare_at: None,
        style: "Industrial",
        material: "Metal",
        color: "Black",
        colors: &["Black", "Copper"],
        rating: 40,
        reviews: 44,
        stock: 40,
        description: "A counter-height stool with a swivel seat and footrest.",
        features: &["360 degree swivel", "Footrest ring", "Floor protectors"],
        specifications: &[
            ("dimensions", "17\" W x 17\" D x 26\" H"),
            ("weight", "14 lbs"),
            ("assembly", "Required, about 10 minutes"),
            ("warranty", "1-year limited warranty"),
        ],
        added_on: (2023, 8, 18),
        featured: false,
        units_sold: 300,
    },
    ProductSeed {
        id: 15,
        name: "Kitchen Island",
        category: "Kitchen",
        price: 109900,
        compare_at: None,
        style: "Traditional",
        material: "Wood",
        color: "White",
        colors: &["White", "Oak"],
        rating: 46,
        reviews: 19,
        stock: 4,
        description: "A rolling island with a butcher-block top and two cabinets.",
        features: &["Butcher-block top", "Locking casters", "Towel bar"],
        specifications: &[
            ("dimensions", "50\" W x 26\" D x 36\" H"),
            ("weight", "150 lbs"),
            ("assembly", "Required, about 60 minutes"),
            ("warranty", "3-year limited warranty"),
        ],
        added_on: (2024, 9, 3),
        featured: false,
        units_sold: 45,
    },
    ProductSeed {
        id: 16,
        name: "Patio Lounge Set",
        category: "Outdoor",
        price: 189900,
        compare_at: Some(219900),
        style: "Modern",
        material: "Rattan",
        color: "Natural",
        colors: &["Natural", "Gray"],
        rating: 47,
        reviews: 33,
        stock: 7,
        description: "A four-piece all-weather wicker set with quick-dry cushions.",
        features: &["All-weather wicker", "Quick-dry cushions", "Powder-coated frame"],
        specifications: &[
            ("dimensions", "Sofa 78\" W x 32\" D x 30\" H"),
            ("weight", "160 lbs"),
            ("assembly", "Minimal"),
            ("warranty", "2-year limited warranty"),
        ],
        added_on: (2024, 4, 1),
        featured: true,
        units_sold: 60,
    },
    ProductSeed {
        id: 17,
        name: "Outdoor Dining Table",
        category: "Outdoor",
        price: 74900,
        compare_at: None,
        style: "Rustic",
        material: "Wood",
        color: "Teak",
        colors: &["Teak"],
        rating: 43,
        reviews: 21,
        stock: 10,
        description: "A grade-A teak table with an umbrella hole.",
        features: &["Grade-A teak", "Umbrella hole", "Weathers to silver"],
        specifications: &[
            ("dimensions", "70\" W x 36\" D x 30\" H"),
            ("weight", "85 lbs"),
            ("assembly", "Required, about 20 minutes"),
            ("warranty", "3-year limited warranty"),
        ],
        added_on: (2023, 7, 22),
        featured: false,
        units_sold: 70,
    },
    ProductSeed {
        id: 18,
        name: "Sectional Sofa",
        category: "Living Room",
        price: 249900,
        compare_at: None,
        style: "Modern",
        material: "Fabric",
        color: "Beige",
        colors: &["Beige", "Gray"],
        rating: 48,
        reviews: 76,
        stock: 3,
        description: "A reversible L-shaped sectional with a storage chaise.",
        features: &["Reversible chaise", "Storage under chaise", "Stain-resistant fabric"],
        specifications: &[
            ("dimensions", "110\" W x 65\" D x 34\" H"),
            ("weight", "190 lbs"),
            ("assembly", "Sections connect"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2024, 10, 5),
        featured: false,
        units_sold: 85,
    },
    ProductSeed {
        id: 19,
        name: "Table Lamp",
        category: "Lighting",
        price: 8900,
        compare_at: None,
        style: "Mid-Century",
        material: "Ceramic",
        color: "White",
        colors: &["White", "Blue"],
        rating: 42,
        reviews: 58,
        stock: 35,
        description: "A glazed ceramic lamp with a drum shade.",
        features: &["Glazed ceramic base", "Linen drum shade", "Inline switch"],
        specifications: &[
            ("dimensions", "14\" W x 14\" D x 24\" H"),
            ("weight", "7 lbs"),
            ("assembly", "Shade attaches"),
            ("warranty", "1-year limited warranty"),
        ],
        added_on: (2024, 1, 28),
        featured: false,
        units_sold: 450,
    },
    ProductSeed {
        id: 20,
        name: "Wardrobe",
        category: "Bedroom",
        price: 139900,
        compare_at: None,
        style: "Traditional",
        material: "Wood",
        color: "Oak",
        colors: &["Oak", "White"],
        rating: 45,
        reviews: 17,
        stock: 0,
        description: "A two-door wardrobe with a hanging rail and three drawers.",
        features: &["Hanging rail", "Three drawers", "Soft-close hinges"],
        specifications: &[
            ("dimensions", "40\" W x 22\" D x 76\" H"),
            ("weight", "200 lbs"),
            ("assembly", "Required, about 90 minutes"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2024, 6, 9),
        featured: false,
        units_sold: 40,
    },
    ProductSeed {
        id: 21,
        name: "Standing Desk",
        category: "Office",
        price: 84900,
        compare_at: None,
        style: "Industrial",
        material: "Metal",
        color: "Gray",
        colors: &["Gray", "Black"],
        rating: 46,
        reviews: 71,
        stock: 9,
        description: "A dual-motor sit-stand desk with four height presets.",
        features: &["Dual motors", "Four memory presets", "Anti-collision sensor"],
        specifications: &[
            ("dimensions", "60\" W x 30\" D x 25-50\" H"),
            ("weight", "95 lbs"),
            ("assembly", "Required, about 30 minutes"),
            ("warranty", "7-year limited warranty"),
        ],
        added_on: (2024, 11, 12),
        featured: false,
        units_sold: 180,
    },
    ProductSeed {
        id: 22,
        name: "TV Console",
        category: "Living Room",
        price: 64900,
        compare_at: None,
        style: "Scandinavian",
        material: "Wood",
        color: "Oak",
        colors: &["Oak", "White"],
        rating: 44,
        reviews: 38,
        stock: 13,
        description: "A low media console with slatted sliding doors.",
        features: &["Sliding slatted doors", "Cable management", "Holds TVs up to 75\""],
        specifications: &[
            ("dimensions", "70\" W x 16\" D x 22\" H"),
            ("weight", "80 lbs"),
            ("assembly", "Required, about 30 minutes"),
            ("warranty", "2-year limited warranty"),
        ],
        added_on: (2024, 3, 22),
        featured: false,
        units_sold: 120,
    },
    ProductSeed {
        id: 23,
        name: "Buffet Sideboard",
        category: "Dining Room",
        price: 114900,
        compare_at: None,
        style: "Mid-Century",
        material: "Wood",
        color: "Walnut",
        colors: &["Walnut"],
        rating: 47,
        reviews: 26,
        stock: 6,
        description: "A walnut sideboard with tambour doors and adjustable shelves.",
        features: &["Tambour doors", "Adjustable shelves", "Solid walnut legs"],
        specifications: &[
            ("dimensions", "66\" W x 18\" D x 30\" H"),
            ("weight", "110 lbs"),
            ("assembly", "Legs attach"),
            ("warranty", "5-year limited warranty"),
        ],
        added_on: (2024, 8, 30),
        featured: false,
        units_sold: 55,
    },
    ProductSeed {
        id: 24,
        name: "Hammock Chair",
        category: "Outdoor",
        price: 32900,
        compare_at: None,
        style: "Rustic",
        material: "Rattan",
        color: "Natural",
        colors: &["Natural"],
        rating: 39,
        reviews: 14,
        stock: 20,
        description: "A hanging rattan egg chair with a weatherproof cushion.",
        features: &["Hanging chain included", "Weatherproof cushion", "Holds 300 lbs"],
        specifications: &[
            ("dimensions", "38\" W x 26\" D x 50\" H"),
            ("weight", "30 lbs"),
            ("assembly", "Hang and go"),
            ("warranty", "1-year limited warranty"),
        ],
        added_on: (2024, 7, 19),
        featured: false,
        units_sold: 90,
    },
];

pub struct ProductsTable;

impl SeedTable for ProductsTable {
    type Row = Product;

    fn rows() -> Vec<Product> {
        PRODUCTS.iter().map(ProductSeed::to_product).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::tables::CategoriesTable;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_unique() {
        let rows = ProductsTable::rows();
        let ids: HashSet<i32> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_every_category_is_known() {
        let names: HashSet<String> = CategoriesTable::rows().into_iter().map(|c| c.name).collect();
        for product in ProductsTable::rows() {
            assert!(names.contains(&product.category), "{} has category {}", product.name, product.category);
        }
    }

    #[test]
    fn test_seed_values_are_in_range() {
        for product in ProductsTable::rows() {
            assert!(product.price >= Decimal::ZERO);
            assert!(product.price <= Decimal::from(5000), "{} exceeds slider span", product.name);
            assert!(product.rating >= Decimal::ZERO && product.rating <= Decimal::from(5));
            assert!(product.colors.contains(&product.color), "{} primary colour not selectable", product.name);
            assert_ne!(product.added_on, NaiveDate::default());
            assert_eq!(product.images.len(), IMAGES_PER_PRODUCT);
        }
    }

    #[test]
    fn test_cart_seed_prices() {
        let rows = ProductsTable::rows();
        let price_of = |id: i32| rows.iter().find(|p| p.id == id).map(|p| p.price);
        assert_eq!(price_of(1), Some(Decimal::from(1299)));
        assert_eq!(price_of(2), Some(Decimal::from(499)));
        assert_eq!(price_of(3), Some(Decimal::from(179)));
    }
}
