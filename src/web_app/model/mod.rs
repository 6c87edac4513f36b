// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application: the catalog engine,
// the cart, and the Leptos views all speak in these types.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::web_app::error::{ModelError, ParseSortOptionError};

pub mod account;

pub use account::*;

/// Image shown when a record carries no image reference
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Upper bound of the catalog price slider
pub const PRICE_SLIDER_MAX: i64 = 5000;

/// Slider step used by the price range control
pub const PRICE_SLIDER_STEP: i64 = 100;

/// Stock at or below this count is reported as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Product record from the static catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Display name of one of the fixed categories
    pub category: String,
    pub price: Decimal,
    /// Previous price, shown struck through when higher than `price`
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
    pub style: String,
    pub material: String,
    /// Primary colour, used by the colour filter
    pub color: String,
    /// Colours selectable on the detail page; the first is preselected
    #[serde(default)]
    pub colors: Vec<String>,
    pub rating: Decimal,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Date the product entered the catalog; drives "newest"
    #[serde(default)]
    pub added_on: NaiveDate,
    /// Shown on the home page featured shelf
    #[serde(default)]
    pub featured: bool,
    /// Drives the bestseller ranking
    #[serde(default)]
    pub units_sold: u32,
}

impl Product {
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        StockStatus::from_stock(self.stock, low_stock_threshold)
    }

    /// Amount saved against the compare-at price, if it is a real discount
    pub fn savings(&self) -> Option<Decimal> {
        self.compare_at_price
            .filter(|was| *was > self.price)
            .map(|was| was - self.price)
    }

    /// Colour preselected on the detail page
    pub fn default_color(&self) -> &str {
        self.colors
            .first()
            .map(String::as_str)
            .unwrap_or(self.color.as_str())
    }
}

/// Field accessors shared by everything the listing engine can filter
///
/// The customer catalog and the admin inventory table both go through
/// `api::queries::filter_and_sort`, which only sees records through this trait.
pub trait Listing {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> Decimal;
    fn style(&self) -> &str;
    fn material(&self) -> &str;
    fn color(&self) -> &str;
    fn rating(&self) -> Decimal;
    fn review_count(&self) -> u32;
    fn added_on(&self) -> NaiveDate;
}

impl Listing for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> Decimal {
        self.price
    }

    fn style(&self) -> &str {
        &self.style
    }

    fn material(&self) -> &str {
        &self.material
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn rating(&self) -> Decimal {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn added_on(&self) -> NaiveDate {
        self.added_on
    }
}

/// One of the fixed store categories
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL slug, e.g. `living-room`
    pub id: String,
    /// Display name, matched against `Product::category`
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Category {
    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Inventory state derived from the stock count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Active,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn from_stock(stock: u32, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::Active
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Active => write!(f, "Active"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

/// Inclusive price bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange {
            min: Decimal::ZERO,
            max: Decimal::from(PRICE_SLIDER_MAX),
        }
    }
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, ModelError> {
        if min > max {
            return Err(ModelError::InvertedPriceRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(PriceRange { min, max })
    }

    /// Build a range from raw control values: order them and clamp into `[0, ceiling]`
    pub fn clamped(a: Decimal, b: Decimal, ceiling: Decimal) -> Self {
        let ceiling = ceiling.max(Decimal::ZERO);
        let clamp = |v: Decimal| v.max(Decimal::ZERO).min(ceiling);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        PriceRange {
            min: clamp(lo),
            max: clamp(hi),
        }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Result ordering for catalog views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    /// Catalog order
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Newest,
        SortOption::RatingDesc,
    ];

    /// Value used in select controls and query strings
    pub fn as_slug(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-low",
            SortOption::PriceDesc => "price-high",
            SortOption::Newest => "newest",
            SortOption::RatingDesc => "rating",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Featured => write!(f, "Featured"),
            SortOption::PriceAsc => write!(f, "Price: Low to High"),
            SortOption::PriceDesc => write!(f, "Price: High to Low"),
            SortOption::Newest => write!(f, "Newest Arrivals"),
            SortOption::RatingDesc => write!(f, "Highest Rated"),
        }
    }
}

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.as_slug() == s)
            .ok_or_else(|| ParseSortOptionError(s.to_string()))
    }
}

/// User-selected filter and sort parameters for one catalog view
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected category id (slug)
    pub category: Option<String>,
    pub price: PriceRange,
    /// Empty set means no restriction
    pub styles: BTreeSet<String>,
    pub materials: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub query: Option<String>,
    pub sort_by: SortOption,
}

impl FilterCriteria {
    /// Page-load defaults, with the category taken from the navigation context
    pub fn for_category(category: Option<String>) -> Self {
        FilterCriteria {
            category,
            ..Default::default()
        }
    }

    /// Selecting the already-selected category clears it
    pub fn select_category(&mut self, id: &str) {
        if self.category.as_deref() == Some(id) {
            self.category = None;
        } else {
            self.category = Some(id.to_string());
        }
    }

    pub fn toggle_style(&mut self, style: &str) {
        toggle(&mut self.styles, style);
    }

    pub fn toggle_material(&mut self, material: &str) {
        toggle(&mut self.materials, material);
    }

    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.colors, color);
    }

    /// Back to defaults; the category is cleared too
    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    /// True when no dimension restricts the catalog
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none()
            && self.price == PriceRange::default()
            && self.styles.is_empty()
            && self.materials.is_empty()
            && self.colors.is_empty()
            && self.query.as_deref().map_or(true, |q| q.trim().is_empty())
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Facet option with the number of catalog records carrying it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Grid or list presentation of catalog results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Cart line: a product snapshot plus the chosen colour and quantity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i32,
    pub name: String,
    pub price: Decimal,
    pub color: String,
    /// Never below 1
    pub quantity: u32,
    pub image: String,
}

impl CartItem {
    pub fn from_product(product: &Product, color: &str, quantity: u32) -> Self {
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            color: color.to_string(),
            quantity: quantity.max(1),
            image: product.primary_image().to_string(),
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub fn is_line(&self, product_id: i32, color: &str) -> bool {
        self.product_id == product_id && self.color == color
    }
}

/// Order summary figures
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Money as shown in the store: `$1,299.00`
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Full, half and empty stars for a 0-5 rating
pub fn star_counts(rating: Decimal) -> (usize, bool, usize) {
    let rating = rating.max(Decimal::ZERO).min(Decimal::from(5));
    let whole = rating.floor();
    let full = whole.to_usize().unwrap_or(0);
    let has_half = rating - whole >= Decimal::new(5, 1);
    let empty = 5 - full - usize::from(has_half);
    (full, has_half, empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 7,
            name: "Nightstand".to_string(),
            category: "Bedroom".to_string(),
            price: Decimal::from(249),
            compare_at_price: Some(Decimal::from(299)),
            style: "Modern".to_string(),
            material: "Wood".to_string(),
            color: "Walnut".to_string(),
            colors: vec!["Walnut".to_string(), "White".to_string()],
            rating: Decimal::new(44, 1),
            review_count: 31,
            stock: 0,
            images: vec![],
            description: String::new(),
            features: vec![],
            specifications: BTreeMap::new(),
            added_on: NaiveDate::default(),
            featured: false,
            units_sold: 0,
        }
    }

    #[test]
    fn test_sort_option_default() {
        assert_eq!(SortOption::default(), SortOption::Featured);
    }

    #[test]
    fn test_sort_option_display() {
        assert_eq!(SortOption::Featured.to_string(), "Featured");
        assert_eq!(SortOption::PriceAsc.to_string(), "Price: Low to High");
        assert_eq!(SortOption::PriceDesc.to_string(), "Price: High to Low");
        assert_eq!(SortOption::Newest.to_string(), "Newest Arrivals");
        assert_eq!(SortOption::RatingDesc.to_string(), "Highest Rated");
    }

    #[test]
    fn test_sort_option_slug_parse() {
        for opt in SortOption::ALL {
            assert_eq!(opt.as_slug().parse::<SortOption>(), Ok(opt));
        }
        let err = "cheapest".parse::<SortOption>().unwrap_err();
        assert_eq!(err, ParseSortOptionError("cheapest".to_string()));
    }

    #[test]
    fn test_price_range_default_is_slider_span() {
        let range = PriceRange::default();
        assert_eq!(range.min, Decimal::ZERO);
        assert_eq!(range.max, Decimal::from(5000));
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let range = PriceRange::new(Decimal::from(100), Decimal::from(500)).unwrap();
        assert!(range.contains(Decimal::from(100)));
        assert!(range.contains(Decimal::from(500)));
        assert!(!range.contains(Decimal::new(9999, 2)));
        assert!(!range.contains(Decimal::new(50001, 2)));
    }

    #[test]
    fn test_price_range_rejects_inverted() {
        let result = PriceRange::new(Decimal::from(500), Decimal::from(100));
        assert!(matches!(result, Err(ModelError::InvertedPriceRange { .. })));
    }

    #[test]
    fn test_price_range_clamped_orders_and_clamps() {
        let ceiling = Decimal::from(5000);
        let range = PriceRange::clamped(Decimal::from(7000), Decimal::from(-20), ceiling);
        assert_eq!(range.min, Decimal::ZERO);
        assert_eq!(range.max, ceiling);

        let range = PriceRange::clamped(Decimal::from(300), Decimal::from(200), ceiling);
        assert_eq!(range.min, Decimal::from(200));
        assert_eq!(range.max, Decimal::from(300));
    }

    #[test]
    fn test_filter_criteria_default() {
        let criteria = FilterCriteria::default();
        assert!(criteria.category.is_none());
        assert!(criteria.styles.is_empty());
        assert!(criteria.materials.is_empty());
        assert!(criteria.colors.is_empty());
        assert_eq!(criteria.sort_by, SortOption::Featured);
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_style("Modern");
        criteria.toggle_material("Oak");
        criteria.toggle_color("Gray");
        assert!(criteria.styles.contains("Modern"));
        assert!(!criteria.is_unfiltered());

        criteria.toggle_style("Modern");
        assert!(criteria.styles.is_empty());
        assert_eq!(criteria.materials.len(), 1);
        assert_eq!(criteria.colors.len(), 1);
    }

    #[test]
    fn test_select_category_toggles_off() {
        let mut criteria = FilterCriteria::for_category(Some("bedroom".to_string()));
        criteria.select_category("bedroom");
        assert!(criteria.category.is_none());
        criteria.select_category("office");
        assert_eq!(criteria.category.as_deref(), Some("office"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut criteria = FilterCriteria::for_category(Some("office".to_string()));
        criteria.toggle_color("Black");
        criteria.query = Some("desk".to_string());
        criteria.sort_by = SortOption::PriceDesc;
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_whitespace_query_counts_as_unfiltered() {
        let criteria = FilterCriteria {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::from_stock(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(8, 5), StockStatus::Active);
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
    }

    #[test]
    fn test_product_derived_fields() {
        let product = sample_product();
        assert_eq!(product.primary_image(), PLACEHOLDER_IMAGE);
        assert_eq!(product.savings(), Some(Decimal::from(50)));
        assert_eq!(product.default_color(), "Walnut");
        assert_eq!(product.stock_status(LOW_STOCK_THRESHOLD), StockStatus::OutOfStock);
    }

    #[test]
    fn test_savings_ignores_lower_compare_at() {
        let mut product = sample_product();
        product.compare_at_price = Some(Decimal::from(199));
        assert_eq!(product.savings(), None);
    }

    #[test]
    fn test_cart_item_from_product_floors_quantity() {
        let product = sample_product();
        let item = CartItem::from_product(&product, "White", 0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total(), Decimal::from(249));
        assert!(item.is_line(7, "White"));
        assert!(!item.is_line(7, "Walnut"));
    }

    #[test]
    fn test_product_serialization() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, product);
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(Decimal::from(1299)), "$1,299.00");
        assert_eq!(format_price(Decimal::new(15816, 2)), "$158.16");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
        assert_eq!(format_price(Decimal::new(1234567, 0)), "$1,234,567.00");
        assert_eq!(format_price(Decimal::new(-5, 0)), "-$5.00");
    }

    #[test]
    fn test_star_counts() {
        assert_eq!(star_counts(Decimal::new(45, 1)), (4, true, 0));
        assert_eq!(star_counts(Decimal::new(44, 1)), (4, false, 1));
        assert_eq!(star_counts(Decimal::from(5)), (5, false, 0));
        assert_eq!(star_counts(Decimal::ZERO), (0, false, 5));
        assert_eq!(star_counts(Decimal::new(5, 1)), (0, true, 4));
    }
}
