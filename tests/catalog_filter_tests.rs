// tests/catalog_filter_tests.rs - Filter/sort engine behaviour
//
// Scenario tests on small hand-built catalogs, plus proptest properties that
// must hold for any catalog and any criteria.

mod common;

use std::collections::BTreeSet;

use common::{ids, store_categories, two_room_catalog, ProductBuilder};
use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront::web_app::api::queries::filter_and_sort;
use storefront::web_app::model::{FilterCriteria, PriceRange, Product, SortOption};

const STYLES: [&str; 4] = ["Modern", "Scandinavian", "Industrial", "Traditional"];
const MATERIALS: [&str; 3] = ["Wood", "Metal", "Fabric"];
const COLORS: [&str; 4] = ["Gray", "Black", "White", "Natural"];
const CATEGORY_NAMES: [&str; 3] = ["Living Room", "Bedroom", "Office"];
const CATEGORY_IDS: [&str; 4] = ["living-room", "bedroom", "office", "garage"];
const NAMES: [&str; 5] = ["Oak Table", "Velvet Sofa", "Desk Lamp", "Oak Bookshelf", "Lamp Table"];
// Name fragments in mixed case, plus padding and one that never matches
const QUERIES: [&str; 7] = ["oak", "SOFA", " lamp ", "Table", "shelf", "k t", "walnut"];

#[test]
fn test_select_bedroom_returns_bedroom_products_in_catalog_order() {
    let catalog = two_room_catalog();
    let criteria = FilterCriteria::for_category(Some("bedroom".to_string()));

    let results = filter_and_sort(&catalog, &store_categories(), &criteria);

    assert_eq!(ids(&results), vec![2, 4, 6, 8, 10]);
    assert!(results.iter().all(|p| p.category == "Bedroom"));
}

#[test]
fn test_unknown_category_imposes_no_restriction() {
    let catalog = two_room_catalog();
    let criteria = FilterCriteria::for_category(Some("no-such-room".to_string()));

    let results = filter_and_sort(&catalog, &store_categories(), &criteria);

    assert_eq!(results.len(), catalog.len());
}

#[test]
fn test_empty_criteria_returns_whole_catalog_in_order() {
    let catalog = two_room_catalog();
    let results = filter_and_sort(&catalog, &store_categories(), &FilterCriteria::default());
    assert_eq!(ids(&results), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_empty_catalog() {
    let catalog: Vec<Product> = vec![];
    let results = filter_and_sort(&catalog, &store_categories(), &FilterCriteria::default());
    assert!(results.is_empty());
}

#[test]
fn test_price_bounds_are_inclusive() {
    let catalog = two_room_catalog();
    let criteria = FilterCriteria {
        price: PriceRange::new(Decimal::from(300), Decimal::from(500)).unwrap(),
        ..Default::default()
    };
    let results = filter_and_sort(&catalog, &store_categories(), &criteria);
    assert_eq!(ids(&results), vec![3, 4, 5]);
}

#[test]
fn test_values_within_a_dimension_are_ored() {
    let catalog = vec![
        ProductBuilder::new(1).style("Modern").build(),
        ProductBuilder::new(2).style("Industrial").build(),
        ProductBuilder::new(3).style("Traditional").build(),
    ];
    let mut criteria = FilterCriteria::default();
    criteria.toggle_style("Modern");
    criteria.toggle_style("Traditional");

    let results = filter_and_sort(&catalog, &store_categories(), &criteria);
    assert_eq!(ids(&results), vec![1, 3]);
}

#[test]
fn test_dimensions_are_anded() {
    let catalog = vec![
        ProductBuilder::new(1).style("Modern").material("Metal").build(),
        ProductBuilder::new(2).style("Modern").material("Wood").build(),
        ProductBuilder::new(3).style("Industrial").material("Metal").build(),
    ];
    let mut criteria = FilterCriteria::default();
    criteria.toggle_style("Modern");
    criteria.toggle_material("Metal");

    let results = filter_and_sort(&catalog, &store_categories(), &criteria);
    assert_eq!(ids(&results), vec![1]);
}

#[test]
fn test_rating_sort_breaks_ties_by_review_count() {
    let catalog = vec![
        ProductBuilder::new(1).rating(45, 10).build(),
        ProductBuilder::new(2).rating(48, 5).build(),
        ProductBuilder::new(3).rating(45, 90).build(),
        ProductBuilder::new(4).rating(45, 10).build(),
    ];
    let criteria = FilterCriteria {
        sort_by: SortOption::RatingDesc,
        ..Default::default()
    };
    let results = filter_and_sort(&catalog, &store_categories(), &criteria);
    // 1 and 4 tie on both keys and keep catalog order
    assert_eq!(ids(&results), vec![2, 3, 1, 4]);
}

#[test]
fn test_newest_sort_orders_by_added_on() {
    let catalog = vec![
        ProductBuilder::new(1).added_on(2023, 5, 1).build(),
        ProductBuilder::new(2).added_on(2024, 8, 9).build(),
        ProductBuilder::new(3).added_on(2022, 1, 30).build(),
    ];
    let criteria = FilterCriteria {
        sort_by: SortOption::Newest,
        ..Default::default()
    };
    let results = filter_and_sort(&catalog, &store_categories(), &criteria);
    assert_eq!(ids(&results), vec![2, 1, 3]);
}

#[test]
fn test_blank_query_is_ignored() {
    let catalog = two_room_catalog();
    let criteria = FilterCriteria {
        query: Some("   ".to_string()),
        ..Default::default()
    };
    let results = filter_and_sort(&catalog, &store_categories(), &criteria);
    assert_eq!(results.len(), catalog.len());
}

// Property-based tests

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(
        (
            (0..NAMES.len(), 0..3usize, 0..=5000i64),
            (0..4usize, 0..3usize, 0..4usize, 0..=50i64, 0..200u32),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, ((name, cat, price), (style, material, color, rating, reviews)))| {
                ProductBuilder::new(i as i32 + 1)
                    .name(NAMES[name])
                    .category(CATEGORY_NAMES[cat])
                    .price(price)
                    .style(STYLES[style])
                    .material(MATERIALS[material])
                    .color(COLORS[color])
                    .rating(rating, reviews)
                    .build()
            })
            .collect()
    })
}

fn arb_subset(values: &'static [&'static str]) -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::vec(prop::sample::select(values), 0..=values.len())
        .prop_map(|picked| picked.into_iter().map(str::to_string).collect())
}

fn arb_sort() -> impl Strategy<Value = SortOption> {
    prop::sample::select(SortOption::ALL.to_vec())
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(CATEGORY_IDS.to_vec())),
        0..=5000i64,
        0..=5000i64,
        arb_subset(&STYLES),
        arb_subset(&MATERIALS),
        arb_subset(&COLORS),
        arb_sort(),
        prop::option::of(prop::sample::select(QUERIES.to_vec())),
    )
        .prop_map(|(category, a, b, styles, materials, colors, sort_by, query)| FilterCriteria {
            category: category.map(str::to_string),
            price: PriceRange::clamped(Decimal::from(a), Decimal::from(b), Decimal::from(5000)),
            styles,
            materials,
            colors,
            query: query.map(str::to_string),
            sort_by,
        })
}

fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    let category_ok = match criteria.category.as_deref() {
        Some("living-room") => product.category == "Living Room",
        Some("bedroom") => product.category == "Bedroom",
        Some("office") => product.category == "Office",
        _ => true,
    };
    let in_set = |set: &BTreeSet<String>, value: &str| set.is_empty() || set.contains(value);
    let name_ok = match criteria.query.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => product.name.to_lowercase().contains(&q.to_lowercase()),
        _ => true,
    };

    category_ok
        && name_ok
        && criteria.price.contains(product.price)
        && in_set(&criteria.styles, &product.style)
        && in_set(&criteria.materials, &product.material)
        && in_set(&criteria.colors, &product.color)
}

proptest! {
    #[test]
    fn prop_results_are_exactly_the_matching_subset(catalog in arb_catalog(), criteria in arb_criteria()) {
        let results = filter_and_sort(&catalog, &store_categories(), &criteria);

        let result_ids: BTreeSet<i32> = results.iter().map(|p| p.id).collect();
        prop_assert_eq!(result_ids.len(), results.len(), "no duplicates");

        let expected: BTreeSet<i32> = catalog
            .iter()
            .filter(|p| matches(p, &criteria))
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(result_ids, expected);
    }

    #[test]
    fn prop_filtering_is_idempotent(catalog in arb_catalog(), criteria in arb_criteria()) {
        let first: Vec<Product> = filter_and_sort(&catalog, &store_categories(), &criteria)
            .into_iter()
            .cloned()
            .collect();
        let second = filter_and_sort(&first, &store_categories(), &criteria);

        let first_ids: Vec<i32> = first.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids(&second), first_ids);
    }

    #[test]
    fn prop_query_matches_names_case_insensitively(catalog in arb_catalog(), criteria in arb_criteria()) {
        prop_assume!(criteria.query.is_some());
        let needle = criteria.query.as_deref().unwrap_or_default().trim().to_lowercase();
        let results = filter_and_sort(&catalog, &store_categories(), &criteria);
        for product in results {
            prop_assert!(product.name.to_lowercase().contains(&needle), "{} does not contain {:?}", product.name, needle);
        }
    }

    #[test]
    fn prop_selected_styles_are_respected(catalog in arb_catalog(), criteria in arb_criteria()) {
        prop_assume!(!criteria.styles.is_empty());
        let results = filter_and_sort(&catalog, &store_categories(), &criteria);
        for product in results {
            prop_assert!(criteria.styles.contains(&product.style));
        }
    }

    #[test]
    fn prop_prices_within_bounds(catalog in arb_catalog(), criteria in arb_criteria()) {
        let results = filter_and_sort(&catalog, &store_categories(), &criteria);
        for product in results {
            prop_assert!(criteria.price.min <= product.price && product.price <= criteria.price.max);
        }
    }

    #[test]
    fn prop_sorts_are_stable(catalog in arb_catalog(), sort_by in arb_sort()) {
        let criteria = FilterCriteria { sort_by, ..Default::default() };
        let results = filter_and_sort(&catalog, &store_categories(), &criteria);

        // Catalog ids ascend, so equal keys must keep ascending ids
        for pair in results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let tied = match sort_by {
                SortOption::Featured => true,
                SortOption::PriceAsc | SortOption::PriceDesc => a.price == b.price,
                SortOption::RatingDesc => a.rating == b.rating && a.review_count == b.review_count,
                SortOption::Newest => a.added_on == b.added_on,
            };
            if tied {
                prop_assert!(a.id < b.id, "{} before {} under {:?}", a.id, b.id, sort_by);
            }
        }
    }

    #[test]
    fn prop_price_sorts_are_ordered(catalog in arb_catalog()) {
        let asc = FilterCriteria { sort_by: SortOption::PriceAsc, ..Default::default() };
        let results = filter_and_sort(&catalog, &store_categories(), &asc);
        for pair in results.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
        }

        let desc = FilterCriteria { sort_by: SortOption::PriceDesc, ..Default::default() };
        let results = filter_and_sort(&catalog, &store_categories(), &desc);
        for pair in results.windows(2) {
            prop_assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn prop_empty_sets_place_no_restriction(catalog in arb_catalog()) {
        let results = filter_and_sort(&catalog, &store_categories(), &FilterCriteria::default());
        let all: Vec<i32> = catalog.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids(&results), all);
    }
}
