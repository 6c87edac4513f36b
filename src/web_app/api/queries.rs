// web_app/api/queries.rs - Catalog filter/sort engine
//
// One pure pipeline serves every listing in the store: the customer catalog
// page and the admin inventory table both call `filter_and_sort`, which sees
// records only through the `Listing` accessors.
//
// Philosophy: pure functions over borrowed slices. The catalog is never
// mutated; results borrow from it, so they are a subset by construction.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use crate::web_app::model::{Category, FacetCount, FilterCriteria, Listing, PriceRange, SortOption};

/// Filter `catalog` by `criteria` and order the survivors
///
/// Dimensions combine with AND; values inside a dimension with OR. An empty
/// style/material/colour set places no restriction on that dimension.
/// Sorting is stable, so ties keep catalog order.
pub fn filter_and_sort<'a, T: Listing>(
    catalog: &'a [T],
    categories: &[Category],
    criteria: &FilterCriteria,
) -> Vec<&'a T> {
    // Resolve id -> display name once, not per record
    let category_name = resolve_category(categories, criteria.category.as_deref());
    let needle = normalized_query(criteria.query.as_deref());

    let mut results: Vec<&T> = catalog
        .iter()
        .filter(|item| category_name.map_or(true, |name| item.category() == name))
        .filter(|item| criteria.price.contains(item.price()))
        .filter(|item| in_selection(&criteria.styles, item.style()))
        .filter(|item| in_selection(&criteria.materials, item.material()))
        .filter(|item| in_selection(&criteria.colors, item.color()))
        .filter(|item| {
            needle
                .as_deref()
                .map_or(true, |q| item.name().to_lowercase().contains(q))
        })
        .collect();

    sort_listing(&mut results, criteria.sort_by);

    tracing::debug!(
        total = catalog.len(),
        matched = results.len(),
        sort = %criteria.sort_by,
        "catalog filtered"
    );

    results
}

/// Order borrowed records in place. `Featured` keeps catalog order.
pub fn sort_listing<T: Listing>(items: &mut [&T], sort: SortOption) {
    match sort {
        SortOption::Featured => {}
        SortOption::PriceAsc => items.sort_by(|a, b| a.price().cmp(&b.price())),
        SortOption::PriceDesc => items.sort_by(|a, b| b.price().cmp(&a.price())),
        SortOption::RatingDesc => items.sort_by(|a, b| {
            b.rating()
                .cmp(&a.rating())
                .then_with(|| b.review_count().cmp(&a.review_count()))
        }),
        SortOption::Newest => items.sort_by(|a, b| b.added_on().cmp(&a.added_on())),
    }
}

fn resolve_category<'c>(categories: &'c [Category], id: Option<&str>) -> Option<&'c str> {
    let id = id?;
    match categories.iter().find(|c| c.id == id) {
        Some(category) => Some(category.name.as_str()),
        None => {
            tracing::warn!(category = id, "unknown category id, category filter not applied");
            None
        }
    }
}

fn normalized_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

fn in_selection(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Distinct values of one field, in first-appearance order, with counts
pub fn facet_counts<T, F>(catalog: &[T], field: F) -> Vec<FacetCount>
where
    F: Fn(&T) -> &str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut facets: Vec<FacetCount> = Vec::new();

    for item in catalog {
        let value = field(item);
        match index.get(value) {
            Some(&i) => facets[i].count += 1,
            None => {
                index.insert(value, facets.len());
                facets.push(FacetCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    facets
}

/// Product count per category, in category-table order
pub fn category_counts<'c, T: Listing>(
    catalog: &[T],
    categories: &'c [Category],
) -> Vec<(&'c Category, usize)> {
    categories
        .iter()
        .map(|category| {
            let count = catalog
                .iter()
                .filter(|item| item.category() == category.name)
                .count();
            (category, count)
        })
        .collect()
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        0
    } else if page_size == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// The items on `page` (0-indexed). Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return if page == 0 { items } else { &[] };
    }
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Criteria a listing page starts with, and returns to on reset
///
/// The price range spans the whole slider, `0..=price_ceiling`.
pub fn initial_criteria(category: Option<String>, price_ceiling: Decimal) -> FilterCriteria {
    FilterCriteria {
        price: PriceRange::clamped(Decimal::ZERO, price_ceiling, price_ceiling),
        ..FilterCriteria::for_category(category)
    }
}
