// web_app/pages/catalog.rs - Product catalog page
//
// Owns the page's `FilterCriteria` and re-derives the visible products from
// the catalog on every change. Nothing here is persisted: the criteria live
// as long as the page does.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::use_store_config;
use crate::web_app::api::catalog::{catalog, CatalogProvider};
use crate::web_app::api::queries::{
    category_counts, facet_counts, filter_and_sort, initial_criteria, paginate,
};
use crate::web_app::components::*;
use crate::web_app::model::*;

/// Results per page
pub const PAGE_SIZE: usize = 9;

/// Main catalog page component
///
/// Orchestrates the browsing experience with:
/// - Search bar, sort dropdown and view toggle
/// - Filter panel
/// - Results grid / list with empty state
/// - Pagination
#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = use_store_config();
    let ceiling = config.price_ceiling;
    let store = catalog();

    let query = use_query_map();
    let category_param = move || query.with(|q| q.get("category"));

    let criteria = RwSignal::new(initial_criteria(
        query.with_untracked(|q| q.get("category")),
        ceiling,
    ));
    let view_mode = RwSignal::new(ViewMode::default());
    let current_page = RwSignal::new(0usize);

    // Navigating to another ?category= link replaces the category only
    Effect::new(move || {
        let category = category_param();
        if criteria.with_untracked(|c| c.category != category) {
            criteria.update(|c| c.category = category);
        }
    });

    // Any criteria change sends the user back to the first page
    Effect::new(move || {
        criteria.track();
        current_page.set(0);
    });

    let filtered = Memo::new(move |_| {
        criteria.with(|c| {
            filter_and_sort(store.list_all(), store.categories(), c)
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        })
    });

    let total = Signal::derive(move || filtered.with(Vec::len));
    let visible = Signal::derive(move || {
        filtered.with(|all| paginate(all, current_page.get(), PAGE_SIZE).to_vec())
    });

    let heading = move || {
        criteria.with(|c| {
            c.category
                .as_deref()
                .and_then(|id| store.category_by_id(id))
                .map(|cat| cat.name.clone())
                .unwrap_or_else(|| "All Products".to_string())
        })
    };

    // Facet options come from the whole catalog so they never disappear
    let categories: Vec<(Category, usize)> = category_counts(store.list_all(), store.categories())
        .into_iter()
        .map(|(category, count)| (category.clone(), count))
        .collect();
    let styles = facet_counts(store.list_all(), |p: &Product| p.style.as_str());
    let materials = facet_counts(store.list_all(), |p: &Product| p.material.as_str());
    let colors = facet_counts(store.list_all(), |p: &Product| p.color.as_str());

    let on_reset = Callback::new(move |()| {
        criteria.set(initial_criteria(None, ceiling));
    });

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex flex-col md:flex-row md:items-end justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-3xl font-bold text-stone-900">{heading}</h1>
                    <p class="text-stone-500 mt-1">
                        {move || format!("Showing {} of {} products", total.get(), store.list_all().len())}
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <SortDropdown criteria=criteria />
                    <ViewToggle view_mode=view_mode />
                </div>
            </div>

            <div class="mb-8">
                <SearchBar criteria=criteria />
            </div>

            <div class="flex flex-col lg:flex-row gap-8 items-start">
                <FilterPanel
                    criteria=criteria
                    categories=categories
                    styles=styles
                    materials=materials
                    colors=colors
                    ceiling=ceiling
                    on_clear=on_reset
                />

                <section class="flex-1 w-full min-w-0">
                    <ProductGrid products=visible view_mode=view_mode on_reset=on_reset />
                    <Pagination current_page=current_page total_items=total page_size=PAGE_SIZE />
                </section>
            </div>
        </div>
    }
}
