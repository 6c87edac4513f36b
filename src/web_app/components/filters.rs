// web_app/components/filters.rs - Catalog filter controls
//
// Every control here reads and writes one shared `RwSignal<FilterCriteria>`
// owned by the page. The page re-runs the filter engine whenever it changes.
//
// - SearchBar: free-text name search
// - CategoryFilter: single-select category list with counts
// - PriceRangeFilter: min/max inputs clamped into the slider span
// - FacetCheckboxes: style / material / colour multi-select
// - SortDropdown, ViewToggle, Pagination

use std::collections::BTreeSet;

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::api::queries::total_pages;
use crate::web_app::model::{
    Category, FacetCount, FilterCriteria, PriceRange, SortOption, ViewMode, PRICE_SLIDER_STEP,
};

/// The multi-select dimensions of `FilterCriteria`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacetKind {
    Style,
    Material,
    Color,
}

impl FacetKind {
    pub fn title(&self) -> &'static str {
        match self {
            FacetKind::Style => "Style",
            FacetKind::Material => "Material",
            FacetKind::Color => "Color",
        }
    }

    pub fn selected<'a>(&self, criteria: &'a FilterCriteria) -> &'a BTreeSet<String> {
        match self {
            FacetKind::Style => &criteria.styles,
            FacetKind::Material => &criteria.materials,
            FacetKind::Color => &criteria.colors,
        }
    }

    pub fn toggle(&self, criteria: &mut FilterCriteria, value: &str) {
        match self {
            FacetKind::Style => criteria.toggle_style(value),
            FacetKind::Material => criteria.toggle_material(value),
            FacetKind::Color => criteria.toggle_color(value),
        }
    }
}

/// Free-text search over product names
#[component]
pub fn SearchBar(
    criteria: RwSignal<FilterCriteria>,
    #[prop(default = "Search products...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative w-full">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-stone-400">"🔍"</span>
            </div>
            <input
                type="search"
                placeholder=placeholder
                class="w-full pl-10 pr-4 py-2.5 border border-stone-300 rounded-xl \
                       focus:ring-2 focus:ring-stone-200 focus:border-stone-500 \
                       outline-none transition-all shadow-sm"
                prop:value=move || criteria.with(|c| c.query.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    criteria.update(|c| c.query = Some(value));
                }
            />
        </div>
    }
}

/// Category list; checking the selected category again clears it
#[component]
pub fn CategoryFilter(
    criteria: RwSignal<FilterCriteria>,
    /// Categories with their catalog counts
    categories: Vec<(Category, usize)>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-stone-900 text-sm uppercase tracking-wide">"Category"</h3>
            <div class="space-y-1">
                {categories.into_iter().map(|(category, count)| {
                    let id = category.id.clone();
                    let id_for_toggle = category.id.clone();
                    let is_checked = move || criteria.with(|c| c.category.as_deref() == Some(id.as_str()));

                    view! {
                        <label class="flex items-center gap-3 cursor-pointer hover:bg-white p-2 rounded-lg transition-colors group">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |_| criteria.update(|c| c.select_category(&id_for_toggle))
                                class="h-4 w-4 rounded border-stone-300 text-stone-900 focus:ring-stone-500"
                            />
                            <span class="flex-1 text-sm text-stone-700 group-hover:text-stone-900 font-medium">
                                {category.name}
                            </span>
                            <span class="text-xs bg-stone-200 text-stone-600 px-2 py-0.5 rounded-full">
                                {count}
                            </span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Min/max price inputs
///
/// Typed values are applied on blur, ordered and clamped into `[0, ceiling]`.
/// Unparseable input snaps back to the current bound.
#[component]
pub fn PriceRangeFilter(criteria: RwSignal<FilterCriteria>, ceiling: Decimal) -> impl IntoView {
    let current = move || criteria.with(|c| c.price);
    let local_min = RwSignal::new(current().min.to_string());
    let local_max = RwSignal::new(current().max.to_string());

    // Reset and category navigation replace the range from outside
    Effect::new(move || {
        let range = current();
        local_min.set(range.min.to_string());
        local_max.set(range.max.to_string());
    });

    let apply = move || {
        let range = current();
        let min = local_min.get().trim().parse::<Decimal>().unwrap_or(range.min);
        let max = local_max.get().trim().parse::<Decimal>().unwrap_or(range.max);
        let clamped = PriceRange::clamped(min, max, ceiling);
        criteria.update(|c| c.price = clamped);
        local_min.set(clamped.min.to_string());
        local_max.set(clamped.max.to_string());
    };

    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-stone-900 text-sm uppercase tracking-wide">"Price Range"</h3>
            <div class="flex items-center gap-2 bg-white p-1 rounded-lg border border-stone-200">
                <div class="relative flex-1">
                    <span class="absolute left-2 top-1/2 -translate-y-1/2 text-stone-400 text-xs">"$"</span>
                    <input
                        type="number"
                        min="0"
                        max=ceiling.to_string()
                        step=PRICE_SLIDER_STEP.to_string()
                        placeholder="Min"
                        class="w-full pl-5 pr-2 py-1.5 border-none rounded text-sm focus:ring-0"
                        prop:value=move || local_min.get()
                        on:input=move |ev| local_min.set(event_target_value(&ev))
                        on:blur=move |_| apply()
                    />
                </div>
                <span class="text-stone-300">"–"</span>
                <div class="relative flex-1">
                    <span class="absolute left-2 top-1/2 -translate-y-1/2 text-stone-400 text-xs">"$"</span>
                    <input
                        type="number"
                        min="0"
                        max=ceiling.to_string()
                        step=PRICE_SLIDER_STEP.to_string()
                        placeholder="Max"
                        class="w-full pl-5 pr-2 py-1.5 border-none rounded text-sm focus:ring-0"
                        prop:value=move || local_max.get()
                        on:input=move |ev| local_max.set(event_target_value(&ev))
                        on:blur=move |_| apply()
                    />
                </div>
            </div>
        </div>
    }
}

/// Checkbox list for one multi-select dimension
#[component]
pub fn FacetCheckboxes(
    criteria: RwSignal<FilterCriteria>,
    kind: FacetKind,
    facets: Vec<FacetCount>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-stone-900 text-sm uppercase tracking-wide">{kind.title()}</h3>
            <div class="space-y-1 max-h-60 overflow-y-auto pr-2">
                {facets.into_iter().map(|facet| {
                    let value = facet.value.clone();
                    let value_for_toggle = facet.value.clone();
                    let is_checked = move || criteria.with(|c| kind.selected(c).contains(&value));

                    view! {
                        <label class="flex items-center gap-3 cursor-pointer hover:bg-white p-2 rounded-lg transition-colors group">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |_| criteria.update(|c| kind.toggle(c, &value_for_toggle))
                                class="h-4 w-4 rounded border-stone-300 text-stone-900 focus:ring-stone-500"
                            />
                            <span class="flex-1 text-sm text-stone-700 group-hover:text-stone-900">
                                {facet.value}
                            </span>
                            <span class="text-xs bg-stone-200 text-stone-600 px-2 py-0.5 rounded-full">
                                {facet.count}
                            </span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Sort dropdown component
#[component]
pub fn SortDropdown(criteria: RwSignal<FilterCriteria>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-stone-200 shadow-sm">
            <label class="text-sm font-medium text-stone-600">"Sort by:"</label>
            <select
                class="text-sm font-semibold text-stone-800 bg-transparent border-none focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| {
                    let sort = event_target_value(&ev).parse::<SortOption>().unwrap_or_default();
                    criteria.update(|c| c.sort_by = sort);
                }
            >
                {SortOption::ALL.into_iter().map(|option| view! {
                    <option
                        value=option.as_slug()
                        selected=move || criteria.with(|c| c.sort_by == option)
                    >
                        {option.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Grid / list switch
#[component]
pub fn ViewToggle(view_mode: RwSignal<ViewMode>) -> impl IntoView {
    let button_class = move |mode: ViewMode| {
        if view_mode.get() == mode {
            "px-3 py-2 text-sm bg-stone-900 text-white"
        } else {
            "px-3 py-2 text-sm bg-white text-stone-600 hover:bg-stone-50"
        }
    };

    view! {
        <div class="inline-flex rounded-lg border border-stone-200 overflow-hidden">
            <button type="button" class=move || button_class(ViewMode::Grid) on:click=move |_| view_mode.set(ViewMode::Grid)>
                "Grid"
            </button>
            <button type="button" class=move || button_class(ViewMode::List) on:click=move |_| view_mode.set(ViewMode::List)>
                "List"
            </button>
        </div>
    }
}

/// Sidebar with every filter control and "Clear All"
#[component]
pub fn FilterPanel(
    criteria: RwSignal<FilterCriteria>,
    categories: Vec<(Category, usize)>,
    styles: Vec<FacetCount>,
    materials: Vec<FacetCount>,
    colors: Vec<FacetCount>,
    ceiling: Decimal,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="w-72 shrink-0 bg-stone-50 p-6 rounded-2xl border border-stone-100 space-y-8 h-fit sticky top-6">
            <div class="flex justify-between items-center pb-4 border-b border-stone-200">
                <h2 class="font-bold text-lg text-stone-900">"Filters"</h2>
                <button
                    type="button"
                    class="text-xs font-semibold text-stone-600 hover:text-stone-900 hover:underline uppercase tracking-wide"
                    on:click=move |_| on_clear.run(())
                >
                    "Clear All"
                </button>
            </div>

            <CategoryFilter criteria=criteria categories=categories />
            <PriceRangeFilter criteria=criteria ceiling=ceiling />
            <FacetCheckboxes criteria=criteria kind=FacetKind::Style facets=styles />
            <FacetCheckboxes criteria=criteria kind=FacetKind::Material facets=materials />
            <FacetCheckboxes criteria=criteria kind=FacetKind::Color facets=colors />
        </aside>
    }
}

/// Previous / next pager over a filtered list
#[component]
pub fn Pagination(
    /// Current page (0-indexed)
    current_page: RwSignal<usize>,
    #[prop(into)]
    total_items: Signal<usize>,
    page_size: usize,
) -> impl IntoView {
    let pages = move || total_pages(total_items.get(), page_size);

    let can_go_prev = move || current_page.get() > 0;
    let can_go_next = move || current_page.get() + 1 < pages();

    view! {
        <Show when=move || { pages() > 1 }>
            <div class="flex items-center justify-center gap-4 mt-12 mb-8">
                <button
                    type="button"
                    class="px-4 py-2 bg-white border border-stone-200 rounded-lg shadow-sm \
                           disabled:opacity-50 disabled:cursor-not-allowed hover:bg-stone-50 font-medium text-stone-700"
                    disabled=move || !can_go_prev()
                    on:click=move |_| current_page.update(|p| *p = p.saturating_sub(1))
                >
                    "← Previous"
                </button>

                <span class="text-sm font-medium text-stone-600 bg-stone-100 px-4 py-2 rounded-lg">
                    "Page " {move || current_page.get() + 1} " of " {pages}
                </span>

                <button
                    type="button"
                    class="px-4 py-2 bg-white border border-stone-200 rounded-lg shadow-sm \
                           disabled:opacity-50 disabled:cursor-not-allowed hover:bg-stone-50 font-medium text-stone-700"
                    disabled=move || !can_go_next()
                    on:click=move |_| {
                        if can_go_next() {
                            current_page.update(|p| *p += 1);
                        }
                    }
                >
                    "Next →"
                </button>
            </div>
        </Show>
    }
}
