// web_app/pages/admin/products.rs - Inventory table (`/admin/products`)
//
// Same filter engine as the customer catalog, rendered as a table with
// stock-status badges, row selection and a page-size selector.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{PageSizeSelect, StatCard};
use crate::web_app::api::admin::{Selection, StockSummary};
use crate::web_app::api::catalog::{catalog, CatalogProvider};
use crate::web_app::api::queries::{filter_and_sort, paginate};
use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::pages::use_store_config;

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let threshold = use_store_config().low_stock_threshold;
    let store = catalog();
    let summary = StockSummary::tally(store.list_all(), threshold);

    let criteria = RwSignal::new(FilterCriteria::default());
    let page_size = RwSignal::new(super::PAGE_SIZES[0]);
    let current_page = RwSignal::new(0usize);
    let selected = RwSignal::new(Selection::<i32>::new());

    Effect::new(move || {
        criteria.track();
        page_size.track();
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
    let rows = Signal::derive(move || {
        filtered.with(|all| paginate(all, current_page.get(), page_size.get()).to_vec())
    });

    let visible_ids = move || rows.with(|page| page.iter().map(|p| p.id).collect::<Vec<i32>>());

    let categories = store.categories().to_vec();

    view! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-2xl font-bold text-stone-900">"Products"</h1>
                    <p class="text-stone-500">"Manage your product inventory"</p>
                </div>
                <span class="text-sm text-stone-500">
                    {move || format!("{} selected", selected.with(Selection::len))}
                </span>
            </div>

            <div class="grid grid-cols-3 gap-4">
                <StatCard label="Active" value=summary.active.to_string() accent="text-green-700" />
                <StatCard label="Low Stock" value=summary.low_stock.to_string() accent="text-yellow-700" />
                <StatCard label="Out of Stock" value=summary.out_of_stock.to_string() accent="text-red-700" />
            </div>

            <div class="flex flex-col md:flex-row gap-4 items-center">
                <div class="flex-1 w-full">
                    <SearchBar criteria=criteria />
                </div>
                <select
                    class="px-4 py-2 border border-stone-200 rounded-lg bg-white text-sm"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        criteria.update(|c| c.category = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="" selected=move || criteria.with(|c| c.category.is_none())>"All Categories"</option>
                    {categories.into_iter().map(|category| {
                        let id = category.id.clone();
                        view! {
                            <option
                                value=category.id.clone()
                                selected=move || criteria.with(|c| c.category.as_deref() == Some(id.as_str()))
                            >
                                {category.name}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <SortDropdown criteria=criteria />
            </div>

            <div class="bg-white border border-stone-200 rounded-xl overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-stone-50 text-left text-stone-500">
                        <tr>
                            <th class="p-3 w-10">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.all_selected(&visible_ids()))
                                    on:change=move |_| {
                                        let ids = visible_ids();
                                        selected.update(|s| s.toggle_all(&ids));
                                    }
                                />
                            </th>
                            <th class="p-3">"Product"</th>
                            <th class="p-3">"Category"</th>
                            <th class="p-3 text-right">"Price"</th>
                            <th class="p-3 text-right">"Stock"</th>
                            <th class="p-3">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|p| p.id
                            children=move |product| {
                                let id = product.id;
                                let status = product.stock_status(threshold);
                                view! {
                                    <tr class="border-t border-stone-100 hover:bg-stone-50">
                                        <td class="p-3">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.with(|ids| ids.contains(&id))
                                                on:change=move |_| {
                                                    selected.update(|s| {
                                                        s.toggle(id);
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="p-3">
                                            <A href=product_href(id)>
                                                <div class="flex items-center gap-3">
                                                    <img
                                                        src=product.primary_image().to_string()
                                                        alt=product.name.clone()
                                                        class="w-10 h-10 rounded object-cover bg-stone-100"
                                                    />
                                                    <span class="font-medium text-stone-900">{product.name.clone()}</span>
                                                </div>
                                            </A>
                                        </td>
                                        <td class="p-3 text-stone-600">{product.category.clone()}</td>
                                        <td class="p-3 text-right">{format_price(product.price)}</td>
                                        <td class="p-3 text-right">{product.stock}</td>
                                        <td class="p-3"><StockBadge status=status /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || total.get() == 0>
                    <p class="p-8 text-center text-stone-500">"No products match your filters."</p>
                </Show>
            </div>

            <div class="flex items-center justify-between text-sm text-stone-600">
                <PageSizeSelect page_size=page_size />
                {move || view! {
                    <Pagination current_page=current_page total_items=total page_size=page_size.get() />
                }}
            </div>
        </div>
    }
}
