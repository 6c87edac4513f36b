// web_app/pages/admin/dashboard.rs - Store overview (`/admin`)

use leptos::prelude::*;
use leptos_router::components::A;

use super::StatCard;
use crate::web_app::api::accounts::accounts;
use crate::web_app::api::admin::{recent_sales, top_products, DashboardStats, StockSummary};
use crate::web_app::api::catalog::{catalog, CatalogProvider};
use crate::web_app::components::product_href;
use crate::web_app::model::format_price;
use crate::web_app::pages::use_store_config;

/// Rows in the "Recent Sales" and "Top Products" cards
const DASHBOARD_ROWS: usize = 5;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let store = catalog();
    let book = accounts();
    let threshold = use_store_config().low_stock_threshold;

    let stats = DashboardStats::compute(store, book.users(), book.orders());
    let stock = StockSummary::tally(store.list_all(), threshold);
    let sales = recent_sales(book.orders(), book.users(), DASHBOARD_ROWS);
    let top = top_products(store, DASHBOARD_ROWS)
        .into_iter()
        .map(|(product, revenue)| (product.clone(), revenue))
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-stone-900">"Dashboard"</h1>
                <p class="text-stone-500">"Overview of your store performance and recent activity"</p>
            </div>

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard label="Total Revenue" value=format_price(stats.revenue) />
                <StatCard label="Orders" value=stats.orders.to_string() />
                <StatCard
                    label="Products"
                    value=stats.products.to_string()
                    note=format!("{} low stock, {} out of stock", stock.low_stock, stock.out_of_stock)
                />
                <StatCard label="Active Users" value=stats.active_users.to_string() />
            </div>

            <div class="grid gap-4 lg:grid-cols-2">
                <section class="bg-white border border-stone-200 rounded-xl p-6">
                    <h2 class="text-lg font-bold text-stone-900">"Recent Sales"</h2>
                    <p class="text-sm text-stone-500 mb-6">{format!("Latest {} orders", sales.len())}</p>
                    <div class="space-y-6">
                        {sales.into_iter().map(|sale| view! {
                            <div class="flex items-center gap-4">
                                <div class="w-9 h-9 rounded-full bg-stone-100 flex items-center justify-center font-medium">
                                    {sale.customer.chars().next().map(String::from).unwrap_or_default()}
                                </div>
                                <div class="space-y-1">
                                    <p class="text-sm font-medium text-stone-900">{sale.customer.clone()}</p>
                                    <p class="text-sm text-stone-500">{sale.email.clone()}</p>
                                </div>
                                <div class="ml-auto text-right">
                                    <p class="font-medium">{format_price(sale.amount)}</p>
                                    <p class="text-xs text-stone-400">{sale.placed_on.format("%b %-d, %Y").to_string()}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>

                <section class="bg-white border border-stone-200 rounded-xl p-6">
                    <h2 class="text-lg font-bold text-stone-900">"Top Products"</h2>
                    <p class="text-sm text-stone-500 mb-6">"Best sellers by units sold"</p>
                    <div class="space-y-4">
                        {top.into_iter().map(|(product, revenue)| view! {
                            <div class="flex items-center justify-between">
                                <div class="space-y-1">
                                    <A href=product_href(product.id)>
                                        <span class="text-sm font-medium text-stone-900 hover:underline">{product.name.clone()}</span>
                                    </A>
                                    <p class="text-sm text-stone-500">{product.category.clone()}</p>
                                </div>
                                <div class="text-right">
                                    <p class="text-sm font-medium">{format_price(revenue)}</p>
                                    <p class="text-sm text-stone-500">{format!("{} sold", product.units_sold)}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
