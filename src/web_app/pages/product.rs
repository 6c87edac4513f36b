// web_app/pages/product.rs - Product detail page (`/products/:id`)

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::use_store_config;
use crate::web_app::api::catalog::{catalog, CatalogProvider};
use crate::web_app::components::{ProductDetail, ProductNotFound, RelatedProducts};

/// Related products shown under the detail view
pub const RELATED_COUNT: usize = 4;

#[component]
pub fn ProductPage() -> impl IntoView {
    let config = use_store_config();
    let threshold = config.low_stock_threshold;
    let params = use_params_map();
    let raw_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="container mx-auto px-4 py-8">
            {move || {
                let store = catalog();
                match store.by_id_param(&raw_id()) {
                    Some(product) => {
                        let related = store
                            .related(product.id, RELATED_COUNT)
                            .into_iter()
                            .cloned()
                            .collect::<Vec<_>>();
                        let category = store.category_for_product(product).cloned();

                        view! {
                            <nav class="text-sm text-stone-500 mb-6 flex gap-2">
                                <A href="/products">"Products"</A>
                                {category.map(|c| view! {
                                    <span>"/"</span>
                                    <A href=format!("/products?category={}", c.id)>{c.name}</A>
                                })}
                                <span>"/"</span>
                                <span class="text-stone-900">{product.name.clone()}</span>
                            </nav>
                            <ProductDetail product=product.clone() low_stock_threshold=threshold />
                            <RelatedProducts products=related />
                        }.into_any()
                    }
                    None => view! { <ProductNotFound /> }.into_any(),
                }
            }}
        </div>
    }
}
