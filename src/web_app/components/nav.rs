// web_app/components/nav.rs - Site navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::model::Category;

/// Top bar with the store name, category links, account, cart and admin
#[component]
pub fn MainNav(categories: Vec<Category>) -> impl IntoView {
    view! {
        <header class="bg-white border-b border-stone-200 sticky top-0 z-40">
            <nav class="container mx-auto px-4 h-16 flex items-center gap-8">
                <A href="/">
                    <span class="text-xl font-bold tracking-tight text-stone-900">"FurniCraft"</span>
                </A>
                <div class="hidden md:flex items-center gap-6 text-sm text-stone-600">
                    <A href="/products">"All Products"</A>
                    {categories.into_iter().map(|category| view! {
                        <A href=format!("/products?category={}", category.id)>{category.name}</A>
                    }).collect_view()}
                </div>
                <div class="ml-auto flex items-center gap-6 text-sm font-medium">
                    <A href="/admin">"Admin"</A>
                    <A href="/account">"Account"</A>
                    <A href="/cart">"Cart"</A>
                </div>
            </nav>
        </header>
    }
}
