// web_app/pages/home.rs - Landing page
//
// Hero, category grid and the Trending / Bestsellers / New Arrivals shelves.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::api::catalog::{catalog, CatalogProvider};
use crate::web_app::components::{Button, ProductCard, SecondaryButton};
use crate::web_app::model::Product;

/// Products shown per shelf
pub const SHELF_SIZE: usize = 4;

/// Home page product shelf tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shelf {
    #[default]
    Trending,
    Bestsellers,
    NewArrivals,
}

impl Shelf {
    pub const ALL: [Shelf; 3] = [Shelf::Trending, Shelf::Bestsellers, Shelf::NewArrivals];

    pub fn label(&self) -> &'static str {
        match self {
            Shelf::Trending => "Trending",
            Shelf::Bestsellers => "Bestsellers",
            Shelf::NewArrivals => "New Arrivals",
        }
    }
}

/// First `limit` products for a shelf
pub fn shelf_products(provider: &impl CatalogProvider, shelf: Shelf, limit: usize) -> Vec<Product> {
    let picked = match shelf {
        Shelf::Trending => provider.featured(),
        Shelf::Bestsellers => provider.bestsellers(),
        Shelf::NewArrivals => provider.new_arrivals(),
    };
    picked.into_iter().take(limit).cloned().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = catalog();
    let categories = store.categories().to_vec();
    let hero_image = store
        .featured()
        .first()
        .map(|p| p.primary_image().to_string())
        .unwrap_or_default();

    let active_shelf = RwSignal::new(Shelf::default());
    let shelf = Signal::derive(move || shelf_products(catalog(), active_shelf.get(), SHELF_SIZE));

    view! {
        <div class="bg-white">
            // Hero
            <section class="w-full py-16 lg:py-24 bg-stone-100">
                <div class="container mx-auto px-4 grid gap-12 lg:grid-cols-2 items-center">
                    <div class="space-y-6">
                        <h1 class="text-4xl font-bold tracking-tight text-stone-900 sm:text-5xl">
                            "Transform Your Space with Style"
                        </h1>
                        <p class="max-w-xl text-lg text-stone-600">
                            "Discover premium furniture and interior decor that reflects your unique taste and lifestyle."
                        </p>
                        <Button href="/products">"Shop Now →"</Button>
                    </div>
                    <img
                        src=hero_image
                        alt="Modern living room setup"
                        class="w-full aspect-video rounded-2xl object-cover"
                    />
                </div>
            </section>

            // Categories
            <section class="container mx-auto px-4 py-16">
                <h2 class="text-3xl font-bold text-stone-900 text-center mb-10">"Shop by Category"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {categories.into_iter().map(|category| view! {
                        <A href=format!("/products?category={}", category.id)>
                            <div class="group relative aspect-square overflow-hidden rounded-xl bg-stone-100">
                                <img
                                    src=category.image().to_string()
                                    alt=category.name.clone()
                                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                                />
                                <div class="absolute inset-0 bg-black/30 flex items-end p-4">
                                    <span class="text-white text-lg font-semibold">{category.name.clone()}</span>
                                </div>
                            </div>
                        </A>
                    }).collect_view()}
                </div>
            </section>

            // Shelves
            <section class="bg-stone-50 py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-stone-900 text-center">"Featured Products"</h2>
                    <p class="text-stone-500 text-center mt-2">"Discover our most popular and trending furniture pieces"</p>

                    <div class="flex justify-center gap-2 mt-8">
                        {Shelf::ALL.into_iter().map(|tab| view! {
                            <button
                                type="button"
                                class=move || if active_shelf.get() == tab {
                                    "px-4 py-2 rounded-lg text-sm font-medium bg-stone-900 text-white"
                                } else {
                                    "px-4 py-2 rounded-lg text-sm font-medium bg-white text-stone-600 border border-stone-200 hover:bg-stone-100"
                                }
                                on:click=move |_| active_shelf.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }).collect_view()}
                    </div>

                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 mt-8">
                        <For
                            each=move || shelf.get()
                            key=|p| p.id
                            children=|product| view! { <ProductCard product=product /> }
                        />
                    </div>

                    <div class="text-center mt-10">
                        <SecondaryButton href="/products">"View All Products"</SecondaryButton>
                    </div>
                </div>
            </section>
        </div>
    }
}
