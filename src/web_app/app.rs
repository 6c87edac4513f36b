// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the navigation bar, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::catalog::{catalog, CatalogProvider};
use crate::web_app::components::{Button, MainNav};
use crate::web_app::pages::{
    use_store_config, AccountPage, AdminDashboardPage, AdminLayout, AdminProductsPage,
    AdminSettingsPage, AdminUsersPage, CartPage, CatalogPage, HomePage, ProductPage,
};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Store configuration context (from the server shell or `hydrate()`, else defaults)
/// - Router with routes and a 404 fallback
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(use_store_config());

    let categories = catalog().categories().to_vec();

    view! {
        <Title text="FurniCraft" />
        <Meta name="description" content="Premium furniture and interior decor" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <MainNav categories=categories />
            <main class="min-h-screen bg-white">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=CatalogPage />
                    <Route path=path!("/products/:id") view=ProductPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/account") view=AccountPage />
                    <ParentRoute path=path!("/admin") view=AdminLayout>
                        <Route path=path!("") view=AdminDashboardPage />
                        <Route path=path!("products") view=AdminProductsPage />
                        <Route path=path!("users") view=AdminUsersPage />
                        <Route path=path!("settings") view=AdminSettingsPage />
                    </ParentRoute>
                </Routes>
            </main>
            <footer class="bg-stone-50 border-t border-stone-200 py-8">
                <p class="text-center text-stone-500 text-sm">"© FurniCraft. All rights reserved."</p>
            </footer>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-stone-300 mb-4">"404"</h1>
                <p class="text-xl text-stone-600 mb-8">"Page not found"</p>
                <Button href="/">"Back to Home"</Button>
            </div>
        </div>
    }
}
