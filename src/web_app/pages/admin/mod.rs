// web_app/pages/admin/mod.rs - Back office (`/admin/*`)
//
// `AdminLayout` wraps every admin page with the sidebar; the pages render
// into its `<Outlet />`. The small widgets shared by the pages live here too.

pub mod dashboard;
pub mod products;
pub mod settings;
pub mod users;

pub use dashboard::AdminDashboardPage;
pub use products::AdminProductsPage;
pub use settings::AdminSettingsPage;
pub use users::AdminUsersPage;

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_location;

/// Page sizes offered by the admin table footers
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Sidebar entries: (href, label)
pub const ADMIN_LINKS: [(&str, &str); 4] = [
    ("/admin", "Dashboard"),
    ("/admin/products", "Products"),
    ("/admin/users", "Users"),
    ("/admin/settings", "Settings"),
];

/// Sidebar plus content area for every `/admin` route
#[component]
pub fn AdminLayout() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="flex min-h-[calc(100vh-4rem)]">
            <aside class="hidden lg:flex w-60 flex-col border-r border-stone-200 bg-stone-50">
                <div class="h-16 flex items-center px-4 border-b border-stone-200 font-semibold text-stone-900">
                    "FurniCraft Admin"
                </div>
                <nav class="grid gap-1 p-4">
                    {ADMIN_LINKS.into_iter().map(|(href, label)| view! {
                        <A href=href>
                            <span class=move || {
                                if pathname.with(|path| path.trim_end_matches('/') == href) {
                                    "block rounded-md px-3 py-2 text-sm font-medium bg-stone-200 text-stone-900"
                                } else {
                                    "block rounded-md px-3 py-2 text-sm font-medium text-stone-600 hover:bg-stone-100"
                                }
                            }>
                                {label}
                            </span>
                        </A>
                    }).collect_view()}
                    <A href="/">
                        <span class="block rounded-md px-3 py-2 mt-6 text-sm font-medium text-stone-600 hover:bg-stone-100">
                            "Back to Store"
                        </span>
                    </A>
                </nav>
            </aside>
            <section class="flex-1 overflow-auto p-4 md:p-6">
                <Outlet />
            </section>
        </div>
    }
}

/// Labelled figure in a bordered card
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    /// Tailwind text colour for the value
    #[prop(default = "text-stone-900")]
    accent: &'static str,
    #[prop(optional)]
    note: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-stone-200 rounded-xl p-4">
            <p class="text-sm text-stone-500">{label}</p>
            <p class=format!("text-2xl font-bold {}", accent)>{value}</p>
            {note.map(|note| view! { <p class="text-xs text-stone-400 mt-1">{note}</p> })}
        </div>
    }
}

/// "Rows per page" select bound to `page_size`
#[component]
pub fn PageSizeSelect(page_size: RwSignal<usize>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-stone-600">
            "Rows per page"
            <select
                class="px-2 py-1 border border-stone-200 rounded bg-white"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        page_size.set(size);
                    }
                }
            >
                {PAGE_SIZES.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}
