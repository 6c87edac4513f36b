// web_app/pages/admin/settings.rs - Store settings (`/admin/settings`)
//
// Settings come from the environment at start-up, so this page only shows the
// effective values and the variable that sets each one.

use leptos::prelude::*;

use crate::web_app::api::admin::settings_rows;
use crate::web_app::pages::use_store_config;

const STORE_INFO: [(&str, &str); 4] = [
    ("Store Name", "FurniCraft"),
    ("Email", "info@furnicraft.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Address", "123 Furniture Lane, Design District, CA 94103"),
];

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let rows = settings_rows(&use_store_config());

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-stone-900">"Settings"</h1>
                <p class="text-stone-500">"Store details and the configuration this server started with"</p>
            </div>

            <section class="bg-white border border-stone-200 rounded-xl p-6">
                <h2 class="text-lg font-bold text-stone-900 mb-4">"Store Information"</h2>
                <dl class="grid gap-4 md:grid-cols-2">
                    {STORE_INFO.into_iter().map(|(label, value)| view! {
                        <div>
                            <dt class="text-sm text-stone-500">{label}</dt>
                            <dd class="font-medium text-stone-900">{value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </section>

            <section class="bg-white border border-stone-200 rounded-xl overflow-hidden">
                <div class="p-6 border-b border-stone-100">
                    <h2 class="text-lg font-bold text-stone-900">"Store Configuration"</h2>
                    <p class="text-sm text-stone-500">"Set through environment variables; restart the server to change them."</p>
                </div>
                <table class="w-full text-sm">
                    <thead class="bg-stone-50 text-left text-stone-500">
                        <tr>
                            <th class="p-3">"Setting"</th>
                            <th class="p-3">"Value"</th>
                            <th class="p-3">"Variable"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|row| view! {
                            <tr class="border-t border-stone-100">
                                <td class="p-3 font-medium text-stone-900">{row.label}</td>
                                <td class="p-3">{row.value}</td>
                                <td class="p-3"><code class="text-xs text-stone-500">{row.env_var}</code></td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
