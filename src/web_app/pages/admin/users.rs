// web_app/pages/admin/users.rs - User table (`/admin/users`)
//
// Search, role and status filters over the account book, with the same row
// selection and page-size footer as the inventory table.

use leptos::prelude::*;

use super::{PageSizeSelect, StatCard};
use crate::web_app::api::accounts::accounts;
use crate::web_app::api::admin::{filter_users, Selection, UserSummary};
use crate::web_app::api::queries::paginate;
use crate::web_app::components::{user_status_variant, Badge, Pagination};
use crate::web_app::model::{User, UserRole, UserStatus};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let book = accounts();
    let summary = UserSummary::tally(book.users());

    let query = RwSignal::new(String::new());
    let role = RwSignal::new(None::<UserRole>);
    let status = RwSignal::new(None::<UserStatus>);
    let page_size = RwSignal::new(super::PAGE_SIZES[0]);
    let current_page = RwSignal::new(0usize);
    let selected = RwSignal::new(Selection::<String>::new());

    Effect::new(move || {
        query.track();
        role.track();
        status.track();
        page_size.track();
        current_page.set(0);
    });

    let filtered = Memo::new(move |_| {
        query.with(|q| {
            filter_users(book.users(), q, role.get(), status.get())
                .into_iter()
                .cloned()
                .collect::<Vec<User>>()
        })
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let rows = Signal::derive(move || {
        filtered.with(|all| paginate(all, current_page.get(), page_size.get()).to_vec())
    });
    let visible_ids = move || rows.with(|page| page.iter().map(|u| u.id.clone()).collect::<Vec<String>>());

    view! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-2xl font-bold text-stone-900">"Users"</h1>
                    <p class="text-stone-500">"Manage your customers and admin users"</p>
                </div>
                <span class="text-sm text-stone-500">
                    {move || format!("{} selected", selected.with(Selection::len))}
                </span>
            </div>

            <div class="grid grid-cols-3 gap-4">
                <StatCard label="Active" value=summary.active.to_string() accent="text-green-700" />
                <StatCard label="Inactive" value=summary.inactive.to_string() accent="text-stone-500" />
                <StatCard label="Blocked" value=summary.blocked.to_string() accent="text-red-700" />
            </div>

            <div class="flex flex-col md:flex-row gap-4 items-center">
                <input
                    type="search"
                    placeholder="Search users..."
                    class="flex-1 w-full px-4 py-2 border border-stone-200 rounded-lg"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="px-4 py-2 border border-stone-200 rounded-lg bg-white text-sm"
                    on:change=move |ev| role.set(UserRole::from_label(&event_target_value(&ev)))
                >
                    <option value="">"All Roles"</option>
                    {UserRole::ALL.into_iter().map(|r| view! {
                        <option value=r.to_string()>{r.to_string()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="px-4 py-2 border border-stone-200 rounded-lg bg-white text-sm"
                    on:change=move |ev| status.set(UserStatus::from_label(&event_target_value(&ev)))
                >
                    <option value="">"All Statuses"</option>
                    {UserStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.to_string()>{s.to_string()}</option>
                    }).collect_view()}
                </select>
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
                            <th class="p-3">"User"</th>
                            <th class="p-3">"Email"</th>
                            <th class="p-3">"Role"</th>
                            <th class="p-3">"Status"</th>
                            <th class="p-3 text-right">"Orders"</th>
                            <th class="p-3">"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|u| u.id.clone()
                            children=move |user| {
                                let id = StoredValue::new(user.id.clone());
                                view! {
                                    <tr class="border-t border-stone-100 hover:bg-stone-50">
                                        <td class="p-3">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.with(|s| id.with_value(|id| s.contains(id)))
                                                on:change=move |_| {
                                                    selected.update(|s| {
                                                        s.toggle(id.get_value());
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="p-3">
                                            <div class="flex items-center gap-3">
                                                <div class="w-9 h-9 rounded-full bg-stone-100 flex items-center justify-center text-xs font-medium">
                                                    {user.initials()}
                                                </div>
                                                <span class="font-medium text-stone-900">{user.name.clone()}</span>
                                            </div>
                                        </td>
                                        <td class="p-3 text-stone-600">{user.email.clone()}</td>
                                        <td class="p-3">{user.role.to_string()}</td>
                                        <td class="p-3">
                                            <Badge variant=user_status_variant(user.status)>{user.status.to_string()}</Badge>
                                        </td>
                                        <td class="p-3 text-right">{user.order_count}</td>
                                        <td class="p-3 text-stone-600">{user.joined.format("%b %-d, %Y").to_string()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || total.get() == 0>
                    <p class="p-8 text-center text-stone-500">"No users match your filters."</p>
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
