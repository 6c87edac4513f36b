// web_app/pages/account.rs - Customer account (`/account`)
//
// Profile, order history and wishlist for the demo customer. There is no
// sign-in; the page always shows `DEMO_ACCOUNT_ID`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::api::accounts::{accounts, DEMO_ACCOUNT_ID};
use crate::web_app::api::catalog::catalog;
use crate::web_app::components::{order_status_variant, Badge, Button, EmptyState, ProductCard};
use crate::web_app::model::{format_price, Order, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AccountTab {
    Profile,
    Orders,
    Wishlist,
}

impl AccountTab {
    const ALL: [AccountTab; 3] = [AccountTab::Profile, AccountTab::Orders, AccountTab::Wishlist];

    fn label(self) -> &'static str {
        match self {
            AccountTab::Profile => "Profile",
            AccountTab::Orders => "Orders",
            AccountTab::Wishlist => "Wishlist",
        }
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let Some(user) = accounts().user(DEMO_ACCOUNT_ID).cloned() else {
        tracing::warn!(user_id = DEMO_ACCOUNT_ID, "demo account missing from seed data");
        return view! {
            <div class="container mx-auto px-4 py-16">
                <EmptyState title="Account unavailable" message="We couldn't load this account." />
            </div>
        }
        .into_any();
    };
    let (initials, name, email) = (user.initials(), user.name.clone(), user.email.clone());
    let tab = RwSignal::new(AccountTab::Profile);

    view! {
        <div class="container mx-auto px-4 py-8">
            <nav class="text-sm text-stone-500 mb-6">
                <A href="/"><span class="hover:text-stone-900">"Home"</span></A>
                " / "
                <span class="text-stone-900">"My Account"</span>
            </nav>

            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                <aside class="bg-white border border-stone-200 rounded-xl p-6 h-fit">
                    <div class="flex flex-col items-center text-center mb-6">
                        <div class="w-20 h-20 rounded-full bg-stone-100 flex items-center justify-center text-2xl font-bold text-stone-700 mb-3">
                            {initials}
                        </div>
                        <h2 class="font-bold text-stone-900">{name}</h2>
                        <p class="text-sm text-stone-500">{email}</p>
                    </div>
                    <nav class="grid gap-1">
                        {AccountTab::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if tab.get() == t {
                                    "text-left rounded-md px-3 py-2 text-sm font-medium bg-stone-900 text-white"
                                } else {
                                    "text-left rounded-md px-3 py-2 text-sm font-medium text-stone-600 hover:bg-stone-100"
                                }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </nav>
                </aside>

                <section class="lg:col-span-3">
                    {move || match tab.get() {
                        AccountTab::Profile => view! { <ProfilePanel user=user.clone() /> }.into_any(),
                        AccountTab::Orders => view! { <OrdersPanel /> }.into_any(),
                        AccountTab::Wishlist => view! { <WishlistPanel /> }.into_any(),
                    }}
                </section>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn ProfilePanel(user: User) -> impl IntoView {
    let fields = [
        ("Full Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Phone", user.phone.clone()),
    ];

    view! {
        <div class="bg-white border border-stone-200 rounded-xl p-6 space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h2 class="text-xl font-bold text-stone-900">"Profile"</h2>
                    <p class="text-sm text-stone-500">{format!("Member since {}", user.member_since())}</p>
                </div>
                <Badge variant="yellow">{format!("{} loyalty points", user.loyalty_points)}</Badge>
            </div>
            <dl class="grid gap-4 md:grid-cols-2">
                {fields.into_iter().map(|(label, value)| view! {
                    <div>
                        <dt class="text-sm text-stone-500">{label}</dt>
                        <dd class="px-4 py-2 mt-1 border border-stone-200 rounded-lg bg-stone-50 text-stone-900">{value}</dd>
                    </div>
                }).collect_view()}
            </dl>
        </div>
    }
}

#[component]
fn OrdersPanel() -> impl IntoView {
    let orders = accounts()
        .orders_for(DEMO_ACCOUNT_ID)
        .into_iter()
        .cloned()
        .collect::<Vec<Order>>();

    if orders.is_empty() {
        return view! {
            <EmptyState title="No orders yet" message="Your orders will appear here once you've made a purchase.">
                <Button href="/products">"Start Shopping"</Button>
            </EmptyState>
        }
        .into_any();
    }

    view! {
        <div class="space-y-4">
            {orders.into_iter().map(|order| view! {
                <article class="bg-white border border-stone-200 rounded-xl p-6">
                    <div class="flex flex-wrap items-center justify-between gap-4 mb-4">
                        <div>
                            <h3 class="font-bold text-stone-900">{order.id.clone()}</h3>
                            <p class="text-sm text-stone-500">
                                {format!("Placed on {}", order.placed_on.format("%B %-d, %Y"))}
                            </p>
                        </div>
                        <Badge variant=order_status_variant(order.status)>{order.status.to_string()}</Badge>
                    </div>
                    <ul class="divide-y divide-stone-100 text-sm">
                        {order.lines.iter().map(|line| view! {
                            <li class="flex justify-between py-2">
                                <span>{format!("{} × {}", line.name, line.quantity)}</span>
                                <span>{format_price(line.line_total())}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="flex justify-between pt-4 border-t border-stone-100 mt-2 font-medium">
                        <span class="text-stone-500">{order.item_label()}</span>
                        <span>{format_price(order.total())}</span>
                    </div>
                </article>
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn WishlistPanel() -> impl IntoView {
    let products = accounts()
        .wishlist_for(DEMO_ACCOUNT_ID, catalog())
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    if products.is_empty() {
        return view! {
            <EmptyState title="Your wishlist is empty" message="Save items you love and find them here later.">
                <Button href="/products">"Explore Products"</Button>
            </EmptyState>
        }
        .into_any();
    }

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6">
            {products.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
        </div>
    }
    .into_any()
}
