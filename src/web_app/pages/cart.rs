// web_app/pages/cart.rs - Shopping cart page
//
// The cart belongs to this page: it is seeded from the demo cart on load and
// discarded on navigation away.

use leptos::prelude::*;

use super::use_store_config;
use crate::web_app::api::cart::{demo_cart, Cart};
use crate::web_app::api::catalog::catalog;
use crate::web_app::components::{Button, CartLine, EmptyState, OrderSummary};

#[component]
pub fn CartPage() -> impl IntoView {
    let pricing = use_store_config().pricing;
    let cart = RwSignal::new(demo_cart(catalog()));

    let totals = Signal::derive(move || cart.with(|c| c.totals_with(&pricing)));
    let item_count = move || cart.with(Cart::item_count);

    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold text-stone-900 mb-8">"Shopping Cart"</h1>

            <Show
                when=move || !cart.with(Cart::is_empty)
                fallback=|| view! {
                    <EmptyState title="Your cart is empty" message="Looks like you haven't added anything yet.">
                        <Button href="/products">"Browse Products"</Button>
                    </EmptyState>
                }
            >
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-12">
                    <section class="lg:col-span-2">
                        <p class="text-stone-500 mb-2">{move || format!("{} items", item_count())}</p>
                        <For
                            each=move || cart.with(|c| c.items().to_vec())
                            key=|item| (item.product_id, item.color.clone())
                            children=move |item| {
                                let id = item.product_id;
                                let color = StoredValue::new(item.color.clone());
                                let quantity = Signal::derive(move || {
                                    cart.with(|c| {
                                        c.items()
                                            .iter()
                                            .find(|line| color.with_value(|col| line.is_line(id, col)))
                                            .map(|line| line.quantity)
                                            .unwrap_or(1)
                                    })
                                });

                                view! {
                                    <CartLine
                                        item=item
                                        quantity=quantity
                                        on_increment=Callback::new(move |()| {
                                            cart.update(|c| {
                                                color.with_value(|col| c.increment(id, col));
                                            });
                                        })
                                        on_decrement=Callback::new(move |()| {
                                            cart.update(|c| {
                                                color.with_value(|col| c.decrement(id, col));
                                            });
                                        })
                                        on_remove=Callback::new(move |()| {
                                            cart.update(|c| {
                                                color.with_value(|col| c.remove(id, col));
                                            });
                                        })
                                    />
                                }
                            }
                        />
                    </section>
                    <OrderSummary totals=totals />
                </div>
            </Show>
        </div>
    }
}
