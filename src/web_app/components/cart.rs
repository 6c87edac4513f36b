// web_app/components/cart.rs - Cart line and order summary components

use leptos::prelude::*;
use leptos_router::components::A;

use super::common::{PriceDisplay, QuantityStepper};
use crate::web_app::model::{format_price, CartItem, CartTotals};

/// One cart line with quantity controls and a remove link
#[component]
pub fn CartLine(
    item: CartItem,
    #[prop(into)]
    quantity: Signal<u32>,
    on_increment: Callback<()>,
    on_decrement: Callback<()>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let price = item.price;
    let line_total = move || format_price(price * rust_decimal::Decimal::from(quantity.get()));

    view! {
        <div class="flex gap-6 py-6 border-b border-stone-200">
            <A href=format!("/products/{}", item.product_id)>
                <img
                    src=item.image.clone()
                    alt=item.name.clone()
                    class="w-24 h-24 object-cover rounded-lg bg-stone-100"
                />
            </A>
            <div class="flex-1 flex flex-col gap-2">
                <div class="flex justify-between">
                    <div>
                        <h3 class="font-semibold text-stone-900">{item.name.clone()}</h3>
                        <p class="text-sm text-stone-500">"Color: " {item.color.clone()}</p>
                    </div>
                    <span class="font-semibold text-stone-900">{line_total}</span>
                </div>
                <PriceDisplay price=price />
                <div class="flex items-center gap-6 mt-auto">
                    <QuantityStepper
                        quantity=quantity
                        on_decrement=on_decrement
                        on_increment=on_increment
                    />
                    <button
                        type="button"
                        class="text-sm text-red-600 hover:text-red-800 hover:underline"
                        on:click=move |_| on_remove.run(())
                    >
                        "Remove"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Subtotal, shipping, tax and total
#[component]
pub fn OrderSummary(#[prop(into)] totals: Signal<CartTotals>) -> impl IntoView {
    let shipping = move || {
        let shipping = totals.get().shipping;
        if shipping.is_zero() {
            "Free".to_string()
        } else {
            format_price(shipping)
        }
    };

    view! {
        <aside class="bg-stone-50 rounded-2xl p-6 border border-stone-100 h-fit space-y-4">
            <h2 class="text-lg font-bold text-stone-900">"Order Summary"</h2>
            <div class="flex justify-between text-stone-600">
                <span>"Subtotal"</span>
                <span>{move || format_price(totals.get().subtotal)}</span>
            </div>
            <div class="flex justify-between text-stone-600">
                <span>"Shipping"</span>
                <span>{shipping}</span>
            </div>
            <div class="flex justify-between text-stone-600">
                <span>"Tax"</span>
                <span>{move || format_price(totals.get().tax)}</span>
            </div>
            <div class="flex justify-between text-lg font-bold text-stone-900 pt-4 border-t border-stone-200">
                <span>"Total"</span>
                <span>{move || format_price(totals.get().total)}</span>
            </div>
            <button
                type="button"
                class="w-full py-3 bg-stone-900 text-white rounded-lg hover:bg-stone-700 font-medium"
            >
                "Proceed to Checkout"
            </button>
        </aside>
    }
}
