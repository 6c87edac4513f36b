// web_app/components/common.rs - Reusable UI components
//
// Small building blocks shared by every page.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos_router::components::A;
use rust_decimal::Decimal;

use crate::web_app::model::{format_price, star_counts, OrderStatus, StockStatus, UserStatus};

const PRIMARY_BUTTON_CLASS: &str = "inline-block px-6 py-3 bg-stone-900 text-white rounded-lg hover:bg-stone-700 \
                                    transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                                    font-medium shadow-sm active:transform active:scale-95";

const SECONDARY_BUTTON_CLASS: &str = "inline-block px-6 py-3 bg-white text-stone-700 rounded-lg hover:bg-stone-50 \
                                      transition-colors border border-stone-300 font-medium shadow-sm";

/// Shared body of `Button` and `SecondaryButton`
///
/// With `href` the button is a router link; otherwise it runs `on_click`.
fn button_view(
    class: String,
    children: Children,
    href: Option<String>,
    on_click: Option<Callback<()>>,
    disabled: bool,
) -> AnyView {
    match href {
        Some(href) => view! {
            <A href=href>
                <span class=class>{children()}</span>
            </A>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                disabled=disabled
                class=class
                on:click=move |_| {
                    if let Some(handler) = on_click {
                        handler.run(());
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Navigate here instead of running a handler
    #[prop(optional, into)]
    href: Option<String>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    button_view(format!("{} {}", PRIMARY_BUTTON_CLASS, class), children, href, on_click, disabled)
}

/// Outlined button for secondary actions
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(optional, into)]
    href: Option<String>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    button_view(format!("{} {}", SECONDARY_BUTTON_CLASS, class), children, href, on_click, false)
}

/// Star rating display component
///
/// Displays a 0-5 rating with filled, half and empty stars.
#[component]
pub fn StarRating(
    rating: Decimal,
    /// Review count shown after the stars
    #[prop(optional)]
    review_count: Option<u32>,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-amber-400">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block">
                    <span class="text-stone-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-amber-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-stone-200">"★"</span>
            }).collect_view()}

            <span class="ml-1 text-sm text-stone-600">{format!("{:.1}", rating)}</span>
            {review_count.map(|count| view! {
                <span class="text-sm text-stone-400">{format!("({})", count)}</span>
            })}
        </div>
    }
}

/// Badge component
///
/// A small pill for labels such as stock status or "Sale".
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Badge colour for a stock status
pub fn stock_variant(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Active => "green",
        StockStatus::LowStock => "yellow",
        StockStatus::OutOfStock => "red",
    }
}

/// Badge colour for an account status
pub fn user_status_variant(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "green",
        UserStatus::Inactive => "gray",
        UserStatus::Blocked => "red",
    }
}

/// Badge colour for an order status
pub fn order_status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "yellow",
        OrderStatus::Shipped => "blue",
        OrderStatus::Delivered => "green",
    }
}

#[component]
pub fn StockBadge(status: StockStatus) -> impl IntoView {
    view! {
        <Badge variant=stock_variant(status)>{status.to_string()}</Badge>
    }
}

/// Price display component
#[component]
pub fn PriceDisplay(
    price: Decimal,
    /// Struck-through former price, shown only when higher than `price`
    #[prop(optional)]
    compare_at: Option<Decimal>,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-bold text-stone-900"
    } else {
        "text-stone-900 font-medium"
    };
    let was = compare_at.filter(|was| *was > price);

    view! {
        <span class="inline-flex items-baseline gap-2">
            <span class=class>{format_price(price)}</span>
            {was.map(|was| view! {
                <span class="text-sm text-stone-400 line-through">{format_price(was)}</span>
            })}
        </span>
    }
}

/// Centered message with an optional action, for empty lists
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(default = "")]
    message: &'static str,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="text-center py-24 bg-white rounded-2xl border border-dashed border-stone-300">
            <h3 class="text-xl font-bold text-stone-800 mb-2">{title}</h3>
            <p class="text-stone-500 mb-6">{message}</p>
            {children.map(|c| c())}
        </div>
    }
}

/// "-" / value / "+" control
///
/// The owner decides the bounds; the buttons just report clicks.
#[component]
pub fn QuantityStepper(
    #[prop(into)]
    quantity: Signal<u32>,
    on_decrement: Callback<()>,
    on_increment: Callback<()>,
    #[prop(into, optional)]
    can_increment: Option<Signal<bool>>,
) -> impl IntoView {
    let can_decrement = move || quantity.get() > 1;
    let can_increment = move || can_increment.map_or(true, |s| s.get());

    view! {
        <div class="inline-flex items-center border border-stone-300 rounded-lg">
            <button
                type="button"
                class="px-3 py-1.5 text-stone-600 hover:bg-stone-100 disabled:opacity-40"
                disabled=move || !can_decrement()
                on:click=move |_| on_decrement.run(())
            >
                "−"
            </button>
            <span class="w-10 text-center font-medium">{move || quantity.get()}</span>
            <button
                type="button"
                class="px-3 py-1.5 text-stone-600 hover:bg-stone-100 disabled:opacity-40"
                disabled=move || !can_increment()
                on:click=move |_| on_increment.run(())
            >
                "+"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("red").contains("bg-red-100"));
        assert!(badge_class("yellow").contains("bg-yellow-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
    }

    #[test]
    fn test_stock_variant() {
        assert_eq!(stock_variant(StockStatus::Active), "green");
        assert_eq!(stock_variant(StockStatus::LowStock), "yellow");
        assert_eq!(stock_variant(StockStatus::OutOfStock), "red");
    }

    #[test]
    fn test_account_variants() {
        assert_eq!(user_status_variant(UserStatus::Active), "green");
        assert_eq!(user_status_variant(UserStatus::Blocked), "red");
        assert_eq!(order_status_variant(OrderStatus::Processing), "yellow");
        assert_eq!(order_status_variant(OrderStatus::Delivered), "green");
    }
}
