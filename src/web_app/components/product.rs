// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard / ProductListRow: one catalog result in grid or list mode
// - ProductGrid: results area with its empty state
// - ProductDetail: full detail view with gallery, swatches and quantity
// - RelatedProducts, ProductNotFound

use leptos::prelude::*;
use leptos_router::components::A;

use super::common::{Badge, Button, PriceDisplay, QuantityStepper, StarRating, StockBadge};
use crate::web_app::api::cart::{step_down, step_up};
use crate::web_app::model::{Product, StockStatus, ViewMode};

/// Shorten `text` to at most `max_chars` characters, ending in "..."
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// `seat_height` / `seat-height` -> `Seat Height`
pub fn title_case_key(key: &str) -> String {
    key.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn product_href(id: i32) -> String {
    format!("/products/{}", id)
}

/// Grid card for one catalog result
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let on_sale = product.savings().is_some();

    view! {
        <A href=product_href(product.id)>
            <div class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                        border border-stone-100 flex flex-col h-full overflow-hidden">
                <div class="relative aspect-square bg-stone-100 overflow-hidden">
                    <img
                        src=product.primary_image().to_string()
                        alt=product.name.clone()
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    />
                    {on_sale.then(|| view! {
                        <div class="absolute top-3 left-3">
                            <Badge variant="red">"Sale"</Badge>
                        </div>
                    })}
                </div>
                <div class="p-4 flex flex-col gap-2 flex-1">
                    <span class="text-xs uppercase tracking-wide text-stone-500">{product.category.clone()}</span>
                    <h3 class="font-semibold text-stone-900 group-hover:text-stone-600 transition-colors">
                        {product.name.clone()}
                    </h3>
                    <StarRating rating=product.rating review_count=product.review_count />
                    <div class="mt-auto">
                        <PriceDisplay price=product.price compare_at=product.compare_at_price />
                    </div>
                </div>
            </div>
        </A>
    }
}

/// Wide row for the list view mode
#[component]
pub fn ProductListRow(product: Product) -> impl IntoView {
    let description = truncate_description(&product.description, 160);

    view! {
        <A href=product_href(product.id)>
            <div class="group flex gap-6 bg-white rounded-xl shadow-sm hover:shadow-lg transition-shadow \
                        border border-stone-100 p-4">
                <img
                    src=product.primary_image().to_string()
                    alt=product.name.clone()
                    class="w-40 h-40 object-cover rounded-lg bg-stone-100"
                />
                <div class="flex flex-col gap-2 flex-1">
                    <div class="flex justify-between items-start">
                        <div>
                            <span class="text-xs uppercase tracking-wide text-stone-500">{product.category.clone()}</span>
                            <h3 class="text-lg font-semibold text-stone-900">{product.name.clone()}</h3>
                        </div>
                        <PriceDisplay price=product.price compare_at=product.compare_at_price highlight=true />
                    </div>
                    <StarRating rating=product.rating review_count=product.review_count />
                    <p class="text-stone-600 text-sm">{description}</p>
                    <div class="flex gap-2 text-xs text-stone-500">
                        <span>{product.style.clone()}</span>
                        <span>"·"</span>
                        <span>{product.material.clone()}</span>
                        <span>"·"</span>
                        <span>{product.color.clone()}</span>
                    </div>
                </div>
            </div>
        </A>
    }
}

/// Results area: grid or list, or the empty state
///
/// The empty state offers "Reset Filters" instead of a blank area.
#[component]
pub fn ProductGrid(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    view_mode: RwSignal<ViewMode>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(|p| p.is_empty())
            fallback=move || view! {
                <div class="text-center py-24 bg-white rounded-2xl border border-dashed border-stone-300">
                    <h3 class="text-xl font-bold text-stone-800 mb-2">"No products found"</h3>
                    <p class="text-stone-500 mb-6">"Try adjusting your filters or search terms."</p>
                    <Button on_click=on_reset>"Reset Filters"</Button>
                </div>
            }
        >
            {move || match view_mode.get() {
                ViewMode::Grid => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || products.get()
                            key=|p| p.id
                            children=|product| view! { <ProductCard product=product /> }
                        />
                    </div>
                }.into_any(),
                ViewMode::List => view! {
                    <div class="flex flex-col gap-4">
                        <For
                            each=move || products.get()
                            key=|p| p.id
                            children=|product| view! { <ProductListRow product=product /> }
                        />
                    </div>
                }.into_any(),
            }}
        </Show>
    }
}

/// Key/value table of product specifications
#[component]
pub fn SpecificationTable(product: Product) -> impl IntoView {
    let rows: Vec<(String, String)> = product
        .specifications
        .iter()
        .map(|(key, value)| (title_case_key(key), value.clone()))
        .collect();

    (!rows.is_empty()).then(|| view! {
        <div class="bg-stone-50 rounded-xl p-6 border border-stone-100">
            <h3 class="text-lg font-bold text-stone-900 mb-4">"Specifications"</h3>
            <dl class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm">
                {rows.into_iter().map(|(key, value)| view! {
                    <div class="flex justify-between border-b border-stone-200 pb-2">
                        <dt class="text-stone-500">{key}</dt>
                        <dd class="font-medium text-stone-900">{value}</dd>
                    </div>
                }).collect_view()}
            </dl>
        </div>
    })
}

/// Full product detail view
///
/// Gallery, colour and quantity selections are local to this view.
#[component]
pub fn ProductDetail(product: Product, low_stock_threshold: u32) -> impl IntoView {
    let images = if product.images.is_empty() {
        vec![product.primary_image().to_string()]
    } else {
        product.images.clone()
    };
    let image_count = images.len();
    let images = StoredValue::new(images);

    let selected_image = RwSignal::new(0usize);
    let selected_color = RwSignal::new(product.default_color().to_string());
    let quantity = RwSignal::new(1u32);

    let stock = product.stock;
    let status = product.stock_status(low_stock_threshold);
    let savings = product.savings();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
            // Gallery
            <div class="space-y-4">
                <div class="aspect-square bg-stone-100 rounded-2xl overflow-hidden">
                    <img
                        src=move || images.with_value(|imgs| imgs.get(selected_image.get()).cloned().unwrap_or_default())
                        alt=product.name.clone()
                        class="w-full h-full object-cover"
                    />
                </div>
                {(image_count > 1).then(|| view! {
                    <div class="flex gap-3">
                        {(0..image_count).map(|index| {
                            let src = images.with_value(|imgs| imgs[index].clone());
                            view! {
                                <button
                                    type="button"
                                    class=move || if selected_image.get() == index {
                                        "w-20 h-20 rounded-lg overflow-hidden ring-2 ring-stone-900"
                                    } else {
                                        "w-20 h-20 rounded-lg overflow-hidden opacity-70 hover:opacity-100"
                                    }
                                    on:click=move |_| selected_image.set(index)
                                >
                                    <img src=src class="w-full h-full object-cover" />
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })}
            </div>

            // Summary
            <div class="space-y-6">
                <div>
                    <span class="text-sm uppercase tracking-wide text-stone-500">{product.category.clone()}</span>
                    <h1 class="text-3xl font-bold text-stone-900 leading-tight mt-1">{product.name.clone()}</h1>
                </div>

                <StarRating rating=product.rating review_count=product.review_count />

                <div class="flex items-center gap-3">
                    <PriceDisplay price=product.price compare_at=product.compare_at_price highlight=true />
                    {savings.map(|saved| view! {
                        <Badge variant="red">{format!("Save {}", crate::web_app::model::format_price(saved))}</Badge>
                    })}
                </div>

                <p class="text-stone-600 leading-relaxed">{product.description.clone()}</p>

                // Colour swatches
                {(!product.colors.is_empty()).then(|| view! {
                    <div class="space-y-2">
                        <span class="text-sm font-medium text-stone-700">
                            "Color: " {move || selected_color.get()}
                        </span>
                        <div class="flex gap-2">
                            {product.colors.clone().into_iter().map(|color| {
                                let for_class = color.clone();
                                let for_click = color.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=move || if selected_color.get() == for_class {
                                            "px-3 py-1.5 text-sm rounded-full border-2 border-stone-900"
                                        } else {
                                            "px-3 py-1.5 text-sm rounded-full border border-stone-300 hover:border-stone-500"
                                        }
                                        on:click=move |_| selected_color.set(for_click.clone())
                                    >
                                        {color}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                })}

                <div class="flex items-center gap-3">
                    <StockBadge status=status />
                    {(status != StockStatus::OutOfStock).then(|| view! {
                        <span class="text-sm text-stone-500">{format!("{} in stock", stock)}</span>
                    })}
                </div>

                <div class="flex items-center gap-4">
                    <QuantityStepper
                        quantity=quantity
                        on_decrement=Callback::new(move |_| quantity.update(|q| *q = step_down(*q)))
                        on_increment=Callback::new(move |_| quantity.update(|q| *q = step_up(*q, stock)))
                        can_increment=Signal::derive(move || quantity.get() < stock)
                    />
                    <Show
                        when=move || { stock > 0 }
                        fallback=|| view! { <Button disabled=true>"Out of Stock"</Button> }
                    >
                        <Button href="/cart">"Add to Cart"</Button>
                    </Show>
                </div>

                {(!product.features.is_empty()).then(|| view! {
                    <div>
                        <h3 class="text-lg font-bold text-stone-900 mb-3">"Features"</h3>
                        <ul class="list-disc list-inside space-y-1 text-stone-600">
                            {product.features.clone().into_iter().map(|feature| view! {
                                <li>{feature}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                })}
            </div>
        </div>

        <div class="mt-12">
            <SpecificationTable product=product.clone() />
        </div>
    }
}

/// "You may also like" strip
#[component]
pub fn RelatedProducts(products: Vec<Product>) -> impl IntoView {
    (!products.is_empty()).then(|| view! {
        <section class="mt-16">
            <h2 class="text-2xl font-bold text-stone-900 mb-6">"You May Also Like"</h2>
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                {products.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
            </div>
        </section>
    })
}

/// Shown for unknown or malformed product ids
#[component]
pub fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="text-center py-24">
            <h1 class="text-3xl font-bold text-stone-900 mb-4">"Product Not Found"</h1>
            <p class="text-stone-500 mb-8">"The product you're looking for doesn't exist."</p>
            <Button href="/products">"Browse Products"</Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_truncation() {
        assert_eq!(truncate_description("Short", 10), "Short");
        assert_eq!(truncate_description("Exactly ten", 11), "Exactly ten");
        assert_eq!(truncate_description("A solid oak table", 7), "A solid...");
    }

    #[test]
    fn test_description_truncation_is_char_safe() {
        // Multi-byte characters must not be split
        assert_eq!(truncate_description("Café crème", 4), "Café...");
    }

    #[test]
    fn test_title_case_key() {
        assert_eq!(title_case_key("seat_height"), "Seat Height");
        assert_eq!(title_case_key("assembly-required"), "Assembly Required");
        assert_eq!(title_case_key("Dimensions"), "Dimensions");
        assert_eq!(title_case_key(""), "");
    }

    #[test]
    fn test_product_href() {
        assert_eq!(product_href(7), "/products/7");
    }
}
