// web_app/api/cart.rs - Shopping cart and order totals
//
// Lines are keyed by (product id, colour). Totals are recomputed from the
// lines on every read; nothing derived is cached on the cart.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::fixtures::tables::DemoCartTable;
use crate::fixtures::SeedTable;
use crate::web_app::api::catalog::CatalogProvider;
use crate::web_app::config::PricingPolicy;
use crate::web_app::model::{CartItem, CartTotals};

/// Order totals under the default pricing policy
pub fn recompute(items: &[CartItem]) -> CartTotals {
    recompute_with(items, &PricingPolicy::default())
}

/// Order totals under `policy`
///
/// Tax is charged on the subtotal only. An empty cart ships for free. Money is
/// rounded to cents, half away from zero.
pub fn recompute_with(items: &[CartItem], policy: &PricingPolicy) -> CartTotals {
    let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
    let shipping = if items.is_empty() {
        Decimal::ZERO
    } else {
        policy.flat_shipping
    };
    let tax = to_cents(subtotal * policy.tax_rate);
    let subtotal = to_cents(subtotal);

    CartTotals {
        subtotal,
        shipping,
        tax,
        total: to_cents(subtotal + shipping + tax),
    }
}

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Quantity selector "+": never above available stock
pub fn step_up(quantity: u32, stock: u32) -> u32 {
    quantity.saturating_add(1).min(stock.max(1))
}

/// Quantity selector "-": never below 1
pub fn step_down(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(1)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Build from lines, merging duplicates
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines, saturating like the line quantities
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Add a line, or merge its quantity into the matching line
    pub fn add(&mut self, item: CartItem) {
        let quantity = item.quantity.max(1);
        match self.line_mut(item.product_id, &item.color) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { quantity, ..item }),
        }
    }

    pub fn increment(&mut self, product_id: i32, color: &str) -> bool {
        match self.line_mut(product_id, color) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Lower a line's quantity by one. A line at 1 is left untouched.
    pub fn decrement(&mut self, product_id: i32, color: &str) -> bool {
        match self.line_mut(product_id, color) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Set a line's quantity; zero is ignored
    pub fn set_quantity(&mut self, product_id: i32, color: &str, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.line_mut(product_id, color) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: i32, color: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.is_line(product_id, color));
        self.items.len() != before
    }

    pub fn totals(&self) -> CartTotals {
        recompute(&self.items)
    }

    pub fn totals_with(&self, policy: &PricingPolicy) -> CartTotals {
        recompute_with(&self.items, policy)
    }

    fn line_mut(&mut self, product_id: i32, color: &str) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.is_line(product_id, color))
    }
}

/// The cart a fresh session starts with
///
/// Seed rows whose product is missing from `catalog` are skipped.
pub fn demo_cart(catalog: &impl CatalogProvider) -> Cart {
    let lines = DemoCartTable::rows().into_iter().filter_map(|seed| {
        match catalog.by_id(seed.product_id) {
            Some(product) => Some(CartItem::from_product(product, seed.color, seed.quantity)),
            None => {
                tracing::warn!(product_id = seed.product_id, "demo cart product missing from catalog");
                None
            }
        }
    });
    Cart::from_items(lines)
}
