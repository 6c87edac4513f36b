// fixtures/tables/orders.rs
//
// Past orders, plus the products each account has saved to its wishlist.
// Order lines keep the name and price charged at checkout, so they do not
// follow later catalog changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::fixtures::SeedTable;
use crate::web_app::model::{Order, OrderLine, OrderStatus};

struct OrderSeed {
    id: &'static str,
    user_id: &'static str,
    placed_on: (i32, u32, u32),
    status: OrderStatus,
    /// (name, price in cents, quantity)
    lines: &'static [(&'static str, i64, u32)],
}

impl OrderSeed {
    fn to_order(&self) -> Order {
        let (y, m, d) = self.placed_on;
        Order {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            placed_on: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            status: self.status,
            lines: self
                .lines
                .iter()
                .map(|&(name, cents, quantity)| OrderLine {
                    name: name.to_string(),
                    price: Decimal::new(cents, 2),
                    quantity,
                })
                .collect(),
        }
    }
}

const ORDERS: &[OrderSeed] = &[
    OrderSeed {
        id: "ORD-12345",
        user_id: "USR-1234",
        placed_on: (2023, 11, 15),
        status: OrderStatus::Delivered,
        lines: &[("Modern Sofa", 129900, 1), ("Coffee Table", 49900, 1)],
    },
    OrderSeed {
        id: "ORD-12346",
        user_id: "USR-1234",
        placed_on: (2023, 10, 22),
        status: OrderStatus::Delivered,
        lines: &[("Floor Lamp", 17999, 1), ("Decorative Pillows", 8900, 2)],
    },
    OrderSeed {
        id: "ORD-12347",
        user_id: "USR-1234",
        placed_on: (2023, 12, 5),
        status: OrderStatus::Processing,
        lines: &[("Dining Table", 89900, 1)],
    },
    OrderSeed {
        id: "ORD-12348",
        user_id: "USR-1235",
        placed_on: (2023, 12, 4),
        status: OrderStatus::Shipped,
        lines: &[("Bar Stool", 7500, 2)],
    },
    OrderSeed {
        id: "ORD-12349",
        user_id: "USR-1236",
        placed_on: (2023, 12, 2),
        status: OrderStatus::Delivered,
        lines: &[("Nightstand", 35000, 1)],
    },
    OrderSeed {
        id: "ORD-12350",
        user_id: "USR-1238",
        placed_on: (2023, 12, 6),
        status: OrderStatus::Processing,
        lines: &[("Dresser", 55000, 1)],
    },
    OrderSeed {
        id: "ORD-12351",
        user_id: "USR-1242",
        placed_on: (2023, 11, 28),
        status: OrderStatus::Delivered,
        lines: &[("Pendant Light", 22500, 2)],
    },
];

pub struct OrdersTable;

impl SeedTable for OrdersTable {
    type Row = Order;

    fn rows() -> Vec<Order> {
        ORDERS.iter().map(OrderSeed::to_order).collect()
    }
}

/// A saved product: owning user id and catalog product id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistSeed {
    pub user_id: &'static str,
    pub product_id: i32,
}

pub struct WishlistTable;

impl SeedTable for WishlistTable {
    type Row = WishlistSeed;

    fn rows() -> Vec<WishlistSeed> {
        // Accent Armchair, Bookshelf, Table Lamp
        [10, 6, 19]
            .into_iter()
            .map(|product_id| WishlistSeed { user_id: "USR-1234", product_id })
            .collect()
    }
}
