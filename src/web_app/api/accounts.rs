// web_app/api/accounts.rs - Users, order history and wishlists
//
// Read-only, like the catalog. `AccountBook` is built from the seed tables
// once and shared process-wide; the storefront has no sign-in, so "My
// Account" always shows `DEMO_ACCOUNT_ID`.

use std::sync::OnceLock;

use crate::fixtures::tables::{OrdersTable, UsersTable, WishlistTable};
use crate::fixtures::SeedTable;
use crate::web_app::api::catalog::CatalogProvider;
use crate::web_app::model::{Order, Product, User};

/// The account the storefront is signed in as
pub const DEMO_ACCOUNT_ID: &str = "USR-1234";

static ACCOUNTS: OnceLock<AccountBook> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct AccountBook {
    users: Vec<User>,
    orders: Vec<Order>,
    /// (user id, product id)
    wishlist: Vec<(String, i32)>,
}

impl AccountBook {
    pub fn bundled() -> Self {
        AccountBook {
            users: UsersTable::rows(),
            orders: OrdersTable::rows(),
            wishlist: WishlistTable::rows()
                .into_iter()
                .map(|seed| (seed.user_id.to_string(), seed.product_id))
                .collect(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// A user's orders, newest first
    pub fn orders_for(&self, user_id: &str) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.iter().filter(|o| o.user_id == user_id).collect();
        orders.sort_by(|a, b| b.placed_on.cmp(&a.placed_on));
        orders
    }

    /// Saved products still present in `catalog`, in the order they were saved
    pub fn wishlist_for<'c, C: CatalogProvider>(&self, user_id: &str, catalog: &'c C) -> Vec<&'c Product> {
        self.wishlist
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .filter_map(|&(_, product_id)| {
                let product = catalog.by_id(product_id);
                if product.is_none() {
                    tracing::warn!(product_id, user_id, "wishlist product missing from catalog");
                }
                product
            })
            .collect()
    }
}

pub fn accounts() -> &'static AccountBook {
    ACCOUNTS.get_or_init(AccountBook::bundled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::api::catalog::StaticCatalog;

    #[test]
    fn test_demo_account_exists() {
        let book = AccountBook::bundled();
        let user = book.user(DEMO_ACCOUNT_ID).unwrap();
        assert_eq!(user.name, "Sarah Johnson");
        assert!(book.user("USR-0000").is_none());
    }

    #[test]
    fn test_orders_for_newest_first() {
        let book = AccountBook::bundled();
        let ids: Vec<&str> = book.orders_for(DEMO_ACCOUNT_ID).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-12347", "ORD-12345", "ORD-12346"]);
        assert!(book.orders_for("USR-1237").is_empty());
    }

    #[test]
    fn test_wishlist_resolves_against_catalog() {
        let book = AccountBook::bundled();
        let catalog = StaticCatalog::bundled();
        let names: Vec<&str> = book
            .wishlist_for(DEMO_ACCOUNT_ID, &catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Accent Armchair", "Bookshelf", "Table Lamp"]);
    }
}
