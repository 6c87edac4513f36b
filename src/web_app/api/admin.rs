// web_app/api/admin.rs - Back-office summaries
//
// Everything the admin pages compute from the catalog and the account book:
// stock and user tallies, the row selection shared by both tables, dashboard
// figures and the settings readout.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::web_app::api::catalog::CatalogProvider;
use crate::web_app::config::{
    StoreConfig, ENV_CATALOG_PATH, ENV_FLAT_SHIPPING, ENV_LOW_STOCK_THRESHOLD, ENV_PRICE_CEILING,
    ENV_TAX_RATE,
};
use crate::web_app::model::{format_price, Order, Product, StockStatus, User, UserRole, UserStatus};

/// Product counts per stock status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub active: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    pub fn tally<'a>(products: impl IntoIterator<Item = &'a Product>, low_stock_threshold: u32) -> Self {
        products
            .into_iter()
            .fold(StockSummary::default(), |mut summary, product| {
                match product.stock_status(low_stock_threshold) {
                    StockStatus::Active => summary.active += 1,
                    StockStatus::LowStock => summary.low_stock += 1,
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                }
                summary
            })
    }
}

/// User counts per account status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserSummary {
    pub active: usize,
    pub inactive: usize,
    pub blocked: usize,
}

impl UserSummary {
    pub fn tally<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        users.into_iter().fold(UserSummary::default(), |mut summary, user| {
            match user.status {
                UserStatus::Active => summary.active += 1,
                UserStatus::Inactive => summary.inactive += 1,
                UserStatus::Blocked => summary.blocked += 1,
            }
            summary
        })
    }
}

/// Checked rows of an admin table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<K: Ord> {
    keys: BTreeSet<K>,
}

impl<K: Ord> Default for Selection<K> {
    fn default() -> Self {
        Selection { keys: BTreeSet::new() }
    }
}

impl<K: Ord + Clone> Selection<K> {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Flip one row; returns whether it is now selected
    pub fn toggle(&mut self, key: K) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when `rows` is non-empty and every row in it is selected
    pub fn all_selected(&self, rows: &[K]) -> bool {
        !rows.is_empty() && rows.iter().all(|key| self.keys.contains(key))
    }

    /// Header checkbox: deselect `rows` if all are selected, otherwise select them all
    pub fn toggle_all(&mut self, rows: &[K]) {
        if self.all_selected(rows) {
            for key in rows {
                self.keys.remove(key);
            }
        } else {
            self.keys.extend(rows.iter().cloned());
        }
    }
}

/// Users matching a free-text query and optional role/status
///
/// The query matches name, email or id, case-insensitively. Table order is kept.
pub fn filter_users<'a>(
    users: &'a [User],
    query: &str,
    role: Option<UserRole>,
    status: Option<UserStatus>,
) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| role.map_or(true, |r| u.role == r))
        .filter(|u| status.map_or(true, |s| u.status == s))
        .filter(|u| {
            needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
                || u.id.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Headline figures for the dashboard cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub revenue: Decimal,
    pub orders: usize,
    pub products: usize,
    pub active_users: usize,
}

impl DashboardStats {
    pub fn compute(catalog: &impl CatalogProvider, users: &[User], orders: &[Order]) -> Self {
        DashboardStats {
            revenue: orders.iter().map(Order::total).sum(),
            orders: orders.len(),
            products: catalog.list_all().len(),
            active_users: UserSummary::tally(users).active,
        }
    }
}

/// One row of the dashboard's "Recent Sales" card
#[derive(Clone, Debug, PartialEq)]
pub struct RecentSale {
    pub order_id: String,
    pub customer: String,
    pub email: String,
    pub amount: Decimal,
    pub placed_on: NaiveDate,
}

/// The `count` newest orders, with their customer's name and email
///
/// Orders whose user is unknown are listed as "Guest".
pub fn recent_sales(orders: &[Order], users: &[User], count: usize) -> Vec<RecentSale> {
    let mut newest: Vec<&Order> = orders.iter().collect();
    newest.sort_by(|a, b| b.placed_on.cmp(&a.placed_on));

    newest
        .into_iter()
        .take(count)
        .map(|order| {
            let user = users.iter().find(|u| u.id == order.user_id);
            RecentSale {
                order_id: order.id.clone(),
                customer: user.map_or_else(|| "Guest".to_string(), |u| u.name.clone()),
                email: user.map(|u| u.email.clone()).unwrap_or_default(),
                amount: order.total(),
                placed_on: order.placed_on,
            }
        })
        .collect()
}

/// Best sellers by units, paired with lifetime revenue at the current price
pub fn top_products<C: CatalogProvider>(catalog: &C, count: usize) -> Vec<(&Product, Decimal)> {
    catalog
        .bestsellers()
        .into_iter()
        .take(count)
        .map(|product| (product, product.price * Decimal::from(product.units_sold)))
        .collect()
}

/// A read-only line of the settings page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingRow {
    pub label: &'static str,
    pub value: String,
    /// Environment variable that overrides it
    pub env_var: &'static str,
}

/// The effective store configuration, one row per setting
pub fn settings_rows(config: &StoreConfig) -> Vec<SettingRow> {
    let shipping = if config.pricing.flat_shipping.is_zero() {
        "Free".to_string()
    } else {
        format_price(config.pricing.flat_shipping)
    };
    let catalog = config
        .catalog_path
        .as_ref()
        .map_or_else(|| "Bundled catalog".to_string(), |path| path.display().to_string());

    vec![
        SettingRow {
            label: "Tax Rate",
            value: format!("{}%", (config.pricing.tax_rate * Decimal::ONE_HUNDRED).normalize()),
            env_var: ENV_TAX_RATE,
        },
        SettingRow {
            label: "Flat Shipping",
            value: shipping,
            env_var: ENV_FLAT_SHIPPING,
        },
        SettingRow {
            label: "Low Stock Threshold",
            value: format!("{} units", config.low_stock_threshold),
            env_var: ENV_LOW_STOCK_THRESHOLD,
        },
        SettingRow {
            label: "Price Filter Ceiling",
            value: format_price(config.price_ceiling),
            env_var: ENV_PRICE_CEILING,
        },
        SettingRow {
            label: "Catalog Source",
            value: catalog,
            env_var: ENV_CATALOG_PATH,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::api::accounts::AccountBook;
    use crate::web_app::api::catalog::StaticCatalog;
    use crate::web_app::config::PricingPolicy;
    use crate::web_app::model::LOW_STOCK_THRESHOLD;

    #[test]
    fn test_stock_summary_covers_catalog() {
        let catalog = StaticCatalog::bundled();
        let summary = StockSummary::tally(catalog.list_all(), LOW_STOCK_THRESHOLD);
        assert_eq!(
            summary.active + summary.low_stock + summary.out_of_stock,
            catalog.list_all().len()
        );
        // Nightstand and Wardrobe are sold out
        assert_eq!(summary.out_of_stock, 2);
    }

    #[test]
    fn test_stock_summary_respects_threshold() {
        let catalog = StaticCatalog::bundled();
        let strict = StockSummary::tally(catalog.list_all(), 0);
        assert_eq!(strict.low_stock, 0);
    }

    #[test]
    fn test_user_summary() {
        let book = AccountBook::bundled();
        let summary = UserSummary::tally(book.users());
        assert_eq!(summary, UserSummary { active: 8, inactive: 1, blocked: 1 });
    }

    #[test]
    fn test_selection_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(3));
        assert!(selection.contains(&3));
        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_toggle_all() {
        let rows = vec!["USR-1", "USR-2", "USR-3"];
        let mut selection = Selection::new();
        selection.toggle("USR-2");

        selection.toggle_all(&rows);
        assert!(selection.all_selected(&rows));
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&rows);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_toggle_all_keeps_rows_outside_page() {
        let mut selection = Selection::new();
        selection.toggle(99);
        selection.toggle_all(&[1, 2]);
        selection.toggle_all(&[1, 2]);
        assert!(selection.contains(&99));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_empty_rows_are_never_all_selected() {
        let selection: Selection<i32> = Selection::new();
        assert!(!selection.all_selected(&[]));
    }

    #[test]
    fn test_filter_users() {
        let book = AccountBook::bundled();
        let names = |users: Vec<&User>| users.into_iter().map(|u| u.name.clone()).collect::<Vec<_>>();

        assert_eq!(book.users().len(), filter_users(book.users(), "  ", None, None).len());
        assert_eq!(names(filter_users(book.users(), "CHEN", None, None)), vec!["Michael Chen"]);
        assert_eq!(names(filter_users(book.users(), "usr-1241", None, None)), vec!["James Brown"]);
        assert_eq!(
            names(filter_users(book.users(), "", Some(UserRole::Admin), None)),
            vec!["David Martinez"]
        );
        assert_eq!(
            names(filter_users(book.users(), "", None, Some(UserStatus::Inactive))),
            vec!["Robert Wilson"]
        );
        assert!(filter_users(book.users(), "chen", Some(UserRole::Admin), None).is_empty());
    }

    #[test]
    fn test_dashboard_stats() {
        let book = AccountBook::bundled();
        let stats = DashboardStats::compute(&StaticCatalog::bundled(), book.users(), book.orders());
        assert_eq!(stats.revenue, Decimal::new(455499, 2));
        assert_eq!(stats.orders, 7);
        assert_eq!(stats.products, 24);
        assert_eq!(stats.active_users, 8);
    }

    #[test]
    fn test_recent_sales_newest_first() {
        let book = AccountBook::bundled();
        let sales = recent_sales(book.orders(), book.users(), 3);
        let rows: Vec<(&str, Decimal)> = sales.iter().map(|s| (s.customer.as_str(), s.amount)).collect();
        assert_eq!(
            rows,
            vec![
                ("Lisa Thompson", Decimal::from(550)),
                ("Sarah Johnson", Decimal::from(899)),
                ("Michael Chen", Decimal::from(150)),
            ]
        );
    }

    #[test]
    fn test_recent_sales_unknown_user_is_guest() {
        let book = AccountBook::bundled();
        let sales = recent_sales(book.orders(), &[], 1);
        assert_eq!(sales[0].customer, "Guest");
        assert_eq!(sales[0].email, "");
    }

    #[test]
    fn test_top_products() {
        let catalog = StaticCatalog::bundled();
        let top = top_products(&catalog, 2);
        let names: Vec<&str> = top.iter().map(|(p, _)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Floor Lamp", "Table Lamp"]);
        let (lamp, revenue) = top[0];
        assert_eq!(revenue, lamp.price * Decimal::from(520));
    }

    #[test]
    fn test_settings_rows_defaults() {
        let rows = settings_rows(&StoreConfig::default());
        let value = |label: &str| rows.iter().find(|r| r.label == label).map(|r| r.value.clone());
        assert_eq!(value("Tax Rate").as_deref(), Some("8%"));
        assert_eq!(value("Flat Shipping").as_deref(), Some("Free"));
        assert_eq!(value("Low Stock Threshold").as_deref(), Some("5 units"));
        assert_eq!(value("Price Filter Ceiling").as_deref(), Some("$5,000.00"));
        assert_eq!(value("Catalog Source").as_deref(), Some("Bundled catalog"));
    }

    #[test]
    fn test_settings_rows_overrides() {
        let config = StoreConfig {
            pricing: PricingPolicy {
                tax_rate: Decimal::new(725, 4),
                flat_shipping: Decimal::new(4999, 2),
            },
            catalog_path: Some("/srv/catalog.json".into()),
            ..StoreConfig::default()
        };
        let rows = settings_rows(&config);
        assert_eq!(rows[0].value, "7.25%");
        assert_eq!(rows[0].env_var, ENV_TAX_RATE);
        assert_eq!(rows[1].value, "$49.99");
        assert_eq!(rows[4].value, "/srv/catalog.json");
    }
}
