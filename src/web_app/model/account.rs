// web_app/model/account.rs - Customer accounts and order history
//
// Records behind the account dashboard and the admin user table. Like the
// catalog they are read-only seed data; order totals are derived from the
// lines, never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Customer,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Customer, UserRole::Admin];

    /// Inverse of `Display`; anything else (including "") is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.to_string() == label)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Customer => write!(f, "Customer"),
            UserRole::Admin => write!(f, "Admin"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Blocked,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Inactive, UserStatus::Blocked];

    /// Inverse of `Display`; anything else (including "") is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.to_string() == label)
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
            UserStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

/// A registered customer or staff member
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// e.g. `USR-1234`
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Lifetime order count shown in the admin table
    pub order_count: u32,
    pub joined: NaiveDate,
    pub loyalty_points: u32,
}

impl User {
    /// Avatar fallback: first letter of each word, upper-cased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// "January 2023"
    pub fn member_since(&self) -> String {
        self.joined.format("%B %Y").to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Processing => write!(f, "Processing"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

/// A purchased line, priced as it was at checkout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// e.g. `ORD-12345`
    pub id: String,
    pub user_id: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// "1 item" / "3 items", counting lines
    pub fn item_label(&self) -> String {
        match self.lines.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: "USR-1".to_string(),
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            role: UserRole::Customer,
            status: UserStatus::Active,
            order_count: 0,
            joined: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            loyalty_points: 0,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("Sarah Johnson").initials(), "SJ");
        assert_eq!(user("maria  de la cruz").initials(), "MDLC");
        assert_eq!(user("").initials(), "");
    }

    #[test]
    fn test_from_label() {
        assert_eq!(UserRole::from_label("Admin"), Some(UserRole::Admin));
        assert_eq!(UserStatus::from_label("Blocked"), Some(UserStatus::Blocked));
        assert_eq!(UserStatus::from_label(""), None);
        assert_eq!(UserRole::from_label("admin"), None);
    }

    #[test]
    fn test_member_since() {
        assert_eq!(user("Sarah Johnson").member_since(), "January 2023");
    }

    #[test]
    fn test_order_total_and_label() {
        let order = Order {
            id: "ORD-1".to_string(),
            user_id: "USR-1".to_string(),
            placed_on: NaiveDate::from_ymd_opt(2023, 10, 22).unwrap(),
            status: OrderStatus::Delivered,
            lines: vec![
                OrderLine { name: "Floor Lamp".to_string(), price: Decimal::new(17999, 2), quantity: 1 },
                OrderLine { name: "Pillow".to_string(), price: Decimal::from(89), quantity: 2 },
            ],
        };
        assert_eq!(order.total(), Decimal::new(35799, 2));
        assert_eq!(order.item_label(), "2 items");
    }
}
