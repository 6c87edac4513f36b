// fixtures/tables/users.rs
//
// Registered users shown in the admin table. The first row is the account
// the storefront's "My Account" page is signed in as.

use chrono::NaiveDate;

use crate::fixtures::SeedTable;
use crate::web_app::model::{User, UserRole, UserStatus};

struct UserSeed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    role: UserRole,
    status: UserStatus,
    orders: u32,
    joined: (i32, u32, u32),
    points: u32,
}

impl UserSeed {
    fn to_user(&self) -> User {
        let (y, m, d) = self.joined;
        User {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            role: self.role,
            status: self.status,
            order_count: self.orders,
            joined: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            loyalty_points: self.points,
        }
    }
}

const fn customer(
    id: &'static str,
    name: &'static str,
    email: &'static str,
    status: UserStatus,
    orders: u32,
    joined: (i32, u32, u32),
) -> UserSeed {
    UserSeed {
        id,
        name,
        email,
        phone: "",
        role: UserRole::Customer,
        status,
        orders,
        joined,
        points: 0,
    }
}

const USERS: &[UserSeed] = &[
    UserSeed {
        id: "USR-1234",
        name: "Sarah Johnson",
        email: "sarah.johnson@example.com",
        phone: "+1 (555) 123-4567",
        role: UserRole::Customer,
        status: UserStatus::Active,
        orders: 12,
        joined: (2023, 1, 15),
        points: 250,
    },
    customer("USR-1235", "Michael Chen", "michael.chen@example.com", UserStatus::Active, 8, (2023, 2, 22)),
    customer("USR-1236", "Emily Davis", "emily.davis@example.com", UserStatus::Active, 5, (2023, 3, 10)),
    customer("USR-1237", "Robert Wilson", "robert.wilson@example.com", UserStatus::Inactive, 0, (2023, 4, 5)),
    customer("USR-1238", "Lisa Thompson", "lisa.thompson@example.com", UserStatus::Active, 15, (2023, 1, 5)),
    UserSeed {
        id: "USR-1239",
        name: "David Martinez",
        email: "david.martinez@example.com",
        phone: "+1 (555) 010-2030",
        role: UserRole::Admin,
        status: UserStatus::Active,
        orders: 0,
        joined: (2022, 11, 15),
        points: 0,
    },
    customer("USR-1240", "Jennifer Lee", "jennifer.lee@example.com", UserStatus::Active, 3, (2023, 5, 20)),
    customer("USR-1241", "James Brown", "james.brown@example.com", UserStatus::Blocked, 2, (2023, 2, 10)),
    customer("USR-1242", "Maria Garcia", "maria.garcia@example.com", UserStatus::Active, 7, (2023, 3, 15)),
    customer("USR-1243", "John Smith", "john.smith@example.com", UserStatus::Active, 4, (2023, 4, 25)),
];

pub struct UsersTable;

impl SeedTable for UsersTable {
    type Row = User;

    fn rows() -> Vec<User> {
        USERS.iter().map(UserSeed::to_user).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_user_ids_unique() {
        let rows = UsersTable::rows();
        let ids: HashSet<&str> = rows.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_join_dates_parse() {
        for user in UsersTable::rows() {
            assert_ne!(user.joined, NaiveDate::default(), "{} has no join date", user.name);
        }
    }

    #[test]
    fn test_one_admin() {
        let admins = UsersTable::rows().into_iter().filter(|u| u.role == UserRole::Admin).count();
        assert_eq!(admins, 1);
    }
}
