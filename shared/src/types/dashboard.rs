//! Business dashboard view models

use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// Headline order counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: u32,
    pub pending: u32,
    pub in_progress: u32,
    pub delivered: u32,
}

/// Row of the "Recent Orders" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub item_count: u32,
    pub status: OrderStatus,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourierAvailability {
    Active,
    OnDelivery,
}

impl CourierAvailability {
    pub fn label(&self) -> &'static str {
        match self {
            CourierAvailability::Active => "Active",
            CourierAvailability::OnDelivery => "On delivery",
        }
    }
}

/// Delivery person on the dashboard roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courier {
    pub name: String,
    pub deliveries_today: u32,
    pub availability: CourierAvailability,
}

impl Courier {
    /// First letter of each name part, upper-cased ("John Doe" -> "JD")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
