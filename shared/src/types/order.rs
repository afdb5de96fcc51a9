//! Order view models

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Cents;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire value used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge color class
    pub fn badge(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge-yellow",
            OrderStatus::InProgress => "badge-blue",
            OrderStatus::Delivered => "badge-green",
            OrderStatus::Cancelled => "badge-red",
        }
    }

    /// Whether the order is still open for the business to act on
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InProgress)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "in_progress" | "in-progress" => Ok(OrderStatus::InProgress),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Unknown order status: {s}")),
        }
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Cents,
}

impl LineItem {
    pub fn new(name: &str, quantity: u32, unit_price: u32) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit_price: Cents(unit_price),
        }
    }
}

/// Customer order as listed on the orders page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub address: String,
    pub items: Vec<LineItem>,
    /// Total as billed; not derived from `items`
    pub total: Cents,
    pub status: OrderStatus,
    pub ordered: String,
    pub estimated_delivery: String,
}
