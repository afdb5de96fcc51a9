//! Order list filtering

use serde::{Deserialize, Serialize};

use crate::types::{Order, OrderStatus};

/// Status selector of the order list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parse the `status` query value; empty, "all" and unknown values select every order
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => StatusFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => StatusFilter::All,
            Some(v) => v.parse().map(StatusFilter::Only).unwrap_or_default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Button offered on an order card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    Accept,
    Reject,
    TrackDelivery,
    OrderDetails,
}

impl OrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Accept => "Accept",
            OrderAction::Reject => "Reject",
            OrderAction::TrackDelivery => "Track Delivery",
            OrderAction::OrderDetails => "Order Details",
        }
    }
}

/// Actions available for an order in the given status
pub fn actions_for(status: OrderStatus) -> &'static [OrderAction] {
    match status {
        OrderStatus::Pending => &[OrderAction::Accept, OrderAction::Reject],
        OrderStatus::InProgress => &[OrderAction::TrackDelivery],
        OrderStatus::Delivered | OrderStatus::Cancelled => &[OrderAction::OrderDetails],
    }
}

/// Combined status filter and free-text search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl OrderQuery {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Status must match and the lower-cased search must occur in the id or customer name
    pub fn matches(&self, order: &Order) -> bool {
        if !self.status.matches(order.status) {
            return false;
        }

        let needle = self.search.to_lowercase();
        order.id.to_lowercase().contains(&needle) || order.customer.to_lowercase().contains(&needle)
    }

    /// Matching orders, in catalog order
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}
