//! Mock catalog backing every page
//!
//! The records are literals; nothing here is ever written back.

use crate::errors::{SharedError, SharedResult};
use crate::types::{
    ActiveTicket, Cents, Courier, CourierAvailability, Delivery, DeliveryItem, DeliveryTab,
    FaqEntry, GeoPoint, LineItem, LocationData, Order, OrderStats, OrderStatus, RecentOrder,
    TicketStatus, TicketType, TrackingStep,
};

const STEP_RECEIVED: &str = "Order Received";
const STEP_PREPARING: &str = "Preparing";
const STEP_READY: &str = "Ready for Pickup";
const STEP_ON_THE_WAY: &str = "On the Way";
const STEP_DELIVERED: &str = "Delivered";

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    customer: &str,
    address: &str,
    items: Vec<LineItem>,
    total: u32,
    status: OrderStatus,
    ordered: &str,
    estimated_delivery: &str,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        address: address.to_string(),
        items,
        total: Cents(total),
        status,
        ordered: ordered.to_string(),
        estimated_delivery: estimated_delivery.to_string(),
    }
}

/// Orders listed on the order management page, newest first
pub fn orders() -> Vec<Order> {
    vec![
        order(
            "ORD-1243",
            "John Smith",
            "123 Main St, Anytown",
            vec![
                LineItem::new("Veggie Burger", 1, 899),
                LineItem::new("French Fries", 1, 399),
                LineItem::new("Soda", 1, 199),
            ],
            1497,
            OrderStatus::Pending,
            "10 mins ago",
            "30-40 mins",
        ),
        order(
            "ORD-1242",
            "Emma Johnson",
            "456 Oak Ave, Somewhere",
            vec![LineItem::new("Chicken Wings", 2, 999)],
            1998,
            OrderStatus::InProgress,
            "15 mins ago",
            "15-25 mins",
        ),
        order(
            "ORD-1241",
            "Michael Brown",
            "789 Pine Rd, Elsewhere",
            vec![
                LineItem::new("Pepperoni Pizza", 1, 1299),
                LineItem::new("Garlic Bread", 1, 499),
            ],
            1798,
            OrderStatus::Delivered,
            "35 mins ago",
            "Delivered",
        ),
        order(
            "ORD-1240",
            "Sarah Wilson",
            "101 Elm Blvd, Nowhere",
            vec![
                LineItem::new("Caesar Salad", 1, 799),
                LineItem::new("Grilled Chicken", 1, 1099),
                LineItem::new("Iced Tea", 2, 199),
            ],
            2296,
            OrderStatus::Delivered,
            "45 mins ago",
            "Delivered",
        ),
        order(
            "ORD-1239",
            "David Lee",
            "202 Maple Dr, Anywhere",
            vec![
                LineItem::new("Beef Tacos", 3, 299),
                LineItem::new("Chips & Salsa", 1, 499),
                LineItem::new("Horchata", 1, 249),
            ],
            1646,
            OrderStatus::Cancelled,
            "1 hour ago",
            "Cancelled",
        ),
    ]
}

fn items(entries: &[(&str, u32)]) -> Vec<DeliveryItem> {
    entries
        .iter()
        .map(|(name, quantity)| DeliveryItem {
            name: name.to_string(),
            quantity: *quantity,
        })
        .collect()
}

/// Deliveries still in flight
pub fn active_deliveries() -> Vec<Delivery> {
    vec![
        Delivery {
            id: "ORD-1243".to_string(),
            customer: "John Smith".to_string(),
            courier: "Alex Rodriguez".to_string(),
            status: "Preparing".to_string(),
            address: "123 Main St, Anytown".to_string(),
            estimated_time: "30-40 mins".to_string(),
            order_time: "10 mins ago".to_string(),
            delivery_time: None,
            items: items(&[("Veggie Burger", 1), ("French Fries", 1), ("Soda", 1)]),
            steps: vec![
                TrackingStep::done(STEP_RECEIVED, "10:15 AM"),
                TrackingStep::done(STEP_PREPARING, "10:20 AM"),
                TrackingStep::outstanding(STEP_READY),
                TrackingStep::outstanding(STEP_ON_THE_WAY),
                TrackingStep::outstanding(STEP_DELIVERED),
            ],
            location: Some(LocationData {
                restaurant: Some(GeoPoint::new(40.712776, -74.005974)),
                destination: Some(GeoPoint::new(40.712776, -74.015974)),
                courier: Some(GeoPoint::new(40.712776, -74.005974)),
            }),
        },
        Delivery {
            id: "ORD-1242".to_string(),
            customer: "Emma Johnson".to_string(),
            courier: "Maria Garcia".to_string(),
            status: "On the Way".to_string(),
            address: "456 Oak Ave, Somewhere".to_string(),
            estimated_time: "10-15 mins".to_string(),
            order_time: "25 mins ago".to_string(),
            delivery_time: None,
            items: items(&[("Chicken Wings", 2)]),
            steps: vec![
                TrackingStep::done(STEP_RECEIVED, "10:00 AM"),
                TrackingStep::done(STEP_PREPARING, "10:05 AM"),
                TrackingStep::done(STEP_READY, "10:15 AM"),
                TrackingStep::done(STEP_ON_THE_WAY, "10:20 AM"),
                TrackingStep::outstanding(STEP_DELIVERED),
            ],
            location: Some(LocationData {
                restaurant: Some(GeoPoint::new(40.722776, -74.015974)),
                destination: Some(GeoPoint::new(40.732776, -74.025974)),
                courier: Some(GeoPoint::new(40.728776, -74.022974)),
            }),
        },
    ]
}

/// Deliveries that reached the customer
pub fn completed_deliveries() -> Vec<Delivery> {
    vec![
        Delivery {
            id: "ORD-1241".to_string(),
            customer: "Michael Brown".to_string(),
            courier: "John Doe".to_string(),
            status: "Delivered".to_string(),
            address: "789 Pine Rd, Elsewhere".to_string(),
            estimated_time: "Delivered".to_string(),
            order_time: "35 mins ago".to_string(),
            delivery_time: Some("15 mins ago".to_string()),
            items: items(&[("Pepperoni Pizza", 1), ("Garlic Bread", 1)]),
            steps: vec![
                TrackingStep::done(STEP_RECEIVED, "9:30 AM"),
                TrackingStep::done(STEP_PREPARING, "9:35 AM"),
                TrackingStep::done(STEP_READY, "9:45 AM"),
                TrackingStep::done(STEP_ON_THE_WAY, "9:50 AM"),
                TrackingStep::done(STEP_DELIVERED, "10:05 AM"),
            ],
            location: None,
        },
        Delivery {
            id: "ORD-1240".to_string(),
            customer: "Sarah Wilson".to_string(),
            courier: "Carlos Sanchez".to_string(),
            status: "Delivered".to_string(),
            address: "101 Elm Blvd, Nowhere".to_string(),
            estimated_time: "Delivered".to_string(),
            order_time: "1 hour ago".to_string(),
            delivery_time: Some("25 mins ago".to_string()),
            items: items(&[("Caesar Salad", 1), ("Grilled Chicken", 1), ("Iced Tea", 2)]),
            steps: vec![
                TrackingStep::done(STEP_RECEIVED, "9:15 AM"),
                TrackingStep::done(STEP_PREPARING, "9:20 AM"),
                TrackingStep::done(STEP_READY, "9:30 AM"),
                TrackingStep::done(STEP_ON_THE_WAY, "9:35 AM"),
                TrackingStep::done(STEP_DELIVERED, "9:55 AM"),
            ],
            location: None,
        },
    ]
}

/// Case-insensitive exact-id lookup across both tracking tabs
pub fn find_delivery(id: &str) -> Option<(DeliveryTab, Delivery)> {
    let id = id.trim();
    let matches = |delivery: &Delivery| delivery.id.eq_ignore_ascii_case(id);

    active_deliveries()
        .into_iter()
        .find(matches)
        .map(|d| (DeliveryTab::Active, d))
        .or_else(|| {
            completed_deliveries()
                .into_iter()
                .find(matches)
                .map(|d| (DeliveryTab::Completed, d))
        })
}

pub fn active_tickets() -> Vec<ActiveTicket> {
    vec![
        ActiveTicket {
            id: "TCK-2453".to_string(),
            kind: TicketType::DeliveryIssue,
            subject: "Order #ORD-1236 delayed".to_string(),
            status: TicketStatus::InProgress,
            created: "2 days ago".to_string(),
            last_update: "5 hours ago".to_string(),
        },
        ActiveTicket {
            id: "TCK-2451".to_string(),
            kind: TicketType::AccountIssue,
            subject: "Can't update business profile".to_string(),
            status: TicketStatus::AwaitingResponse,
            created: "3 days ago".to_string(),
            last_update: "1 day ago".to_string(),
        },
    ]
}

pub fn faqs() -> Vec<FaqEntry> {
    [
        (
            "How can I sign up my business for QuickBiteRush?",
            "To sign up your business, click on the 'Register' button in the top navigation menu. Follow the step-by-step guide to complete your business profile, add your menu items, and set up your delivery preferences.",
        ),
        (
            "How long does it take to deliver an order?",
            "Our platform aims to deliver orders within 30 minutes. The exact delivery time depends on various factors including distance, order complexity, and current demand. You can always check the estimated delivery time for each order in your dashboard.",
        ),
        (
            "How do I track my orders in real-time?",
            "You can track all active orders in real-time by navigating to the 'Tracking' page. Here, you'll see a live map with the location of your delivery personnel and estimated arrival times.",
        ),
        (
            "What happens if an order is late or there's a delivery issue?",
            "If there's an issue with any delivery, you can report it immediately through the 'Support' section. Our team will investigate and resolve the issue as quickly as possible. You can also contact the delivery person directly through the tracking interface.",
        ),
        (
            "How do I manage my menu items and update prices?",
            "You can manage all your menu items from the 'Menu' tab in your dashboard. Here, you can add new items, update prices, mark items as unavailable, and organize your menu categories.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

pub fn order_stats() -> OrderStats {
    OrderStats {
        total: 157,
        pending: 12,
        in_progress: 25,
        delivered: 120,
    }
}

pub fn recent_orders() -> Vec<RecentOrder> {
    [
        ("ORD-1243", "John Smith", 3, OrderStatus::InProgress, "10 mins ago"),
        ("ORD-1242", "Emma Johnson", 1, OrderStatus::Pending, "15 mins ago"),
        ("ORD-1241", "Michael Brown", 2, OrderStatus::Delivered, "35 mins ago"),
        ("ORD-1240", "Sarah Wilson", 4, OrderStatus::Delivered, "45 mins ago"),
    ]
    .into_iter()
    .map(|(id, customer, item_count, status, time)| RecentOrder {
        id: id.to_string(),
        customer: customer.to_string(),
        item_count,
        status,
        time: time.to_string(),
    })
    .collect()
}

pub fn couriers() -> Vec<Courier> {
    [
        ("John Doe", 5, CourierAvailability::Active),
        ("Jane Smith", 3, CourierAvailability::OnDelivery),
        ("Robert Johnson", 4, CourierAvailability::Active),
    ]
    .into_iter()
    .map(|(name, deliveries_today, availability)| Courier {
        name: name.to_string(),
        deliveries_today,
        availability,
    })
    .collect()
}

/// Simulated acceptance of a dashboard order.
///
/// Nothing is mutated; the caller only learns whether the order could have
/// been accepted.
pub fn accept_recent_order(id: &str) -> SharedResult<RecentOrder> {
    let order = recent_orders()
        .into_iter()
        .find(|order| order.id == id)
        .ok_or_else(|| SharedError::OrderNotFound { id: id.to_string() })?;

    if order.status != OrderStatus::Pending {
        return Err(SharedError::OrderNotPending {
            id: order.id,
            status: order.status,
        });
    }

    Ok(order)
}
