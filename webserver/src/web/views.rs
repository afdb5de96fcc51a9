//! Template-facing view models
//!
//! Money is formatted and step states derived here so the templates only
//! print values.

use serde::Serialize;
use shared::onboarding::MenuItem;
use shared::orders::actions_for;
use shared::tracking::{map_view, step_views, MapView, StepView};
use shared::{ActiveTicket, Courier, Delivery, FaqEntry, Order, OrderAction, RecentOrder};

/// Option of a `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl Choice {
    pub fn new(value: &'static str, label: &'static str, selected: bool) -> Self {
        Self { value, label, selected }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LineView {
    pub quantity: u32,
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionView {
    pub action: OrderAction,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCard {
    pub id: String,
    pub customer: String,
    pub address: String,
    pub status_label: &'static str,
    pub badge: &'static str,
    pub items: Vec<LineView>,
    pub total: String,
    pub ordered: String,
    pub estimated_delivery: String,
    pub actions: Vec<ActionView>,
}

impl From<&Order> for OrderCard {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            address: order.address.clone(),
            status_label: order.status.label(),
            badge: order.status.badge(),
            items: order
                .items
                .iter()
                .map(|item| LineView {
                    quantity: item.quantity,
                    name: item.name.clone(),
                    price: item.unit_price.to_string(),
                })
                .collect(),
            total: order.total.to_string(),
            ordered: order.ordered.clone(),
            estimated_delivery: order.estimated_delivery.clone(),
            actions: actions_for(order.status)
                .iter()
                .map(|action| ActionView {
                    action: *action,
                    label: action.label(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentOrderRow {
    pub id: String,
    pub customer: String,
    pub item_count: u32,
    pub status: &'static str,
    pub status_label: &'static str,
    pub badge: &'static str,
    pub time: String,
}

impl From<&RecentOrder> for RecentOrderRow {
    fn from(order: &RecentOrder) -> Self {
        Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            item_count: order.item_count,
            status: order.status.as_str(),
            status_label: order.status.label(),
            badge: order.status.badge(),
            time: order.time.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourierView {
    pub name: String,
    pub initials: String,
    pub deliveries_today: u32,
    pub availability: &'static str,
    pub on_delivery: bool,
}

impl From<&Courier> for CourierView {
    fn from(courier: &Courier) -> Self {
        Self {
            name: courier.name.clone(),
            initials: courier.initials(),
            deliveries_today: courier.deliveries_today,
            availability: courier.availability.label(),
            on_delivery: courier.availability == shared::CourierAvailability::OnDelivery,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryCard {
    pub id: String,
    pub customer: String,
    pub courier: String,
    pub status: String,
    pub on_the_way: bool,
    pub address: String,
    pub estimated_time: String,
    pub order_time: String,
    pub delivery_time: Option<String>,
    pub items: Vec<String>,
    pub items_summary: String,
    pub steps: Vec<StepView>,
    pub finished: bool,
    pub map: Option<MapView>,
    pub highlighted: bool,
}

impl DeliveryCard {
    pub fn new(delivery: &Delivery, highlight: Option<&str>) -> Self {
        let steps = step_views(&delivery.steps);

        Self {
            id: delivery.id.clone(),
            customer: delivery.customer.clone(),
            courier: delivery.courier.clone(),
            status: delivery.status.clone(),
            on_the_way: delivery.is_on_the_way(),
            address: delivery.address.clone(),
            estimated_time: delivery.estimated_time.clone(),
            order_time: delivery.order_time.clone(),
            delivery_time: delivery.delivery_time.clone(),
            items: delivery
                .items
                .iter()
                .map(|item| format!("{}x {}", item.quantity, item.name))
                .collect(),
            items_summary: delivery.items_summary(),
            finished: shared::tracking::is_finished(&delivery.steps),
            steps,
            map: map_view(delivery.location.as_ref()),
            highlighted: highlight.is_some_and(|id| id.eq_ignore_ascii_case(&delivery.id)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    pub id: String,
    pub kind: &'static str,
    pub subject: String,
    pub status: &'static str,
    pub in_progress: bool,
    pub created: String,
    pub last_update: String,
}

impl From<&ActiveTicket> for TicketView {
    fn from(ticket: &ActiveTicket) -> Self {
        Self {
            id: ticket.id.clone(),
            kind: ticket.kind.label(),
            subject: ticket.subject.clone(),
            status: ticket.status.label(),
            in_progress: ticket.status == shared::TicketStatus::InProgress,
            created: ticket.created.clone(),
            last_update: ticket.last_update.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqView {
    pub index: usize,
    pub question: String,
    pub answer: String,
}

pub fn faq_views(faqs: &[FaqEntry]) -> Vec<FaqView> {
    faqs.iter()
        .enumerate()
        .map(|(index, faq)| FaqView {
            index,
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub description: String,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.label(),
            price: item.price.clone(),
            description: item.description.clone(),
        }
    }
}
