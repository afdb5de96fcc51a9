//! Submission sink that only logs
//!
//! Nothing is stored or forwarded; each submission becomes a structured log event.

use async_trait::async_trait;
use shared::logging;
use shared::{page_debug, page_info, DeliveryTab, Page, RecentOrder, Registration, TicketSubmission};

use crate::error::WebServerResult;
use crate::traits::SubmissionSink;

#[derive(Debug, Clone, Default)]
pub struct LogSubmissionSink;

impl LogSubmissionSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for LogSubmissionSink {
    async fn ticket_submitted(&self, ticket: &TicketSubmission) -> WebServerResult<()> {
        page_info!(
            Page::Support,
            ticket_type = ticket.ticket_type.as_str(),
            "🎫 Submitting support ticket: {}",
            ticket.subject
        );
        page_debug!(Page::Support, "Ticket message: {}", ticket.message);
        Ok(())
    }

    async fn business_registered(&self, registration: &Registration) -> WebServerResult<()> {
        let payload = serde_json::to_string(registration)?;

        page_info!(
            Page::Register,
            menu_items = registration.menu_items.len(),
            "🏪 Submitting business data for {} (owner {} {})",
            registration.business.name,
            registration.owner.first_name,
            registration.owner.last_name
        );
        page_debug!(Page::Register, "Registration payload: {}", payload);
        Ok(())
    }

    async fn order_accepted(&self, order: &RecentOrder) -> WebServerResult<()> {
        logging::log_success(
            Page::Dashboard,
            &format!("Accepted order {} for {} ({} items)", order.id, order.customer, order.item_count),
        );
        Ok(())
    }

    async fn order_lookup(&self, order_id: &str, found: Option<DeliveryTab>) -> WebServerResult<()> {
        match found {
            Some(tab) => {
                page_info!(Page::Tracking, tab = tab.as_str(), "🔎 Searching for order: {}", order_id);
            }
            None => {
                page_info!(Page::Tracking, "🔎 Searching for order: {} (no match)", order_id);
            }
        }
        Ok(())
    }
}
