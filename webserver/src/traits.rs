//! Service trait definitions for dependency injection
//!
//! Side effects of the pages go through these traits so handlers can be tested
//! against mocks.

use async_trait::async_trait;

use shared::{DeliveryTab, RecentOrder, Registration, TicketSubmission};

use crate::error::WebServerResult;

/// Stand-in for the backend that would receive what users submit
#[mockall::automock]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// A support ticket passed validation
    async fn ticket_submitted(&self, ticket: &TicketSubmission) -> WebServerResult<()>;

    /// The onboarding wizard was completed
    async fn business_registered(&self, registration: &Registration) -> WebServerResult<()>;

    /// A pending dashboard order was accepted
    async fn order_accepted(&self, order: &RecentOrder) -> WebServerResult<()>;

    /// Someone searched the tracking page; `found` names the tab holding the delivery
    async fn order_lookup(&self, order_id: &str, found: Option<DeliveryTab>) -> WebServerResult<()>;
}

/// Source of the stylesheet, script and other files under `/static`
#[mockall::automock]
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn serve(&self, path: &str) -> WebServerResult<Asset>;
}

/// Static asset response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl Asset {
    pub fn new(content: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: content_type.into(),
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }
}
