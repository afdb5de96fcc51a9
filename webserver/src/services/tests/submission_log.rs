//! Tests for the logging submission sink

use super::fixtures::{sample_registration, sample_ticket};
use crate::services::LogSubmissionSink;
use crate::traits::SubmissionSink;
use shared::{catalog, DeliveryTab};

#[tokio::test]
async fn test_every_submission_is_accepted() {
    shared::logging::init_tracing_with_level(Some("debug"));
    let sink = LogSubmissionSink::new();

    sink.ticket_submitted(&sample_ticket()).await.unwrap();
    sink.business_registered(&sample_registration()).await.unwrap();

    let order = catalog::accept_recent_order("ORD-1242").unwrap();
    sink.order_accepted(&order).await.unwrap();

    sink.order_lookup("ORD-1241", Some(DeliveryTab::Completed)).await.unwrap();
    sink.order_lookup("ORD-0000", None).await.unwrap();
}
