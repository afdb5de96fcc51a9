//! Integration tests for the rendered pages
//!
//! Each test drives the full router, templates included.

mod helpers;

use axum::http::StatusCode;
use quickbite_web::traits::MockSubmissionSink;
use shared::DeliveryTab;

use helpers::*;

#[tokio::test]
async fn test_every_page_renders() {
    let router = quiet_router();

    for (uri, heading) in [
        ("/", "How It Works"),
        ("/dashboard", "Recent Orders"),
        ("/orders", "Showing 5 of 5 orders"),
        ("/tracking", "Active Deliveries"),
        ("/support", "Frequently Asked Questions"),
        ("/register", "Business Information"),
    ] {
        let (status, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(heading), "{uri} should contain {heading}");
        assert!(body.contains("All rights reserved."), "{uri} should have the footer");
    }
}

#[tokio::test]
async fn test_nav_marks_current_page() {
    let router = quiet_router();
    let (_, body) = get(&router, "/support").await;
    assert!(body.contains(r#"href="/support" class="nav-link active""#));
    assert!(!body.contains(r#"href="/orders" class="nav-link active""#));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let router = quiet_router();
    let (status, body) = get(&router, "/menu/secret").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Oops! Page not found"));
    assert!(body.contains("Return to Home"));
    assert!(body.contains("secret"));
}

#[tokio::test]
async fn test_orders_status_filter() {
    let router = quiet_router();
    let (status, body) = get(&router, "/orders?status=delivered").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ORD-1241"));
    assert!(body.contains("ORD-1240"));
    assert!(!body.contains("ORD-1243"));
    assert!(body.contains("Showing 2 of 5 orders"));
}

#[tokio::test]
async fn test_orders_search_without_match() {
    let router = quiet_router();
    let (_, body) = get(&router, "/orders?q=nobody&status=all").await;

    assert!(body.contains("No orders found"));
    assert!(!body.contains("Showing 0 of 5 orders"));
    assert!(!body.contains(r#"class="pagination""#));
}

#[tokio::test]
async fn test_unknown_status_filter_lists_everything() {
    let router = quiet_router();
    let (status, body) = get(&router, "/orders?status=lost").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 5 of 5 orders"));
}

#[tokio::test]
async fn test_dashboard_placeholder_tab() {
    let router = quiet_router();
    let (_, body) = get(&router, "/dashboard?tab=menu").await;

    assert!(body.contains("Menu Management"));
    assert!(!body.contains("Recent Orders"));
}

#[tokio::test]
async fn test_accept_pending_order() {
    let mut sink = MockSubmissionSink::new();
    sink.expect_order_accepted()
        .withf(|order| order.id == "ORD-1242")
        .times(1)
        .returning(|_| Ok(()));
    let router = router_with_sink(sink);

    let (status, body) = post_form(&router, "/dashboard/orders/ORD-1242/accept", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Order Accepted"));
    assert!(body.contains("Assign a delivery person now."));
}

#[tokio::test]
async fn test_accept_order_already_in_progress() {
    let router = quiet_router();
    let (status, body) = post_form(&router, "/dashboard/orders/ORD-1243/accept", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("toast-destructive"));
    assert!(body.contains("cannot be accepted"));
}

#[tokio::test]
async fn test_accept_unknown_order() {
    let router = quiet_router();
    let (status, body) = post_form(&router, "/dashboard/orders/ORD-0001/accept", &[]).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Order not found: ORD-0001"));
}

#[tokio::test]
async fn test_tracking_completed_tab() {
    let router = quiet_router();
    let (_, body) = get(&router, "/tracking?tab=completed").await;
    assert!(body.contains("ORD-1241"));
    assert!(!body.contains("No tracking data available"));
}

#[tokio::test]
async fn test_find_order_opens_its_tab() {
    let mut sink = MockSubmissionSink::new();
    sink.expect_order_lookup()
        .withf(|id, found| id.eq_ignore_ascii_case("ord-1241") && *found == Some(DeliveryTab::Completed))
        .times(1)
        .returning(|_, _| Ok(()));
    let router = router_with_sink(sink);

    let (status, body) = post_form(&router, "/tracking/find", &[("order_id", " ord-1241 "), ("tab", "active")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/tracking?tab=completed" class="tab active""#));
    assert!(body.contains("delivery-card highlighted"));
}

#[tokio::test]
async fn test_find_unknown_order() {
    let mut sink = MockSubmissionSink::new();
    sink.expect_order_lookup()
        .withf(|_, found| found.is_none())
        .times(1)
        .returning(|_, _| Ok(()));
    let router = router_with_sink(sink);

    let (status, body) = post_form(&router, "/tracking/find", &[("order_id", "ORD-9999"), ("tab", "completed")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Order Not Found"));
    assert!(body.contains("toast-destructive"));
    assert!(body.contains(r#"href="/tracking?tab=completed" class="tab active""#));
}

#[tokio::test]
async fn test_find_blank_order_is_ignored() {
    let router = quiet_router();
    let (status, body) = post_form(&router, "/tracking/find", &[("order_id", "   "), ("tab", "active")]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("data-toast"));
    assert!(!body.contains("delivery-card highlighted"));
}

#[tokio::test]
async fn test_support_ticket_submitted() {
    let mut sink = MockSubmissionSink::new();
    sink.expect_ticket_submitted()
        .withf(|ticket| ticket.subject == "Missing fries")
        .times(1)
        .returning(|_| Ok(()));
    let router = router_with_sink(sink);

    let (status, body) = post_form(
        &router,
        "/support",
        &[
            ("ticket_type", "delivery_issue"),
            ("subject", "Missing fries"),
            ("message", "Order ORD-1243 arrived without fries."),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Support Ticket Submitted"));
    assert!(!body.contains("value=\"Missing fries\""));
}

#[tokio::test]
async fn test_support_ticket_incomplete() {
    let router = quiet_router();
    let (status, body) = post_form(
        &router,
        "/support",
        &[("ticket_type", ""), ("subject", "Missing fries"), ("message", "")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please fill out all fields."));
    assert!(body.contains("value=\"Missing fries\""));
}
