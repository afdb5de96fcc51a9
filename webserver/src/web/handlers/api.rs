//! JSON endpoints
//!
//! Read-only views of the same mock catalog the pages render.

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};
use shared::catalog;

use super::orders::OrdersParams;
use crate::webserver_impl::WebServer;

/// Health check endpoint
pub async fn health(State(server): State<WebServer>) -> Json<Value> {
    let state = server.state();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.get_uptime_seconds(),
        "requests_served": state.requests_served(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Filtered order list - /api/orders?status=&q=
pub async fn orders(Query(params): Query<OrdersParams>) -> Json<Value> {
    let query = params.to_query();
    let all = catalog::orders();
    let found = query.apply(&all);

    Json(json!({
        "status": query.status.as_str(),
        "search": query.search,
        "shown": found.len(),
        "total": all.len(),
        "orders": found,
    }))
}

/// Active and completed deliveries - /api/deliveries
pub async fn deliveries() -> Json<Value> {
    Json(json!({
        "active": catalog::active_deliveries(),
        "completed": catalog::completed_deliveries(),
    }))
}
