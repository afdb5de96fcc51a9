//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use quickbite_web::traits::MockSubmissionSink;
use quickbite_web::{EmbeddedAssets, WebServer, WebServerConfig};

/// Router over the embedded assets and the given sink
pub fn router_with_sink(sink: MockSubmissionSink) -> Router {
    server_with_sink(WebServerConfig::default(), sink).build_router()
}

pub fn server_with_sink(config: WebServerConfig, sink: MockSubmissionSink) -> WebServer {
    WebServer::new(config, Arc::new(EmbeddedAssets::new()), Arc::new(sink)).unwrap()
}

/// Router whose sink panics if anything is submitted
pub fn quiet_router() -> Router {
    router_with_sink(MockSubmissionSink::new())
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_form(router: &Router, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap();
    send(router, request).await
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// application/x-www-form-urlencoded body
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

/// Value of the wizard's hidden `draft` input, with the HTML escaping undone
pub fn hidden_draft(page: &str) -> String {
    let marker = "name=\"draft\" value=\"";
    let start = page.find(marker).expect("page has a draft field") + marker.len();
    let end = start + page[start..].find('"').expect("draft value is closed");
    html_escape::decode_html_entities(&page[start..end]).into_owned()
}

/// Ids carried by the menu items' remove buttons
pub fn menu_item_ids(page: &str) -> Vec<String> {
    page.split("value=\"remove:")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
