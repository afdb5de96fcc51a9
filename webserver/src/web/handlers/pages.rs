//! Home and not-found pages

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use shared::{page_warn, Page};

use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

pub async fn home(State(server): State<WebServer>) -> WebServerResult<Html<String>> {
    let renderer = server.renderer();
    let context = renderer.context(Page::Home, &[]);
    renderer.render("home.html", &context)
}

/// Fallback for every unknown path
pub async fn not_found(State(server): State<WebServer>, uri: Uri) -> WebServerResult<(StatusCode, Html<String>)> {
    page_warn!(
        Page::NotFound,
        "404 Error: User attempted to access non-existent route: {}",
        uri.path()
    );

    let renderer = server.renderer();
    let mut context = renderer.context(Page::NotFound, &[]);
    context.insert("path", uri.path());
    Ok((StatusCode::NOT_FOUND, renderer.render("not_found.html", &context)?))
}
