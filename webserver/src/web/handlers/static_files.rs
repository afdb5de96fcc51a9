//! Static asset handler

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;

use crate::error::{WebServerError, WebServerResult};
use crate::webserver_impl::WebServer;

/// Serve `/static/{path}` from the asset store
pub async fn serve_static(State(server): State<WebServer>, Path(path): Path<String>) -> WebServerResult<Response> {
    let asset = server.assets().serve(&path).await?;

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.content_type);
    if let Some(cache) = asset.cache_control {
        builder = builder.header(header::CACHE_CONTROL, cache);
    }

    builder
        .body(Body::from(asset.content))
        .map_err(|e| WebServerError::ResponseError(e.to_string()))
}
