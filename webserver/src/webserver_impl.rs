//! Main webserver implementation
//!
//! The WebServer struct owns the shared state, the template renderer and the
//! injected services, and builds the router that serves every page.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use shared::logging;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::WebServerConfig;
use crate::error::{WebServerError, WebServerResult};
use crate::render::PageRenderer;
use crate::services::{EmbeddedAssets, LogSubmissionSink};
use crate::state::WebServerState;
use crate::traits::{AssetStore, SubmissionSink};
use crate::web::handlers::{api, dashboard, orders, pages, register, static_files, support, tracking};

/// Main webserver struct with dependency injection
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
    renderer: Arc<PageRenderer>,
    assets: Arc<dyn AssetStore>,
    sink: Arc<dyn SubmissionSink>,
}

impl WebServer {
    /// Create a new webserver with injected services.
    ///
    /// Fails when a template does not compile.
    pub fn new(
        config: WebServerConfig,
        assets: Arc<dyn AssetStore>,
        sink: Arc<dyn SubmissionSink>,
    ) -> WebServerResult<Self> {
        Ok(Self {
            state: Arc::new(WebServerState::new(config)),
            renderer: Arc::new(PageRenderer::new()?),
            assets,
            sink,
        })
    }

    /// Webserver backed by the embedded assets and the logging sink
    pub fn with_defaults(config: WebServerConfig) -> WebServerResult<Self> {
        Self::new(config, Arc::new(EmbeddedAssets::new()), Arc::new(LogSubmissionSink::new()))
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            // Pages
            .route("/", get(pages::home))
            .route("/dashboard", get(dashboard::dashboard))
            .route("/dashboard/orders/:id/accept", post(dashboard::accept_order))
            .route("/orders", get(orders::orders))
            .route("/tracking", get(tracking::tracking))
            .route("/tracking/find", post(tracking::find_order))
            .route("/support", get(support::support).post(support::submit_ticket))
            .route("/register", get(register::register_page).post(register::register_step))
            // JSON API
            .route("/api/orders", get(api::orders))
            .route("/api/deliveries", get(api::deliveries))
            // Health check
            .route("/health", get(api::health));

        let router = match &self.state.config.static_dir {
            Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
            None => router.route("/static/*path", get(static_files::serve_static)),
        };

        router
            .fallback(pages::not_found)
            .layer(middleware::from_fn_with_state(self.state.clone(), count_requests))
            .layer(TraceLayer::new_for_http())
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let addr = self.state.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        logging::log_startup(&format!("QuickBiteRush site on http://{addr}"));

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub(crate) fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    pub(crate) fn assets(&self) -> &dyn AssetStore {
        self.assets.as_ref()
    }

    pub(crate) fn sink(&self) -> &dyn SubmissionSink {
        self.sink.as_ref()
    }
}

async fn count_requests(State(state): State<Arc<WebServerState>>, request: Request, next: Next) -> Response {
    state.record_request();
    next.run(request).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => logging::log_error("Signal handling", &err),
    }
}
