//! Webserver library for the QuickBiteRush site
//!
//! Renders every page server-side with tera templates on top of axum. Page
//! state lives in the request: filters and tabs in the query string, the
//! onboarding draft in a hidden form field.

pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::WebServerConfig;
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{Asset, AssetStore, SubmissionSink};

// Re-export service implementations
pub use services::{EmbeddedAssets, LogSubmissionSink};
