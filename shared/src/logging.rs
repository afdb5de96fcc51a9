//! Shared logging utilities for consistent tracing across the site

use crate::types::Page;
use chrono::{DateTime, Utc};
use std::sync::Once;
use tracing::{error, info};

static INIT: Once = Once::new();

/// Filter directives for the site crates at the given base level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("quickbite_web={base_level},quickbite={base_level},shared={base_level},tower_http=debug,axum={base_level}")
}

/// Initialize the stdout tracing subscriber with an optional log level.
///
/// `RUST_LOG` wins over the level when set. Calling this more than once is a no-op.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(log_level);

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init();
    });
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for page-aware info logging
#[macro_export]
macro_rules! page_info {
    ($page:expr, $($arg:tt)*) => {
        tracing::info!(
            page = %$page,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for page-aware warning logging
#[macro_export]
macro_rules! page_warn {
    ($page:expr, $($arg:tt)*) => {
        tracing::warn!(
            page = %$page,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for page-aware error logging
#[macro_export]
macro_rules! page_error {
    ($page:expr, $($arg:tt)*) => {
        tracing::error!(
            page = %$page,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for page-aware debug logging
#[macro_export]
macro_rules! page_debug {
    ($page:expr, $($arg:tt)*) => {
        tracing::debug!(
            page = %$page,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(timestamp = format_timestamp(), "🛑 Shutting down: {}", reason);
}

/// Contextual logging helper for error conditions outside any page
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(page: Page, message: &str) {
    info!(
        page = %page,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
