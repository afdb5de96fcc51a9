//! Webserver state management
//!
//! Everything a handler can reach is read-only apart from the request counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::config::WebServerConfig;

#[derive(Debug)]
pub struct WebServerState {
    pub config: WebServerConfig,
    pub server_start_time: Instant,
    requests_served: AtomicU64,
}

impl WebServerState {
    pub fn new(config: WebServerConfig) -> Self {
        Self {
            config,
            server_start_time: Instant::now(),
            requests_served: AtomicU64::new(0),
        }
    }

    /// Count a request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
