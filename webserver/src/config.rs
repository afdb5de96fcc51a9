//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use shared::SharedError;

use crate::error::{WebServerError, WebServerResult};

/// Longest accepted delay before the post-registration redirect
pub const MAX_REDIRECT_DELAY_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebServerConfig {
    /// IP address to bind
    pub host: String,
    pub port: u16,
    /// Serve `/static` from this directory instead of the embedded assets
    pub static_dir: Option<PathBuf>,
    /// Seconds the registration success page waits before moving to the dashboard
    pub redirect_delay_secs: u64,
    pub log_level: String,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: None,
            redirect_delay_secs: 2,
            log_level: "info".to_string(),
        }
    }
}

impl WebServerConfig {
    pub fn validate(&self) -> WebServerResult<()> {
        if self.port == 0 {
            return Err(invalid("port", self.port));
        }

        if self.redirect_delay_secs > MAX_REDIRECT_DELAY_SECS {
            return Err(invalid("redirect_delay_secs", self.redirect_delay_secs));
        }

        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(invalid("static_dir", dir.display()));
            }
        }

        self.socket_addr().map(|_| ())
    }

    pub fn socket_addr(&self) -> WebServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid address {}:{}: {}", self.host, self.port, e)))
    }
}

fn invalid(field: &str, value: impl std::fmt::Display) -> WebServerError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}
