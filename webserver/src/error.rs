//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Static asset not found: {path}")]
    AssetNotFound { path: String },

    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("Response building error: {0}")]
    ResponseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest {
            details: details.into(),
        }
    }

    /// HTTP status the error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            WebServerError::NotFound(_) | WebServerError::AssetNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::SharedError(shared) => match shared {
                SharedError::OrderNotFound { .. } => StatusCode::NOT_FOUND,
                SharedError::OrderNotPending { .. } => StatusCode::CONFLICT,
                SharedError::InvalidDraft { .. } => StatusCode::BAD_REQUEST,
                SharedError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "❌ Request failed: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "⚠️ Request rejected: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
