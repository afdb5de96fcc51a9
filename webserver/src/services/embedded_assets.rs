//! Assets compiled into the binary
//!
//! Serves the site stylesheet and script with proper caching and content types.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{Asset, AssetStore};

const STYLESHEET: &str = include_str!("../../assets/site.css");
const SCRIPT: &str = include_str!("../../assets/site.js");
const FAVICON: &str = include_str!("../../assets/favicon.svg");

#[derive(Debug, Clone)]
pub struct EmbeddedAssets {
    files: HashMap<&'static str, &'static str>,
}

impl Default for EmbeddedAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        let files = HashMap::from([
            ("site.css", STYLESHEET),
            ("site.js", SCRIPT),
            ("favicon.svg", FAVICON),
        ]);
        Self { files }
    }

    /// Paths of every embedded file, sorted
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.files.keys().copied().collect();
        paths.sort_unstable();
        paths
    }
}

/// MIME type from file extension
pub fn content_type(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Cache control header based on file type
pub fn cache_control(path: &str) -> Option<&'static str> {
    let extension = Path::new(path).extension().and_then(|e| e.to_str())?;

    match extension.to_lowercase().as_str() {
        "html" => Some("no-cache"),
        "js" | "css" => Some("public, max-age=3600"), // 1 hour
        "png" | "svg" | "ico" => Some("public, max-age=86400"), // 1 day
        _ => None,
    }
}

#[async_trait]
impl AssetStore for EmbeddedAssets {
    async fn serve(&self, path: &str) -> WebServerResult<Asset> {
        let clean_path = path.trim_start_matches('/');

        let Some(content) = self.files.get(clean_path) else {
            tracing::warn!(asset = path, "❌ Unknown static asset");
            return Err(WebServerError::AssetNotFound {
                path: path.to_string(),
            });
        };

        tracing::debug!(asset = clean_path, bytes = content.len(), "📄 Served static file");

        let asset = Asset::new(content.as_bytes(), content_type(clean_path));
        Ok(match cache_control(clean_path) {
            Some(cache) => asset.with_cache_control(cache),
            None => asset,
        })
    }
}
