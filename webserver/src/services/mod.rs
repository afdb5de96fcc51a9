//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod embedded_assets;
pub mod submission_log;

// Re-export service implementations
pub use embedded_assets::EmbeddedAssets;
pub use submission_log::LogSubmissionSink;

#[cfg(test)]
mod tests;
