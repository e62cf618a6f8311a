//! Error types for the RCA tree engine.

use thiserror::Error;

/// Errors surfaced by tree building, configuration, and feed loading.
///
/// Stale breadcrumbs are deliberately NOT an error variant: a breadcrumb that
/// no longer resolves against the current tree falls back to the root view,
/// since that is an expected consequence of a concurrent data refresh.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Malformed depth path passed to insert (empty, non-numeric, or
    /// negative segment). The caller should drop the offending entry and
    /// continue with the rest of the feed.
    #[error("invalid depth path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("feed error: {0}")]
    FeedError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TreeError {
    fn from(err: serde_json::Error) -> Self {
        TreeError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for TreeError {
    fn from(err: config::ConfigError) -> Self {
        TreeError::ConfigError(err.to_string())
    }
}
