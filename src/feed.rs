//! Topic data feed boundary
//!
//! Deserialization types for the backend topic response and the query key
//! it was fetched under. The backend returns a flat, ordered list of
//! depth-annotated topic entries; [`rebuild`] turns one response into a
//! fresh tree, discarding whatever was built for the previous query.

use crate::error::TreeError;
use crate::tree::builder::TreeBuilder;
use crate::tree::TopicTree;
use crate::types::Extra;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One entry of the topic feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Dot-separated sibling indices from the root, e.g. "0.4.2".
    pub depth: String,
    pub label: String,
    #[serde(default)]
    pub count: u64,
    /// Any other server field passes through to the node untouched.
    #[serde(flatten)]
    pub extra: Extra,
}

/// The upstream query a topic response was fetched for.
///
/// The engine does not interpret this; it is the rebuild key. A tree and the
/// current breadcrumb computed against it must be discarded together when
/// the query changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ministry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_term: Option<String>,
    #[serde(default)]
    pub ai_mode: bool,
}

/// A topic feed file as consumed by the CLI: the query it was fetched for
/// plus the ordered entry list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicFeed {
    #[serde(default)]
    pub query: FeedQuery,
    pub topics: Vec<TopicEntry>,
}

/// Load a topic feed from a JSON file.
pub fn load_feed(path: &Path) -> Result<TopicFeed, TreeError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| TreeError::FeedError(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| TreeError::FeedError(format!("failed to parse {}: {}", path.display(), e)))
}

/// Build a fresh tree from one topic response.
///
/// Returns the tree and the number of entries dropped for malformed depth
/// paths.
pub fn rebuild(feed: TopicFeed) -> (TopicTree, usize) {
    let mut builder = TreeBuilder::new();
    let total = feed.topics.len();
    let dropped = builder.ingest(feed.topics);
    let tree = builder.finish();
    info!(
        entries = total,
        dropped,
        ministry = feed.query.ministry.as_deref().unwrap_or("-"),
        "rebuilt topic tree"
    );
    (tree, dropped)
}
