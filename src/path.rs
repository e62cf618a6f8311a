//! Depth paths and breadcrumbs
//!
//! A depth path is the wire format for a node's position: dot-separated
//! sibling indices from the root, e.g. "0.4.2". A breadcrumb is the resolved
//! trail of labels and indices attached to every node at insertion time and
//! rendered as the back-navigation UI.

use crate::error::TreeError;
use serde::{Deserialize, Serialize};

/// Parse a depth path into its index sequence.
///
/// Empty paths, empty segments, and non-numeric segments are caller contract
/// violations and fail with `TreeError::InvalidPath`. Negative segments can
/// never parse as `usize`, which is the same contract.
pub fn parse_depth_path(path: &str) -> Result<Vec<usize>, TreeError> {
    if path.is_empty() {
        return Err(TreeError::InvalidPath {
            path: path.to_string(),
            reason: "empty path".to_string(),
        });
    }
    path.split('.')
        .map(|segment| {
            segment.parse::<usize>().map_err(|_| TreeError::InvalidPath {
                path: path.to_string(),
                reason: format!("segment '{}' is not a non-negative integer", segment),
            })
        })
        .collect()
}

/// Breadcrumb trail from the root to a node.
///
/// Convention: `indices` includes the root's own index (always 0 for a
/// single-rooted tree); `labels` excludes the synthetic root label. The root
/// breadcrumb is therefore `{ labels: [], indices: [0] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub labels: Vec<String>,
    pub indices: Vec<usize>,
}

impl Breadcrumb {
    /// Breadcrumb of the root node at top-level index 0.
    pub fn root() -> Self {
        Breadcrumb {
            labels: Vec::new(),
            indices: vec![0],
        }
    }

    /// Breadcrumb of the top-level node at `index`.
    ///
    /// The root (index 0) carries no label; any other top-level position is
    /// treated like a descent and records its label.
    pub fn top_level(label: &str, index: usize) -> Self {
        if index == 0 {
            Breadcrumb::root()
        } else {
            Breadcrumb {
                labels: vec![label.to_string()],
                indices: vec![index],
            }
        }
    }

    /// Breadcrumb of the child at sibling position `index` under `self`.
    pub fn child(&self, label: &str, index: usize) -> Self {
        let mut labels = self.labels.clone();
        labels.push(label.to_string());
        let mut indices = self.indices.clone();
        indices.push(index);
        Breadcrumb { labels, indices }
    }

    /// Number of levels in the trail (root counts as one).
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Index-path prefix through trail element `i` (inclusive).
    ///
    /// `i = 0` is the root. Returns `None` when `i` is past the end of the
    /// trail, which callers treat as a stale breadcrumb.
    pub fn prefix_indices(&self, i: usize) -> Option<&[usize]> {
        if i < self.indices.len() {
            Some(&self.indices[..=i])
        } else {
            None
        }
    }
}
