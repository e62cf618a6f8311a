//! Topic tree navigation
//!
//! Resolves drill-down clicks, breadcrumb jumps, and resets into the next
//! view to display. All functions here are pure over (tree, breadcrumb);
//! the caller owns the "current breadcrumb" value and swaps it together
//! with the tree whenever the upstream query changes.

use crate::path::Breadcrumb;
use crate::tree::{TopicNode, TopicTree};
use crate::types::GrievanceId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One child of the current branch, projected for chart rendering.
///
/// `indices` is the full index path to the child from the top level; the
/// chart layer hands it back on click and [`TopicTree::node_at`] resolves
/// the node for the next descend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub count: u64,
    pub indices: Vec<usize>,
}

/// The resolved view after a navigation action.
///
/// `Branch` renders as a chart of the node's children with a breadcrumb
/// trail; `Leaf` renders as the grievance record list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedView {
    Branch {
        breadcrumb: Breadcrumb,
        points: Vec<ChartPoint>,
    },
    Leaf {
        breadcrumb: Breadcrumb,
        record_ids: Vec<GrievanceId>,
    },
}

impl ResolvedView {
    pub fn breadcrumb(&self) -> &Breadcrumb {
        match self {
            ResolvedView::Branch { breadcrumb, .. } => breadcrumb,
            ResolvedView::Leaf { breadcrumb, .. } => breadcrumb,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ResolvedView::Leaf { .. })
    }
}

/// Resolve the view for a node the user activated.
///
/// A node without children resolves to `Leaf` regardless of its count; its
/// record ids (possibly empty, the collaborator fetch may not have run yet)
/// go to the caller for the record-list fetch. A node with children resolves
/// to `Branch` and its breadcrumb becomes the caller's new current position.
pub fn descend_into(node: &TopicNode) -> ResolvedView {
    if node.is_leaf() {
        return ResolvedView::Leaf {
            breadcrumb: node.breadcrumb.clone(),
            record_ids: node.record_ids.clone(),
        };
    }
    let points = node
        .children
        .iter()
        .enumerate()
        .map(|(idx, child)| {
            let mut indices = node.breadcrumb.indices.clone();
            indices.push(idx);
            ChartPoint {
                label: child.label.clone(),
                count: child.count,
                indices,
            }
        })
        .collect();
    ResolvedView::Branch {
        breadcrumb: node.breadcrumb.clone(),
        points,
    }
}

/// Jump back to breadcrumb trail element `i` (0 is the root).
///
/// A breadcrumb that no longer resolves (the tree was rebuilt under a
/// navigated UI) falls back to the root view instead of failing.
pub fn jump_to_breadcrumb_index(tree: &TopicTree, breadcrumb: &Breadcrumb, i: usize) -> ResolvedView {
    let node = breadcrumb
        .prefix_indices(i)
        .and_then(|prefix| tree.node_at(prefix));
    match node {
        Some(node) => descend_into(node),
        None => {
            debug!(index = i, "stale breadcrumb, falling back to root");
            reset_to_root(tree)
        }
    }
}

/// Resolve the root view. An empty forest resolves to an empty leaf at the
/// root position so callers always get a renderable view.
pub fn reset_to_root(tree: &TopicTree) -> ResolvedView {
    match tree.root() {
        Some(root) => descend_into(root),
        None => ResolvedView::Leaf {
            breadcrumb: Breadcrumb::root(),
            record_ids: Vec::new(),
        },
    }
}

/// Whether the tree has anything worth charting. See
/// [`TopicTree::is_data_present`].
pub fn is_data_present(tree: &TopicTree) -> bool {
    tree.is_data_present()
}
