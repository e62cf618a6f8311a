//! Topic tree
//!
//! In-memory n-ary tree of grievance topics. Built from a flat,
//! depth-path-encoded feed by the builder, navigated by the navigator.
//! The tree is rebuilt from scratch whenever the upstream query changes;
//! nothing here mutates it after the build.

pub mod builder;
pub mod navigator;

use crate::path::Breadcrumb;
use crate::types::{Extra, GrievanceId};
use serde::{Deserialize, Serialize};

/// A single topic node.
///
/// Required fields aside, the server schema is open: any extra field on a
/// feed entry flows through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicNode {
    /// Human-readable topic name. Empty on placeholder nodes the builder
    /// created for not-yet-seen ancestors.
    #[serde(default)]
    pub label: String,
    /// Number of underlying grievance records aggregated at this node, as
    /// supplied by the server. Never recomputed from children.
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TopicNode>,
    /// Present only on leaves, populated by a collaborator fetch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub record_ids: Vec<GrievanceId>,
    /// Trail from the root to this node, attached by the builder.
    #[serde(default)]
    pub breadcrumb: Breadcrumb,
    #[serde(flatten)]
    pub extra: Extra,
}

impl TopicNode {
    /// A node with no children is a leaf, regardless of its count.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True while the node only exists to hold a position for descendants.
    pub fn is_placeholder(&self) -> bool {
        self.label.is_empty() && self.count == 0
    }
}

/// The built tree: a root-level forest with index-path lookup.
///
/// By convention the forest holds exactly one root at index 0; the forest
/// shape is kept because the wire format addresses the top level by index
/// like any other level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicTree {
    pub roots: Vec<TopicNode>,
}

impl TopicTree {
    /// The single root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&TopicNode> {
        self.roots.first()
    }

    /// Resolve a node by its index path from the top level.
    ///
    /// The first index selects within the forest; each subsequent index
    /// selects within the previous node's children. Returns `None` for any
    /// index that does not resolve, including an empty path.
    pub fn node_at(&self, indices: &[usize]) -> Option<&TopicNode> {
        let (first, rest) = indices.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &idx in rest {
            node = node.children.get(idx)?;
        }
        Some(node)
    }

    /// True iff the tree has a root with a non-zero count.
    ///
    /// A zero count after a full feed means the filter combination matched
    /// no grievances; callers render a "no data" state instead of a chart.
    pub fn is_data_present(&self) -> bool {
        self.root().map(|r| r.count > 0).unwrap_or(false)
    }

    /// Total number of nodes reachable from the top level.
    pub fn total_nodes(&self) -> usize {
        fn count(nodes: &[TopicNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }

    /// Depth of the deepest node (root level counts as 1). Zero when empty.
    pub fn max_depth(&self) -> usize {
        fn depth(nodes: &[TopicNode]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + depth(&n.children))
                .max()
                .unwrap_or(0)
        }
        depth(&self.roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str, count: u64) -> TopicNode {
        TopicNode {
            label: label.to_string(),
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_node_at_walks_levels() {
        let tree = TopicTree {
            roots: vec![TopicNode {
                label: "root".to_string(),
                count: 3,
                children: vec![leaf("billing", 2), leaf("water", 1)],
                ..Default::default()
            }],
        };
        assert_eq!(tree.node_at(&[0]).unwrap().label, "root");
        assert_eq!(tree.node_at(&[0, 1]).unwrap().label, "water");
        assert!(tree.node_at(&[0, 2]).is_none());
        assert!(tree.node_at(&[1]).is_none());
        assert!(tree.node_at(&[]).is_none());
    }

    #[test]
    fn test_data_present_requires_nonzero_root_count() {
        assert!(!TopicTree::default().is_data_present());
        let empty_root = TopicTree {
            roots: vec![leaf("root", 0)],
        };
        assert!(!empty_root.is_data_present());
        let populated = TopicTree {
            roots: vec![leaf("root", 7)],
        };
        assert!(populated.is_data_present());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"label":"water","count":4,"ministry":"urban","severity":9}"#;
        let node: TopicNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.extra["ministry"], "urban");
        assert_eq!(node.extra["severity"], 9);
        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["severity"], 9);
    }
}
