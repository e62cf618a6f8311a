//! Topic tree builder
//!
//! Incrementally constructs the n-ary topic tree from a flat stream of
//! (depth path, node data) entries. Entries may arrive in any order;
//! ancestors that have not been seen yet are held open by placeholder nodes
//! and overwritten when (if) their own entry arrives.

use crate::error::TreeError;
use crate::feed::TopicEntry;
use crate::path::{parse_depth_path, Breadcrumb};
use crate::tree::{TopicNode, TopicTree};
use crate::types::Extra;
use tracing::{debug, warn};

/// Server-supplied fields merged into the node a depth path targets.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub label: String,
    pub count: u64,
    pub extra: Extra,
}

impl From<TopicEntry> for NodeData {
    fn from(entry: TopicEntry) -> Self {
        NodeData {
            label: entry.label,
            count: entry.count,
            extra: entry.extra,
        }
    }
}

/// Builds a [`TopicTree`] from depth-path-addressed entries.
///
/// The forest is seeded with a single placeholder root (`label: "root"`,
/// `count: 0`) so a feed that never sends an explicit root entry still
/// produces a navigable tree.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    forest: Vec<TopicNode>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        let root = TopicNode {
            label: "root".to_string(),
            breadcrumb: Breadcrumb::root(),
            ..Default::default()
        };
        TreeBuilder { forest: vec![root] }
    }

    /// Insert one entry at the position its depth path describes.
    ///
    /// Walks the forest one level per path segment, growing each level with
    /// placeholder nodes as needed (gaps between existing and new indices
    /// become implicit placeholders). The final segment's node receives the
    /// entry data merged over whatever is already there, so a node can be
    /// enriched by multiple passes; intermediate segments only guarantee a
    /// `children` sequence exists and pass their breadcrumb down.
    pub fn insert(&mut self, depth_path: &str, data: NodeData) -> Result<(), TreeError> {
        let indices = parse_depth_path(depth_path)?;
        insert_at(&mut self.forest, &indices, None, data);
        Ok(())
    }

    /// Feed a whole topic response through `insert`, in order.
    ///
    /// A malformed depth path drops that entry and continues; one bad entry
    /// must not abort the build. Returns the number of dropped entries.
    pub fn ingest<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = TopicEntry>,
    {
        let mut dropped = 0;
        for entry in entries {
            let depth = entry.depth.clone();
            if let Err(e) = self.insert(&depth, entry.into()) {
                warn!("dropping topic entry with bad depth path: {}", e);
                dropped += 1;
            }
        }
        dropped
    }

    /// Finalize the build.
    ///
    /// Re-derives every breadcrumb from the final structure: a descendant
    /// inserted before its ancestor recorded the ancestor's placeholder
    /// (empty) label, and the fixup walk is what makes the finished tree
    /// identical for any insertion order.
    pub fn finish(mut self) -> TopicTree {
        fixup_breadcrumbs(&mut self.forest, None);
        let tree = TopicTree { roots: self.forest };
        debug!(
            total_nodes = tree.total_nodes(),
            max_depth = tree.max_depth(),
            "topic tree built"
        );
        tree
    }
}

fn breadcrumb_for(parent: Option<&Breadcrumb>, label: &str, index: usize) -> Breadcrumb {
    match parent {
        Some(p) => p.child(label, index),
        None => Breadcrumb::top_level(label, index),
    }
}

fn insert_at(
    nodes: &mut Vec<TopicNode>,
    indices: &[usize],
    parent: Option<&Breadcrumb>,
    data: NodeData,
) {
    // parse_depth_path never yields an empty sequence
    let idx = indices[0];
    while nodes.len() <= idx {
        nodes.push(TopicNode::default());
    }
    let node = &mut nodes[idx];
    if indices.len() == 1 {
        node.label = data.label;
        node.count = data.count;
        for (key, value) in data.extra {
            node.extra.insert(key, value);
        }
        node.breadcrumb = breadcrumb_for(parent, &node.label, idx);
    } else {
        let bc = breadcrumb_for(parent, &node.label, idx);
        node.breadcrumb = bc.clone();
        insert_at(&mut node.children, &indices[1..], Some(&bc), data);
    }
}

fn fixup_breadcrumbs(nodes: &mut [TopicNode], parent: Option<&Breadcrumb>) {
    for (idx, node) in nodes.iter_mut().enumerate() {
        node.breadcrumb = breadcrumb_for(parent, &node.label, idx);
        let bc = node.breadcrumb.clone();
        fixup_breadcrumbs(&mut node.children, Some(&bc));
    }
}
