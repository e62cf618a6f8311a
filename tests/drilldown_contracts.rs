//! End-to-end contracts: feed deserialization, tree build, and navigation
//! through the public API.

use rca_tree::feed::{rebuild, TopicFeed};
use rca_tree::path::Breadcrumb;
use rca_tree::tree::navigator::{
    descend_into, is_data_present, jump_to_breadcrumb_index, reset_to_root, ResolvedView,
};
use rca_tree::tree::builder::TreeBuilder;

fn feed_from_json(json: &str) -> TopicFeed {
    serde_json::from_str(json).unwrap()
}

const SAMPLE_FEED: &str = r#"{
    "query": { "ministry": "urban", "from": "2026-01-01", "to": "2026-03-31" },
    "topics": [
        { "depth": "0",     "label": "root",     "count": 9 },
        { "depth": "0.0",   "label": "billing",  "count": 4 },
        { "depth": "0.1",   "label": "water",    "count": 5, "sentiment": -0.6 },
        { "depth": "0.1.0", "label": "supply",   "count": 3 },
        { "depth": "0.1.1", "label": "quality",  "count": 2 }
    ]
}"#;

#[test]
fn feed_builds_navigable_tree() {
    let (tree, dropped) = rebuild(feed_from_json(SAMPLE_FEED));
    assert_eq!(dropped, 0);
    assert_eq!(tree.total_nodes(), 5);
    assert!(is_data_present(&tree));

    // extra server fields pass through to the node
    assert_eq!(tree.node_at(&[0, 1]).unwrap().extra["sentiment"], -0.6);

    let root_view = reset_to_root(&tree);
    let points = match &root_view {
        ResolvedView::Branch { points, .. } => points,
        ResolvedView::Leaf { .. } => panic!("root has children"),
    };
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].label, "water");
    assert_eq!(points[1].count, 5);

    // chart click: resolve the back-reference and descend
    let water = tree.node_at(&points[1].indices).unwrap();
    let water_view = descend_into(water);
    match &water_view {
        ResolvedView::Branch { breadcrumb, points } => {
            assert_eq!(breadcrumb.labels, vec!["water"]);
            assert_eq!(breadcrumb.indices, vec![0, 1]);
            assert_eq!(points.len(), 2);
        }
        ResolvedView::Leaf { .. } => panic!("water has children"),
    }

    // descend to a leaf, then jump back to the root via the trail
    let supply = tree.node_at(&[0, 1, 0]).unwrap();
    let leaf_view = descend_into(supply);
    assert!(leaf_view.is_leaf());
    let back = jump_to_breadcrumb_index(&tree, leaf_view.breadcrumb(), 0);
    assert_eq!(back, root_view);
}

#[test]
fn breadcrumbs_match_reachability_paths() {
    let (tree, _) = rebuild(feed_from_json(SAMPLE_FEED));

    // every reachable node's breadcrumb indices must be the path used to
    // reach it, and its labels the labels along that path minus the root
    fn check(
        tree: &rca_tree::tree::TopicTree,
        node: &rca_tree::tree::TopicNode,
        path: &[usize],
        labels: &[String],
    ) {
        assert_eq!(node.breadcrumb.indices, path);
        assert_eq!(node.breadcrumb.labels, labels);
        assert_eq!(tree.node_at(path).unwrap(), node);
        for (idx, child) in node.children.iter().enumerate() {
            let mut child_path = path.to_vec();
            child_path.push(idx);
            let mut child_labels = labels.to_vec();
            child_labels.push(child.label.clone());
            check(tree, child, &child_path, &child_labels);
        }
    }
    let root = tree.root().unwrap();
    check(&tree, root, &[0], &[]);
}

#[test]
fn malformed_entries_are_dropped_not_fatal() {
    let feed = feed_from_json(
        r#"{
        "topics": [
            { "depth": "0",    "label": "root",    "count": 2 },
            { "depth": "",     "label": "empty",   "count": 1 },
            { "depth": "0.-1", "label": "negative","count": 1 },
            { "depth": "0.0",  "label": "billing", "count": 2 }
        ]
    }"#,
    );
    let (tree, dropped) = rebuild(feed);
    assert_eq!(dropped, 2);
    assert_eq!(tree.node_at(&[0, 0]).unwrap().label, "billing");
}

#[test]
fn zero_count_root_is_no_data_not_an_error() {
    let feed = feed_from_json(
        r#"{ "topics": [ { "depth": "0", "label": "root", "count": 0 } ] }"#,
    );
    let (tree, dropped) = rebuild(feed);
    assert_eq!(dropped, 0);
    assert!(!is_data_present(&tree));
    // still navigable: the root resolves to an empty leaf
    assert!(reset_to_root(&tree).is_leaf());
}

#[test]
fn breadcrumb_from_previous_query_falls_back_to_root() {
    let (old_tree, _) = rebuild(feed_from_json(SAMPLE_FEED));
    let old_bc = old_tree.node_at(&[0, 1, 1]).unwrap().breadcrumb.clone();

    // the tree is rebuilt for a narrower query; the old breadcrumb is stale
    let mut builder = TreeBuilder::new();
    builder
        .insert(
            "0",
            rca_tree::tree::builder::NodeData {
                label: "root".to_string(),
                count: 1,
                ..Default::default()
            },
        )
        .unwrap();
    let new_tree = builder.finish();

    let view = jump_to_breadcrumb_index(&new_tree, &old_bc, 2);
    assert_eq!(view, reset_to_root(&new_tree));
}

#[test]
fn root_breadcrumb_convention_is_uniform() {
    let (tree, _) = rebuild(feed_from_json(SAMPLE_FEED));
    let root = tree.root().unwrap();
    // indices include the root's own index; labels exclude the root label
    assert_eq!(root.breadcrumb, Breadcrumb::root());
    assert_eq!(root.breadcrumb.indices, vec![0]);
    assert!(root.breadcrumb.labels.is_empty());
}
