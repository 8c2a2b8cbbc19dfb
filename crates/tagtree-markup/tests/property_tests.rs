/*
 * property_tests.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! Property-based tests for postorder traversal over generated markup
//! trees.
//!
//! The generator only produces scalar leaves (never a bare map as a
//! child), so the normalized and unnormalized encodings of a generated
//! tree are unambiguous and can be compared node for node.

use proptest::prelude::*;
use tagtree_markup::{
    children, cursor, postorder, postorder_first, postorder_next, preorder, AttrMap, Value,
};

// =============================================================================
// Generators
// =============================================================================

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{1,8}".prop_map(Value::Str),
    ]
}

fn arb_attrs() -> impl Strategy<Value = AttrMap> {
    proptest::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..3).prop_map(|pairs| {
        let mut map = AttrMap::new();
        for (key, value) in pairs {
            map.insert(key, Value::Int(value));
        }
        map
    })
}

/// Whole trees: possibly a bare leaf at the root, otherwise nested tagged
/// nodes with optional attribute maps.
fn arb_tree() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        (
            "[a-z]{1,4}",
            proptest::option::of(arb_attrs()),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, attrs, child_nodes)| {
                let mut items = vec![Value::Str(tag)];
                if let Some(map) = attrs {
                    items.push(Value::Map(map));
                }
                items.extend(child_nodes);
                Value::Seq(items)
            })
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Reference postorder, computed recursively over the adapter.
fn expected_postorder(node: &Value, out: &mut Vec<Value>) {
    for child in children(node) {
        expected_postorder(child, out);
    }
    out.push(node.clone());
}

fn visited_postorder(root: Value) -> Vec<Value> {
    postorder(cursor(root)).map(|loc| loc.node().clone()).collect()
}

/// Rewrites a tree so every branch carries an explicit attribute map at
/// position 1.
fn normalize(node: &Value) -> Value {
    match node {
        Value::Seq(items) if !items.is_empty() => {
            let mut out = vec![items[0].clone()];
            out.push(Value::Map(node.attrs().cloned().unwrap_or_default()));
            out.extend(children(node).iter().map(normalize));
            Value::Seq(out)
        }
        other => other.clone(),
    }
}

/// Per-node identity that ignores the normalized/unnormalized distinction:
/// kind, tag (or leaf value), attributes with the empty map and no map
/// identified, and child count.
fn signature(node: &Value) -> (bool, Option<Value>, AttrMap, usize) {
    if node.is_branch() {
        (
            true,
            node.tag().cloned(),
            node.attrs().cloned().unwrap_or_default(),
            children(node).len(),
        )
    } else {
        (false, Some(node.clone()), AttrMap::new(), 0)
    }
}

fn visited_signatures(root: Value) -> Vec<(bool, Option<Value>, AttrMap, usize)> {
    postorder(cursor(root))
        .map(|loc| signature(loc.node()))
        .collect()
}

/// Order-insensitive fingerprint of a node list.
fn multiset(nodes: &[Value]) -> Vec<String> {
    let mut keys: Vec<String> = nodes
        .iter()
        .map(|node| serde_json::to_string(node).expect("value serializes"))
        .collect();
    keys.sort();
    keys
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every node is visited exactly once, in reference postorder, with
    /// the root last.
    #[test]
    fn postorder_matches_reference_order(tree in arb_tree()) {
        let mut expected = Vec::new();
        expected_postorder(&tree, &mut expected);

        let visited = visited_postorder(tree.clone());
        prop_assert_eq!(visited.last(), Some(&tree));
        prop_assert_eq!(visited, expected);
    }

    /// Preorder and postorder disagree about order but visit the same
    /// nodes.
    #[test]
    fn preorder_and_postorder_cover_the_same_nodes(tree in arb_tree()) {
        let post = visited_postorder(tree.clone());
        let pre: Vec<Value> = preorder(cursor(tree)).map(|loc| loc.node().clone()).collect();
        prop_assert_eq!(multiset(&post), multiset(&pre));
    }

    /// Walking to the end and ascending reproduces the input tree.
    #[test]
    fn full_walk_round_trips(tree in arb_tree()) {
        let mut walk = postorder_first(cursor(tree.clone()));
        while !walk.is_end() {
            walk = postorder_next(walk);
        }
        prop_assert!(walk.is_end());
        prop_assert_eq!(walk.root(), tree);
    }

    /// The two encodings of the same logical tree visit logically
    /// corresponding nodes in the same relative order.
    #[test]
    fn normalized_and_unnormalized_encodings_agree(tree in arb_tree()) {
        let normalized = normalize(&tree);
        prop_assert_eq!(
            visited_signatures(tree),
            visited_signatures(normalized)
        );
    }

    /// The end marker is a fixed point of the successor function.
    #[test]
    fn end_marker_is_idempotent(tree in arb_tree()) {
        let mut walk = postorder_first(cursor(tree));
        while !walk.is_end() {
            walk = postorder_next(walk);
        }
        let once = postorder_next(walk.clone());
        let twice = postorder_next(once.clone());
        prop_assert!(once.is_end());
        prop_assert_eq!(once, twice);
    }
}
