/*
 * shape.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! The tree-shape adapter: how a cursor reads and rebuilds markup nodes.
//!
//! Pure and stateless, with no knowledge of traversal order. The child
//! region of a node starts at position 2 when position 1 is an attribute
//! map and at position 1 otherwise, so normalized and unnormalized nodes
//! are handled by the same structural test.
//!
//! Malformed input (a non-sequence where a branch is required, an empty
//! sequence lacking even a tag) is a precondition violation; the adapter
//! stays total by returning empty child lists for it, but makes no other
//! promises.

use tagtree_zipper::{Cursor, TreeShape};

use crate::value::Value;

/// Index of the first child: past the tag, and past the attribute map
/// when one is present.
fn child_start(items: &[Value]) -> usize {
    if matches!(items.get(1), Some(Value::Map(_))) {
        2
    } else {
        1
    }
}

/// The ordered children of `node`: every position after the tag and the
/// optional attribute map. Non-branches have no children.
pub fn children(node: &Value) -> &[Value] {
    match node {
        Value::Seq(items) => items.get(child_start(items)..).unwrap_or(&[]),
        _ => &[],
    }
}

/// A copy of `node` with its child region replaced wholesale by
/// `new_children` (possibly of different length). The tag and, if present,
/// the attribute map keep their positions.
pub fn rebuild(node: Value, new_children: Vec<Value>) -> Value {
    match node {
        Value::Seq(items) => {
            let keep = child_start(&items).min(items.len());
            let mut rebuilt: Vec<Value> = items;
            rebuilt.truncate(keep);
            rebuilt.extend(new_children);
            Value::Seq(rebuilt)
        }
        leaf => leaf,
    }
}

/// Whether the cursor may descend into `value`.
pub fn is_branch(value: &Value) -> bool {
    value.is_branch()
}

/// Marker type wiring the adapter into the generic cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupShape;

impl TreeShape for MarkupShape {
    type Node = Value;

    fn is_branch(node: &Value) -> bool {
        is_branch(node)
    }

    fn children(node: &Value) -> &[Value] {
        children(node)
    }

    fn rebuild(node: Value, new_children: Vec<Value>) -> Value {
        rebuild(node, new_children)
    }
}

/// A cursor over markup values.
pub type MarkupCursor = Cursor<MarkupShape>;

/// Creates a cursor positioned at `root`.
pub fn cursor(root: Value) -> MarkupCursor {
    Cursor::new(root)
}
