/*
 * traverse.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! Preorder and postorder traversal over cursors.
//!
//! Everything here is built on the cursor primitives alone (`down`, `up`,
//! `right`, `is_end`) and never touches node internals, so these functions
//! work with any [`TreeShape`].
//!
//! Preorder is the natural walk for a cursor: visit the node, then descend.
//! Postorder inverts the asymmetry — the root is visited *last*, the first
//! node is the deepest leftmost leaf, and the successor of a node has to
//! look sideways and downward before looking upward. The point algorithms
//! ([`postorder_first`], [`postorder_next`]) compute one step at a time;
//! the iterator adapters ([`preorder`], [`postorder`]) turn them into lazy
//! one-pass sequences of cursor positions.

use crate::cursor::Cursor;
use crate::shape::TreeShape;

/// Ascends until no parent exists, returning the root-positioned cursor.
/// The end-of-walk marker is returned unchanged.
///
/// Used to normalize an arbitrary starting cursor before beginning a walk,
/// since postorder in particular does not start at the root.
pub fn root_location<S: TreeShape>(cursor: Cursor<S>) -> Cursor<S> {
    if cursor.is_end() {
        return cursor;
    }
    let mut cursor = cursor;
    while let Some(parent) = cursor.up() {
        cursor = parent;
    }
    cursor
}

/// Dives to the first child repeatedly until a leaf or childless branch is
/// reached.
///
/// Seeds a postorder walk and resumes it after a sideways step: the first
/// node visited within any subtree is always its leftmost descendant.
pub fn leftmost_descendant<S: TreeShape>(cursor: Cursor<S>) -> Cursor<S> {
    let mut cursor = cursor;
    while let Some(child) = cursor.down() {
        cursor = child;
    }
    cursor
}

/// The first node of a postorder walk over the subtree at `cursor`: the
/// deepest, leftmost leaf — never the root unless it is childless.
pub fn postorder_first<S: TreeShape>(cursor: Cursor<S>) -> Cursor<S> {
    leftmost_descendant(cursor)
}

/// The successor of `cursor` in postorder.
///
/// Postorder visits all descendants of a node strictly before the node
/// itself, and, among siblings, everything under an earlier sibling before
/// anything under a later one. Hence, in order:
///
/// 1. the end marker is its own successor (idempotent at the boundary);
/// 2. the root, having no parent, is the last node visited — its successor
///    is the end marker;
/// 3. a node with a right sibling is succeeded by that sibling's leftmost
///    descendant — sideways, then dive;
/// 4. a last sibling is succeeded by its parent, whose children are now
///    exhausted.
pub fn postorder_next<S: TreeShape>(cursor: Cursor<S>) -> Cursor<S> {
    if cursor.is_end() {
        return cursor;
    }
    if cursor.at_root() {
        return cursor.into_end();
    }
    if let Some(sibling) = cursor.right() {
        return leftmost_descendant(sibling);
    }
    match cursor.up() {
        Some(parent) => parent,
        // Not at the root, so a parent always exists.
        None => cursor.into_end(),
    }
}

/// The successor of `cursor` in preorder: the first child if there is one,
/// else the nearest right sibling found while ascending, else the end
/// marker. Idempotent on the end marker.
pub fn preorder_next<S: TreeShape>(cursor: Cursor<S>) -> Cursor<S> {
    if cursor.is_end() {
        return cursor;
    }
    if let Some(child) = cursor.down() {
        return child;
    }
    let mut cursor = cursor;
    loop {
        if let Some(sibling) = cursor.right() {
            return sibling;
        }
        match cursor.up() {
            Some(parent) => cursor = parent,
            None => return cursor.into_end(),
        }
    }
}

/// Lazy postorder sequence of cursor positions. See [`postorder`].
pub struct Postorder<S: TreeShape> {
    next: Option<Cursor<S>>,
}

/// Walks the whole tree containing `cursor` in postorder, yielding one
/// cursor per node and stopping (excluding) at the end marker.
///
/// The starting cursor is normalized to the root first, so it may be
/// positioned anywhere. Elements are computed on demand — a consumer that
/// stops pulling halts the traversal without visiting the remainder. The
/// sequence is not restartable from a midpoint; each independent consumer
/// should begin a fresh walk from the root.
pub fn postorder<S: TreeShape>(cursor: Cursor<S>) -> Postorder<S> {
    Postorder {
        next: Some(postorder_first(root_location(cursor))),
    }
}

impl<S: TreeShape> Iterator for Postorder<S> {
    type Item = Cursor<S>;

    fn next(&mut self) -> Option<Cursor<S>> {
        let current = self.next.take()?;
        if current.is_end() {
            return None;
        }
        self.next = Some(postorder_next(current.clone()));
        Some(current)
    }
}

/// Lazy preorder sequence of cursor positions. See [`preorder`].
pub struct Preorder<S: TreeShape> {
    next: Option<Cursor<S>>,
}

/// Walks the whole tree containing `cursor` in preorder (root first),
/// with the same laziness contract as [`postorder`].
pub fn preorder<S: TreeShape>(cursor: Cursor<S>) -> Preorder<S> {
    Preorder {
        next: Some(root_location(cursor)),
    }
}

impl<S: TreeShape> Iterator for Preorder<S> {
    type Item = Cursor<S>;

    fn next(&mut self) -> Option<Cursor<S>> {
        let current = self.next.take()?;
        if current.is_end() {
            return None;
        }
        self.next = Some(preorder_next(current.clone()));
        Some(current)
    }
}
