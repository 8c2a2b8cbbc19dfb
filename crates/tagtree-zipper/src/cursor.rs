/*
 * cursor.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! The persistent cursor.
//!
//! A [`Cursor`] is an immutable value denoting a position within a tree
//! together with enough context to rebuild every ancestor on ascent: the
//! current node, plus a stack of frames holding, for each ancestor level,
//! the parent node (kept as the template for [`TreeShape::rebuild`]) and
//! the siblings to the left and right of the descent point. There is no
//! parent pointer anywhere — the path is reconstructible context, so
//! multiple cursors derived from the same root never interfere.
//!
//! Every navigation operation returns a new cursor; a move that is not
//! possible (down on a leaf, up at the root, right on a last sibling)
//! returns `None`. Edits are recorded on the current node and propagated
//! upward through `rebuild` when the cursor ascends.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{ZipperError, ZipperResult};
use crate::shape::TreeShape;

/// One level of ancestor context: the parent node kept as a rebuild
/// template, and the current node's siblings on either side.
struct Frame<N> {
    parent: N,
    left: Vec<N>,
    right: VecDeque<N>,
}

impl<N: Clone> Clone for Frame<N> {
    fn clone(&self) -> Self {
        Frame {
            parent: self.parent.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Frame<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("parent", &self.parent)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<N: PartialEq> PartialEq for Frame<N> {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.left == other.left && self.right == other.right
    }
}

/// An immutable position within a tree.
///
/// Created from a root node with [`Cursor::new`], consumed by navigation
/// calls, and discarded; it owns no external resources. The distinguished
/// end-of-walk state (see [`Cursor::is_end`]) is reached only through the
/// traversal successors in [`crate::traverse`]; once reached it is
/// terminal, and retains the fully rebuilt root so [`Cursor::root`] still
/// works.
pub struct Cursor<S: TreeShape> {
    node: S::Node,
    path: Vec<Frame<S::Node>>,
    end: bool,
}

impl<S: TreeShape> Clone for Cursor<S> {
    fn clone(&self) -> Self {
        Cursor {
            node: self.node.clone(),
            path: self.path.clone(),
            end: self.end,
        }
    }
}

impl<S: TreeShape> fmt::Debug for Cursor<S>
where
    S::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node)
            .field("depth", &self.path.len())
            .field("end", &self.end)
            .finish()
    }
}

impl<S: TreeShape> PartialEq for Cursor<S>
where
    S::Node: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.path == other.path && self.end == other.end
    }
}

impl<S: TreeShape> Cursor<S> {
    /// Creates a cursor positioned at `root`.
    pub fn new(root: S::Node) -> Self {
        Cursor {
            node: root,
            path: Vec::new(),
            end: false,
        }
    }

    /// The node at the cursor, reflecting any edits made on descendants
    /// that have since been ascended past.
    pub fn node(&self) -> &S::Node {
        &self.node
    }

    /// True only for the distinguished end-of-walk marker.
    pub fn is_end(&self) -> bool {
        self.end
    }

    /// True when the cursor has no parent to ascend to. The end marker
    /// also reports true: it sits at the fully rebuilt root.
    pub fn at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Moves to the first child of the current node, or `None` if the
    /// current node is a leaf or a childless branch.
    pub fn down(&self) -> Option<Self> {
        if self.end || !S::is_branch(&self.node) {
            return None;
        }
        let children = S::children(&self.node);
        let first = children.first()?.clone();
        let right: VecDeque<S::Node> = children[1..].iter().cloned().collect();
        let mut path = self.path.clone();
        path.push(Frame {
            parent: self.node.clone(),
            left: Vec::new(),
            right,
        });
        Some(Cursor {
            node: first,
            path,
            end: false,
        })
    }

    /// Moves to the parent of the current node, rebuilding it from the
    /// accumulated child list, or `None` at the root.
    pub fn up(&self) -> Option<Self> {
        if self.end {
            return None;
        }
        let mut path = self.path.clone();
        let frame = path.pop()?;
        let mut children = frame.left;
        children.push(self.node.clone());
        children.extend(frame.right);
        Some(Cursor {
            node: S::rebuild(frame.parent, children),
            path,
            end: false,
        })
    }

    /// Moves to the right sibling of the current node, or `None` if there
    /// is none (or the cursor is at the root, which has no siblings).
    pub fn right(&self) -> Option<Self> {
        if self.end {
            return None;
        }
        let mut path = self.path.clone();
        let frame = path.last_mut()?;
        let next = frame.right.pop_front()?;
        frame.left.push(self.node.clone());
        Some(Cursor {
            node: next,
            path,
            end: false,
        })
    }

    /// Moves to the left sibling of the current node, or `None` if there
    /// is none.
    pub fn left(&self) -> Option<Self> {
        if self.end {
            return None;
        }
        let mut path = self.path.clone();
        let frame = path.last_mut()?;
        let prev = frame.left.pop()?;
        frame.right.push_front(self.node.clone());
        Some(Cursor {
            node: prev,
            path,
            end: false,
        })
    }

    /// Returns a cursor at the same position with the node replaced. The
    /// replacement is propagated upward through rebuilds on ascent.
    pub fn replace(self, node: S::Node) -> Self {
        Cursor { node, ..self }
    }

    /// Returns a cursor at the same position with the node replaced by
    /// `f(node)`.
    pub fn edit<F>(self, f: F) -> Self
    where
        F: FnOnce(S::Node) -> S::Node,
    {
        let Cursor { node, path, end } = self;
        Cursor {
            node: f(node),
            path,
            end,
        }
    }

    /// Inserts `node` as the immediate left sibling of the current node,
    /// staying positioned on the current node.
    pub fn insert_left(&self, node: S::Node) -> ZipperResult<Self> {
        if self.end {
            return Err(ZipperError::AtEnd);
        }
        let mut out = self.clone();
        match out.path.last_mut() {
            Some(frame) => frame.left.push(node),
            None => return Err(ZipperError::SiblingAtRoot),
        }
        Ok(out)
    }

    /// Inserts `node` as the immediate right sibling of the current node,
    /// staying positioned on the current node.
    pub fn insert_right(&self, node: S::Node) -> ZipperResult<Self> {
        if self.end {
            return Err(ZipperError::AtEnd);
        }
        let mut out = self.clone();
        match out.path.last_mut() {
            Some(frame) => frame.right.push_front(node),
            None => return Err(ZipperError::SiblingAtRoot),
        }
        Ok(out)
    }

    /// Inserts `node` as the first child of the current node, staying
    /// positioned on the current node. Errors on a leaf.
    pub fn insert_child(&self, node: S::Node) -> ZipperResult<Self> {
        if self.end {
            return Err(ZipperError::AtEnd);
        }
        if !S::is_branch(&self.node) {
            return Err(ZipperError::ChildOfLeaf);
        }
        let mut children = vec![node];
        children.extend(S::children(&self.node).iter().cloned());
        Ok(self.clone().replace(S::rebuild(self.node.clone(), children)))
    }

    /// Inserts `node` as the last child of the current node, staying
    /// positioned on the current node. Errors on a leaf.
    pub fn append_child(&self, node: S::Node) -> ZipperResult<Self> {
        if self.end {
            return Err(ZipperError::AtEnd);
        }
        if !S::is_branch(&self.node) {
            return Err(ZipperError::ChildOfLeaf);
        }
        let mut children: Vec<S::Node> = S::children(&self.node).to_vec();
        children.push(node);
        Ok(self.clone().replace(S::rebuild(self.node.clone(), children)))
    }

    /// Removes the current node, landing on the node that would have
    /// preceded it in a depth-first walk: the rightmost descendant of the
    /// left sibling if there is one, else the parent. Errors at the root.
    pub fn remove(&self) -> ZipperResult<Self> {
        if self.end {
            return Err(ZipperError::AtEnd);
        }
        let mut path = self.path.clone();
        let frame = match path.pop() {
            Some(frame) => frame,
            None => return Err(ZipperError::RemoveRoot),
        };
        let Frame {
            parent,
            mut left,
            right,
        } = frame;
        match left.pop() {
            Some(prev) => {
                path.push(Frame {
                    parent,
                    left,
                    right,
                });
                Ok(rightmost_descendant(Cursor {
                    node: prev,
                    path,
                    end: false,
                }))
            }
            None => {
                let children: Vec<S::Node> = right.into_iter().collect();
                Ok(Cursor {
                    node: S::rebuild(parent, children),
                    path,
                    end: false,
                })
            }
        }
    }

    /// Fully ascends, applying all pending rebuilds, and returns the final
    /// root node. On the end marker this is the already rebuilt root.
    pub fn root(self) -> S::Node {
        let mut cursor = self;
        loop {
            match cursor.up() {
                Some(parent) => cursor = parent,
                None => return cursor.node,
            }
        }
    }

    /// Converts a root-positioned cursor into the end-of-walk marker.
    pub(crate) fn into_end(self) -> Self {
        debug_assert!(self.path.is_empty());
        Cursor { end: true, ..self }
    }
}

/// Dives to the last child repeatedly until a leaf or childless branch is
/// reached. Mirror image of the leftmost descent used by postorder.
fn rightmost_descendant<S: TreeShape>(cursor: Cursor<S>) -> Cursor<S> {
    let mut cursor = cursor;
    while let Some(child) = cursor.down() {
        let mut rightmost = child;
        while let Some(sibling) = rightmost.right() {
            rightmost = sibling;
        }
        cursor = rightmost;
    }
    cursor
}
