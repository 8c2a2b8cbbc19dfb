//! Persistent tree cursors with preorder and postorder traversal.
//!
//! This crate provides a generic zipper: an immutable cursor into a tree
//! that can navigate in every direction and rebuild edited ancestors on the
//! way back up, without ever mutating the original tree. The tree shape is
//! supplied by implementing [`TreeShape`]; the cursor and the traversal
//! algorithms never touch node internals directly.
//!
//! # Overview
//!
//! The core pieces are:
//! - [`TreeShape`]: the three operations a tree representation must supply
//!   (branch classification, child extraction, child-list replacement)
//! - [`Cursor`]: an immutable position within a tree, carrying enough
//!   context to rebuild every ancestor on ascent
//! - [`preorder`] / [`postorder`]: lazy traversal iterators built entirely
//!   on the cursor primitives
//!
//! Preorder is the walk the cursor supports natively (root first, then
//! descend). Postorder is the interesting one: the first node visited is
//! the deepest leftmost leaf, the root is visited last, and computing "next"
//! from an arbitrary position has to look sideways and downward before
//! looking upward. See [`postorder_next`] for the state machine.
//!
//! # Example
//!
//! ```rust
//! use tagtree_zipper::{Cursor, TreeShape, postorder};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Tree {
//!     Leaf(u32),
//!     Branch(Vec<Tree>),
//! }
//!
//! struct Shape;
//!
//! impl TreeShape for Shape {
//!     type Node = Tree;
//!
//!     fn is_branch(node: &Tree) -> bool {
//!         matches!(node, Tree::Branch(_))
//!     }
//!
//!     fn children(node: &Tree) -> &[Tree] {
//!         match node {
//!             Tree::Branch(children) => children,
//!             Tree::Leaf(_) => &[],
//!         }
//!     }
//!
//!     fn rebuild(_node: Tree, children: Vec<Tree>) -> Tree {
//!         Tree::Branch(children)
//!     }
//! }
//!
//! let tree = Tree::Branch(vec![Tree::Leaf(1), Tree::Branch(vec![Tree::Leaf(2)])]);
//! let leaves: Vec<Tree> = postorder(Cursor::<Shape>::new(tree))
//!     .map(|cursor| cursor.node().clone())
//!     .collect();
//! // Leaves before their parents, root last.
//! assert_eq!(leaves.len(), 4);
//! assert_eq!(leaves[0], Tree::Leaf(1));
//! ```

pub mod cursor;
pub mod error;
pub mod shape;
pub mod traverse;

pub use cursor::Cursor;
pub use error::{ZipperError, ZipperResult};
pub use shape::TreeShape;
pub use traverse::{
    leftmost_descendant, postorder, postorder_first, postorder_next, preorder, preorder_next,
    root_location, Postorder, Preorder,
};
