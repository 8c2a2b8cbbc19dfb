//! Tagged markup tree values and their cursor adapter.
//!
//! This crate pairs a concrete markup value model with the generic cursor
//! from `tagtree-zipper`. A node is an ordered sequence whose first element
//! is a tag, optionally followed by an attribute mapping, followed by zero
//! or more children — the shape of hiccup-style markup. The adapter in
//! [`shape`] teaches the cursor how to read children out of that shape and
//! how to rebuild a node around an edited child list; everything about
//! traversal order lives upstream in `tagtree-zipper`.
//!
//! # Example
//!
//! ```rust
//! use tagtree_markup::{cursor, postorder, Value};
//!
//! // ["a", ["b"], ["c", ["d"]]]
//! let tree: Value = serde_json::from_str(r#"["a", ["b"], ["c", ["d"]]]"#).unwrap();
//!
//! let tags: Vec<String> = postorder(cursor(tree))
//!     .filter_map(|loc| match loc.node().tag() {
//!         Some(Value::Str(tag)) => Some(tag.clone()),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(tags, vec!["b", "d", "c", "a"]);
//! ```

pub mod shape;
pub mod value;

pub use shape::{children, cursor, is_branch, rebuild, MarkupCursor, MarkupShape};
pub use value::{AttrMap, Value};

// The traversal surface, re-exported so markup callers need only this crate.
pub use tagtree_zipper::{
    leftmost_descendant, postorder, postorder_first, postorder_next, preorder, preorder_next,
    root_location, Cursor, Postorder, Preorder, TreeShape, ZipperError, ZipperResult,
};
