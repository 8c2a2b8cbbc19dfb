/*
 * error.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! Error types for structural edits on a cursor.
//!
//! Plain navigation never errors: a move that is not possible returns
//! `None`. Only the structural edits (insert/remove) have misuse cases
//! worth naming.

use thiserror::Error;

/// Errors that can occur when structurally editing a tree through a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZipperError {
    /// The root node cannot be removed.
    #[error("cannot remove the root node")]
    RemoveRoot,

    /// The root node has no siblings to insert next to.
    #[error("cannot insert a sibling at the root")]
    SiblingAtRoot,

    /// Children can only be inserted into branch nodes.
    #[error("cannot insert a child into a leaf node")]
    ChildOfLeaf,

    /// The end-of-walk marker is terminal; only `root` is meaningful on it.
    #[error("cannot edit the end-of-walk marker")]
    AtEnd,
}

/// Result type for structural edits.
pub type ZipperResult<T> = Result<T, ZipperError>;
