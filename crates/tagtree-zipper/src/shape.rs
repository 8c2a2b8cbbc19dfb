/*
 * shape.rs
 * Copyright (c) 2026 tagtree contributors
 */

//! The seam between the generic cursor and a concrete tree representation.

/// The three operations a tree representation must supply for the cursor
/// to navigate it.
///
/// Implementations are stateless: all three operations are associated
/// functions, and the implementing type is only a marker. The cursor never
/// inspects node internals beyond what these operations expose.
pub trait TreeShape {
    /// The node type of the tree.
    type Node: Clone;

    /// Whether `node` may have children. Only branches are descended into;
    /// [`children`](TreeShape::children) is never called on a non-branch.
    fn is_branch(node: &Self::Node) -> bool;

    /// The ordered children of `node`. A branch with no children returns
    /// an empty slice.
    fn children(node: &Self::Node) -> &[Self::Node];

    /// A copy of `node` with its child region replaced wholesale by
    /// `children`, which may differ in length from the original (edits may
    /// insert or remove nodes). Everything that is not a child — for a
    /// markup tree, the tag and attribute mapping — must be preserved.
    ///
    /// Guarantee: `Self::children(&Self::rebuild(node, cs)) == cs`.
    fn rebuild(node: Self::Node, children: Vec<Self::Node>) -> Self::Node;
}
