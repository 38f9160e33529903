//! Depth-first traversal of document trees
//!
//! The visitor decides per node whether to descend into its children.
//! Siblings are always visited, whatever the visitor answered for the
//! previous one.

use crate::tree::TreeNode;

/// Callback invoked for every visited node
pub trait NodeVisitor {
    /// Visit a node; return `true` to descend into its children
    fn visit(&mut self, node: &TreeNode) -> bool;
}

impl<F> NodeVisitor for F
where
    F: FnMut(&TreeNode) -> bool,
{
    fn visit(&mut self, node: &TreeNode) -> bool {
        self(node)
    }
}

/// Walk a sequence of nodes in pre-order
pub fn walk<V: NodeVisitor + ?Sized>(nodes: &[TreeNode], visitor: &mut V) {
    for node in nodes {
        if visitor.visit(node) {
            walk(&node.children, visitor);
        }
    }
}
