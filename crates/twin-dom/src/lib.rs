//! twin DOM - read-only document tree
//!
//! Arena-allocated DOM built once per input file and never mutated
//! afterwards. Nodes live in a `Vec` owned by the tree and refer to each
//! other through `NodeId` indices.

mod document;
mod node;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Check that this id refers to a real node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
