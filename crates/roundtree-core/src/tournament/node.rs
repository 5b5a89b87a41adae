use crate::tournament::labels::NodeLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents one branch in the outcome tree.
/// Children are not stored here, they follow from the node's arena index.
pub struct Node {
    label: NodeLabel,
    depth: u32,
}

impl Node {
    /// Create a new Node instance
    pub fn new(label: NodeLabel, depth: u32) -> Self {
        Node { label, depth }
    }

    /// Return the label of a specific node
    pub fn label(&self) -> &NodeLabel {
        &self.label
    }

    /// Return the depth of a specific node, the root sits at 0
    pub fn depth(&self) -> u32 {
        self.depth
    }
}
