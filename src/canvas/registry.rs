//! Node Registry
//!
//! Ordered sequence of nodes for the active roadmap. Replaced wholesale when
//! the data provider delivers a new sequence.

use super::node::{Node, NodeId, NodeStatus};
use eframe::egui::Pos2;

#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,

    /// Incremented on every replacement
    generation: u64,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes, generation: 0 }
    }

    /// Swap in a new sequence
    pub fn replace(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
        self.generation += 1;
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Index of the first node flagged `current`
    pub fn current_index(&self) -> Option<usize> {
        self.nodes.iter().position(|n| n.status == NodeStatus::Current)
    }

    pub fn current(&self) -> Option<&Node> {
        self.current_index().map(|i| &self.nodes[i])
    }

    /// Topmost node under a content-layer point (later nodes draw on top)
    pub fn node_at(&self, point: Pos2) -> Option<&Node> {
        self.nodes.iter().rev().find(|n| n.contains(point))
    }

    /// Rightmost extent of the sequence, 0 when empty
    pub fn content_width(&self) -> f32 {
        self.nodes.iter().map(Node::right).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node> {
        vec![
            Node::new(1, "a").with_position(25.0, 195.0).with_size(50.0).with_status(NodeStatus::Completed),
            Node::new(2, "b").with_position(175.0, 180.0).with_size(90.0).with_status(NodeStatus::Current),
            Node::new(3, "c").with_position(890.0, 165.0).with_size(110.0).final_node(),
        ]
    }

    #[test]
    fn test_lookup() {
        let registry = NodeRegistry::from_nodes(sample());
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.index_of(NodeId(3)), Some(2));
        assert!(registry.contains(NodeId(2)));
        assert!(!registry.contains(NodeId(9)));
        assert_eq!(registry.current().map(|n| n.id), Some(NodeId(2)));
    }

    #[test]
    fn test_content_width() {
        let registry = NodeRegistry::from_nodes(sample());
        assert_eq!(registry.content_width(), 1000.0);
        assert_eq!(NodeRegistry::new().content_width(), 0.0);
    }

    #[test]
    fn test_node_at() {
        let registry = NodeRegistry::from_nodes(sample());
        assert_eq!(registry.node_at(Pos2::new(50.0, 220.0)).map(|n| n.id), Some(NodeId(1)));
        assert!(registry.node_at(Pos2::new(600.0, 220.0)).is_none());
    }

    #[test]
    fn test_replace_bumps_generation() {
        let mut registry = NodeRegistry::new();
        registry.replace(sample());
        registry.replace(Vec::new());
        assert_eq!(registry.generation(), 2);
        assert!(registry.is_empty());
        assert!(registry.current().is_none());
    }
}
