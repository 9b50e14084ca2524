//! Selection State: at most one selected node

use super::node::NodeId;
use super::registry::NodeRegistry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<NodeId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the registry's `current` node selected, if any
    pub fn for_current(registry: &NodeRegistry) -> Self {
        Self {
            selected: registry.current().map(|n| n.id),
        }
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected == Some(id)
    }

    /// Select `id`, or clear the selection if it is already selected
    pub fn toggle(&mut self, id: NodeId) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    pub fn select(&mut self, id: NodeId) {
        self.selected = Some(id);
    }

    /// Re-validate after the registry was replaced.
    ///
    /// A selection naming a vanished node is dropped; an empty selection
    /// falls back to the new `current` node.
    pub fn reconcile(&mut self, registry: &NodeRegistry) {
        if let Some(id) = self.selected {
            if !registry.contains(id) {
                self.selected = None;
            }
        }
        if self.selected.is_none() {
            self.selected = registry.current().map(|n| n.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::node::{Node, NodeStatus};

    #[test]
    fn test_toggle() {
        let mut selection = SelectionState::new();
        selection.toggle(NodeId(1));
        assert_eq!(selection.selected(), Some(NodeId(1)));
        selection.toggle(NodeId(2));
        assert_eq!(selection.selected(), Some(NodeId(2)));
        selection.toggle(NodeId(2));
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_reconcile() {
        let registry = NodeRegistry::from_nodes(vec![
            Node::new(1, "a").with_status(NodeStatus::Completed),
            Node::new(2, "b").with_status(NodeStatus::Current),
        ]);

        let mut selection = SelectionState::new();
        selection.select(NodeId(7));
        selection.reconcile(&registry);
        assert_eq!(selection.selected(), Some(NodeId(2)));

        selection.select(NodeId(1));
        selection.reconcile(&registry);
        assert_eq!(selection.selected(), Some(NodeId(1)));

        selection.reconcile(&NodeRegistry::new());
        assert_eq!(selection.selected(), None);
    }
}
