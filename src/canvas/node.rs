//! Roadmap node data structures

use eframe::egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size used when the data provider gives none
pub const DEFAULT_NODE_SIZE: f32 = 70.0;

/// Stable node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Progress status of a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Completed,
    Current,
    Locked,
    #[default]
    Pending,
}

impl NodeStatus {
    /// Parse a provider status string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" | "complete" | "done" => Some(NodeStatus::Completed),
            "current" | "in_progress" | "active" => Some(NodeStatus::Current),
            "locked" => Some(NodeStatus::Locked),
            "pending" | "todo" => Some(NodeStatus::Pending),
            _ => None,
        }
    }
}

/// Visual bucket the render layer picks colors from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualStyle {
    Completed,
    Current,
    Locked,
    Final,
}

/// One roadmap milestone
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,

    /// Top-left corner in content-layer coordinates
    pub position: Pos2,

    /// Diameter
    pub size: f32,

    pub status: NodeStatus,
    pub title: String,
    pub description: String,

    /// Glyph drawn inside the node
    pub icon: String,

    /// Last node of the sequence
    pub is_final: bool,
}

impl Node {
    /// Create a pending node at the origin
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: Pos2::ZERO,
            size: DEFAULT_NODE_SIZE,
            status: NodeStatus::Pending,
            title: title.into(),
            description: String::new(),
            icon: String::new(),
            is_final: false,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Pos2::new(x, y);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn final_node(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn center(&self) -> Pos2 {
        self.position + Vec2::splat(self.size / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, Vec2::splat(self.size))
    }

    /// Right edge, used for the content extent
    pub fn right(&self) -> f32 {
        self.position.x + self.size
    }

    /// Circle hit test
    pub fn contains(&self, point: Pos2) -> bool {
        let radius = self.size / 2.0;
        self.center().distance_sq(point) <= radius * radius
    }

    /// Final node wins over status; pending renders like locked.
    pub fn visual_style(&self) -> VisualStyle {
        if self.is_final {
            return VisualStyle::Final;
        }
        match self.status {
            NodeStatus::Completed => VisualStyle::Completed,
            NodeStatus::Current => VisualStyle::Current,
            NodeStatus::Locked | NodeStatus::Pending => VisualStyle::Locked,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.status, NodeStatus::Locked | NodeStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_contains() {
        let node = Node::new(1, "Goal").with_position(100.0, 100.0).with_size(50.0);

        assert!(node.contains(Pos2::new(125.0, 125.0)));
        assert!(node.contains(Pos2::new(149.0, 125.0)));
        // Inside the bounding box but outside the circle
        assert!(!node.contains(Pos2::new(101.0, 101.0)));
        assert!(!node.contains(Pos2::new(50.0, 50.0)));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(NodeStatus::parse("Completed"), Some(NodeStatus::Completed));
        assert_eq!(NodeStatus::parse(" in_progress "), Some(NodeStatus::Current));
        assert_eq!(NodeStatus::parse("todo"), Some(NodeStatus::Pending));
        assert_eq!(NodeStatus::parse("unknown"), None);
    }

    #[test]
    fn test_visual_style() {
        let node = Node::new(1, "a").with_status(NodeStatus::Completed);
        assert_eq!(node.visual_style(), VisualStyle::Completed);
        assert_eq!(node.clone().final_node().visual_style(), VisualStyle::Final);

        let pending = Node::new(2, "b");
        assert_eq!(pending.visual_style(), VisualStyle::Locked);
        assert_eq!(
            Node::new(3, "c").with_status(NodeStatus::Current).visual_style(),
            VisualStyle::Current
        );
    }
}
