//! Layout Engine
//!
//! - Centering: default pan that horizontally centers the node sequence
//! - Path: left-to-right placement of ingested milestones on a baseline

use super::node::{Node, NodeStatus};
use eframe::egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Pan offset that horizontally centers `content_width` inside `container_width`
pub fn centering_pan(container_width: f32, content_width: f32) -> Vec2 {
    Vec2::new((container_width - content_width) / 2.0, 0.0)
}

/// Tracks the inputs of the centering default and its last result
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    container_width: f32,
    content_width: f32,
    default_pan: Vec2,
}

impl LayoutEngine {
    pub fn new(container_width: f32) -> Self {
        Self {
            container_width,
            content_width: 0.0,
            default_pan: centering_pan(container_width, 0.0),
        }
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Last computed centering default
    pub fn default_pan(&self) -> Vec2 {
        self.default_pan
    }

    /// Recompute for a new content extent
    pub fn set_content_width(&mut self, content_width: f32) -> Vec2 {
        self.content_width = content_width;
        self.recompute()
    }

    /// Recompute for a resized container
    pub fn set_container_width(&mut self, container_width: f32) -> Vec2 {
        self.container_width = container_width;
        self.recompute()
    }

    fn recompute(&mut self) -> Vec2 {
        self.default_pan = centering_pan(self.container_width, self.content_width);
        log::debug!(
            "Centering pan {:?} (container {}, content {})",
            self.default_pan,
            self.container_width,
            self.content_width
        );
        self.default_pan
    }
}

/// Placement of milestones along the horizontal roadmap path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLayout {
    /// X of the first node's left edge
    pub start_x: f32,
    /// Space between consecutive node edges
    pub gap: f32,
    /// Y of the line all node centers sit on
    pub baseline_y: f32,
    /// Diameter of regular nodes
    pub node_size: f32,
    /// Diameter of the `current` node
    pub current_size: f32,
    /// Diameter of the final node
    pub final_size: f32,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            start_x: 25.0,
            gap: 100.0,
            baseline_y: 220.0,
            node_size: 50.0,
            current_size: 90.0,
            final_size: 110.0,
        }
    }
}

impl PathLayout {
    fn size_for(&self, node: &Node) -> f32 {
        if node.is_final {
            self.final_size
        } else if node.status == NodeStatus::Current {
            self.current_size
        } else {
            self.node_size
        }
    }

    /// Assign position and size to every node, in order
    pub fn apply(&self, nodes: &mut [Node]) {
        let mut x = self.start_x;
        for node in nodes.iter_mut() {
            let size = self.size_for(node);
            node.size = size;
            node.position = Pos2::new(x, self.baseline_y - size / 2.0);
            x += size + self.gap;
        }
    }
}
