//! Roadmap Canvas
//!
//! Interaction state for the pannable/zoomable roadmap:
//! - Viewport transform (zoom + pan)
//! - Pointer controller (drag-to-pan vs click-to-select)
//! - Node registry and single selection
//! - Centering layout
//!
//! Everything here is total and synchronous; the render layer reads the
//! accessors on [`RoadmapCanvas`] and feeds input events back in.

pub mod controller;
pub mod layout;
pub mod node;
pub mod registry;
pub mod selection;
pub mod viewport;

pub use controller::{EventOutcome, Gesture, InteractionController, PointerEvent, PointerTarget};
pub use layout::{centering_pan, LayoutEngine, PathLayout};
pub use node::{Node, NodeId, NodeStatus, VisualStyle, DEFAULT_NODE_SIZE};
pub use registry::NodeRegistry;
pub use selection::SelectionState;
pub use viewport::{ViewportTransform, BUTTON_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};

use eframe::egui::{Pos2, Rect, Vec2};

/// Per-node data the render layer draws from
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub node: &'a Node,
    pub style: VisualStyle,
    pub selected: bool,
}

/// Owner of all canvas state
#[derive(Debug, Clone)]
pub struct RoadmapCanvas {
    viewport: ViewportTransform,
    selection: SelectionState,
    registry: NodeRegistry,
    layout: LayoutEngine,
    controller: InteractionController,
}

impl RoadmapCanvas {
    /// Empty canvas for a container of the given width
    pub fn new(container_width: f32) -> Self {
        let layout = LayoutEngine::new(container_width);
        let mut viewport = ViewportTransform::new();
        viewport.set_pan(layout.default_pan());
        Self {
            viewport,
            selection: SelectionState::new(),
            registry: NodeRegistry::new(),
            layout,
            controller: InteractionController::new(),
        }
    }

    /// Canvas populated with `nodes`, `current` node selected
    pub fn with_nodes(container_width: f32, nodes: Vec<Node>) -> Self {
        let mut canvas = Self::new(container_width);
        canvas.set_nodes(nodes);
        canvas
    }

    /// Replace the node sequence and recompute the centering default.
    ///
    /// The pan follows the new default unless the user has dragged since the
    /// default was last applied.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.registry.replace(nodes);
        self.selection.reconcile(&self.registry);
        let default_pan = self.layout.set_content_width(self.registry.content_width());
        log::info!(
            "Loaded {} roadmap nodes (generation {})",
            self.registry.len(),
            self.registry.generation()
        );
        self.follow_default(default_pan);
    }

    /// The container was resized
    pub fn set_container_width(&mut self, container_width: f32) {
        if container_width == self.layout.container_width() {
            return;
        }
        let default_pan = self.layout.set_container_width(container_width);
        self.follow_default(default_pan);
    }

    fn follow_default(&mut self, default_pan: Vec2) {
        if !self.controller.user_panned() {
            self.viewport.set_pan(default_pan);
            self.controller.mark_default_applied();
        }
    }

    /// Feed one pointer/wheel event
    pub fn handle(&mut self, event: PointerEvent) -> EventOutcome {
        self.controller
            .handle(event, &mut self.viewport, &mut self.selection, &self.registry)
    }

    /// Direct click on a node element
    pub fn click_node(&mut self, id: NodeId) -> EventOutcome {
        self.controller
            .click_node(id, &mut self.selection, &self.registry)
    }

    pub fn zoom_in(&mut self) -> EventOutcome {
        self.controller.zoom_in(&mut self.viewport)
    }

    pub fn zoom_out(&mut self) -> EventOutcome {
        self.controller.zoom_out(&mut self.viewport)
    }

    pub fn reset(&mut self) -> EventOutcome {
        let default_pan = self.layout.default_pan();
        self.controller.reset(&mut self.viewport, default_pan)
    }

    /// Classify a pointer position on a layer occupying `layer`
    pub fn target_at(&self, screen: Pos2, layer: Rect) -> PointerTarget {
        let world = self.viewport.to_world(screen, layer);
        match self.registry.node_at(world) {
            Some(node) => PointerTarget::Node(node.id),
            None => PointerTarget::Canvas,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    pub fn pan(&self) -> Vec2 {
        self.viewport.pan()
    }

    pub fn is_panning(&self) -> bool {
        self.viewport.is_panning()
    }

    pub fn default_pan(&self) -> Vec2 {
        self.layout.default_pan()
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selection.selected()
    }

    /// The selected node, for the detail panel
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.selected().and_then(|id| self.registry.get(id))
    }

    /// Nodes in draw order with their style bucket
    pub fn node_views(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        self.registry.nodes().iter().map(move |node| NodeView {
            node,
            style: node.visual_style(),
            selected: self.selection.is_selected(node.id),
        })
    }
}
