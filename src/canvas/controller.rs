//! Pointer Interaction Controller
//!
//! Turns raw pointer and wheel input into viewport and selection changes.
//! A gesture that starts on a node is a selection click, never a pan; a
//! gesture that starts on empty canvas is a pan, never a selection change.

use super::node::NodeId;
use super::registry::NodeRegistry;
use super::selection::SelectionState;
use super::viewport::{ViewportTransform, BUTTON_ZOOM_STEP, WHEEL_ZOOM_STEP};
use eframe::egui::{Pos2, Vec2};

/// What the pointer went down on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas area
    Canvas,
    /// A clickable node element
    Node(NodeId),
}

/// Raw input delivered by the render layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { pos: Pos2, target: PointerTarget },
    Move { pos: Pos2 },
    /// `target` is the node under the pointer on release, if any
    Up { target: Option<NodeId> },
    Leave,
    /// Vertical wheel delta; positive scrolls down (zooms out)
    Wheel { delta_y: f32 },
}

/// What an event changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub pan_changed: bool,
    pub zoom_changed: bool,
    pub selection_changed: bool,
    /// The host must suppress its default handling (page scroll)
    pub prevent_default: bool,
}

/// Current pointer gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    /// Dragging empty canvas; `start_pan` is pointer position minus pan at press
    Panning { start_pan: Vec2 },
    /// Pressed on a node, waiting for release
    NodePressed(NodeId),
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,

    /// Set once a drag moves the pan away from the applied default
    user_panned: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            user_panned: false,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether the user has dragged since the default pan was last applied
    pub fn user_panned(&self) -> bool {
        self.user_panned
    }

    /// The default pan was just applied to the viewport
    pub(crate) fn mark_default_applied(&mut self) {
        self.user_panned = false;
    }

    /// Dispatch one input event
    pub fn handle(
        &mut self,
        event: PointerEvent,
        viewport: &mut ViewportTransform,
        selection: &mut SelectionState,
        registry: &NodeRegistry,
    ) -> EventOutcome {
        match event {
            PointerEvent::Down { pos, target } => self.pointer_down(pos, target, viewport),
            PointerEvent::Move { pos } => self.pointer_move(pos, viewport),
            PointerEvent::Up { target } => self.pointer_up(target, viewport, selection, registry),
            PointerEvent::Leave => self.pointer_leave(viewport),
            PointerEvent::Wheel { delta_y } => self.wheel(delta_y, viewport),
        }
    }

    fn pointer_down(
        &mut self,
        pos: Pos2,
        target: PointerTarget,
        viewport: &mut ViewportTransform,
    ) -> EventOutcome {
        match target {
            PointerTarget::Node(id) => {
                viewport.set_panning(false);
                self.gesture = Gesture::NodePressed(id);
            }
            PointerTarget::Canvas => {
                viewport.set_panning(true);
                self.gesture = Gesture::Panning {
                    start_pan: pos.to_vec2() - viewport.pan(),
                };
            }
        }
        EventOutcome::default()
    }

    fn pointer_move(&mut self, pos: Pos2, viewport: &mut ViewportTransform) -> EventOutcome {
        let Gesture::Panning { start_pan } = self.gesture else {
            return EventOutcome::default();
        };

        let pan = pos.to_vec2() - start_pan;
        if pan == viewport.pan() {
            return EventOutcome::default();
        }
        viewport.set_pan(pan);
        self.user_panned = true;
        EventOutcome {
            pan_changed: true,
            ..Default::default()
        }
    }

    fn pointer_up(
        &mut self,
        target: Option<NodeId>,
        viewport: &mut ViewportTransform,
        selection: &mut SelectionState,
        registry: &NodeRegistry,
    ) -> EventOutcome {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        viewport.set_panning(false);

        match gesture {
            Gesture::NodePressed(id) if target == Some(id) => self.click_node(id, selection, registry),
            _ => EventOutcome::default(),
        }
    }

    fn pointer_leave(&mut self, viewport: &mut ViewportTransform) -> EventOutcome {
        self.gesture = Gesture::Idle;
        viewport.set_panning(false);
        EventOutcome::default()
    }

    fn wheel(&mut self, delta_y: f32, viewport: &mut ViewportTransform) -> EventOutcome {
        let step = if delta_y > 0.0 {
            -WHEEL_ZOOM_STEP
        } else if delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            0.0
        };
        EventOutcome {
            zoom_changed: apply_zoom_step(viewport, step),
            prevent_default: true,
            ..Default::default()
        }
    }

    /// Toggle selection of a clicked node. Ids the registry doesn't know are ignored.
    pub fn click_node(
        &mut self,
        id: NodeId,
        selection: &mut SelectionState,
        registry: &NodeRegistry,
    ) -> EventOutcome {
        if !registry.contains(id) {
            log::debug!("Ignoring click on unknown node {}", id);
            return EventOutcome::default();
        }
        selection.toggle(id);
        EventOutcome {
            selection_changed: true,
            ..Default::default()
        }
    }

    pub fn zoom_in(&mut self, viewport: &mut ViewportTransform) -> EventOutcome {
        EventOutcome {
            zoom_changed: apply_zoom_step(viewport, BUTTON_ZOOM_STEP),
            ..Default::default()
        }
    }

    pub fn zoom_out(&mut self, viewport: &mut ViewportTransform) -> EventOutcome {
        EventOutcome {
            zoom_changed: apply_zoom_step(viewport, -BUTTON_ZOOM_STEP),
            ..Default::default()
        }
    }

    /// Zoom back to 1 and restore the centering default
    pub fn reset(&mut self, viewport: &mut ViewportTransform, default_pan: Vec2) -> EventOutcome {
        let before = (viewport.zoom(), viewport.pan());
        self.gesture = Gesture::Idle;
        viewport.reset(default_pan);
        self.mark_default_applied();
        EventOutcome {
            pan_changed: before.1 != default_pan,
            zoom_changed: before.0 != 1.0,
            ..Default::default()
        }
    }
}

fn apply_zoom_step(viewport: &mut ViewportTransform, step: f32) -> bool {
    if step == 0.0 {
        return false;
    }
    let before = viewport.zoom();
    viewport.zoom_by(step);
    viewport.zoom() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::node::Node;
    use crate::canvas::viewport::{MAX_ZOOM, MIN_ZOOM};

    struct Fixture {
        controller: InteractionController,
        viewport: ViewportTransform,
        selection: SelectionState,
        registry: NodeRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                controller: InteractionController::new(),
                viewport: ViewportTransform::new(),
                selection: SelectionState::new(),
                registry: NodeRegistry::from_nodes(vec![
                    Node::new(1, "a").with_position(25.0, 195.0).with_size(50.0),
                    Node::new(2, "b").with_position(175.0, 195.0).with_size(50.0),
                ]),
            }
        }

        fn send(&mut self, event: PointerEvent) -> EventOutcome {
            self.controller
                .handle(event, &mut self.viewport, &mut self.selection, &self.registry)
        }
    }

    #[test]
    fn test_drag_pans_by_delta() {
        let mut f = Fixture::new();
        f.viewport.set_pan(Vec2::new(100.0, 0.0));
        f.selection.select(NodeId(1));

        f.send(PointerEvent::Down { pos: Pos2::new(400.0, 300.0), target: PointerTarget::Canvas });
        assert!(f.viewport.is_panning());
        let outcome = f.send(PointerEvent::Move { pos: Pos2::new(430.0, 280.0) });
        assert!(outcome.pan_changed);
        f.send(PointerEvent::Up { target: None });

        assert_eq!(f.viewport.pan(), Vec2::new(130.0, -20.0));
        assert!(!f.viewport.is_panning());
        assert_eq!(f.selection.selected(), Some(NodeId(1)));
        assert!(f.controller.user_panned());
    }

    #[test]
    fn test_node_click_toggles_without_panning() {
        let mut f = Fixture::new();
        let pan = f.viewport.pan();

        f.send(PointerEvent::Down { pos: Pos2::new(50.0, 220.0), target: PointerTarget::Node(NodeId(1)) });
        assert!(!f.viewport.is_panning());
        let outcome = f.send(PointerEvent::Up { target: Some(NodeId(1)) });
        assert!(outcome.selection_changed);
        assert_eq!(f.selection.selected(), Some(NodeId(1)));
        assert_eq!(f.viewport.pan(), pan);

        // Same node again toggles off
        f.send(PointerEvent::Down { pos: Pos2::new(50.0, 220.0), target: PointerTarget::Node(NodeId(1)) });
        f.send(PointerEvent::Up { target: Some(NodeId(1)) });
        assert_eq!(f.selection.selected(), None);
    }

    #[test]
    fn test_moves_during_node_press_do_not_pan() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Down { pos: Pos2::new(50.0, 220.0), target: PointerTarget::Node(NodeId(2)) });
        let outcome = f.send(PointerEvent::Move { pos: Pos2::new(250.0, 400.0) });
        assert_eq!(outcome, EventOutcome::default());
        assert_eq!(f.viewport.pan(), Vec2::ZERO);
    }

    #[test]
    fn test_leave_ends_gestures() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Down { pos: Pos2::new(0.0, 0.0), target: PointerTarget::Canvas });
        f.send(PointerEvent::Leave);
        assert!(!f.viewport.is_panning());
        assert_eq!(f.controller.gesture(), Gesture::Idle);

        // Further moves do nothing once idle
        f.send(PointerEvent::Move { pos: Pos2::new(90.0, 90.0) });
        assert_eq!(f.viewport.pan(), Vec2::ZERO);

        // Leaving during a node press cancels the click
        f.send(PointerEvent::Down { pos: Pos2::new(50.0, 220.0), target: PointerTarget::Node(NodeId(1)) });
        f.send(PointerEvent::Leave);
        f.send(PointerEvent::Up { target: Some(NodeId(1)) });
        assert_eq!(f.selection.selected(), None);
    }

    #[test]
    fn test_release_over_other_node_is_not_a_click() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Down { pos: Pos2::new(50.0, 220.0), target: PointerTarget::Node(NodeId(1)) });
        f.send(PointerEvent::Up { target: Some(NodeId(2)) });
        assert_eq!(f.selection.selected(), None);
    }

    #[test]
    fn test_wheel_zoom() {
        let mut f = Fixture::new();
        let outcome = f.send(PointerEvent::Wheel { delta_y: 120.0 });
        assert!(outcome.prevent_default);
        assert!(outcome.zoom_changed);
        assert!((f.viewport.zoom() - 0.9).abs() < 1e-6);

        f.send(PointerEvent::Wheel { delta_y: -3.0 });
        assert!((f.viewport.zoom() - 1.0).abs() < 1e-6);

        let outcome = f.send(PointerEvent::Wheel { delta_y: 0.0 });
        assert!(outcome.prevent_default);
        assert!(!outcome.zoom_changed);

        for _ in 0..50 {
            f.send(PointerEvent::Wheel { delta_y: 1.0 });
            assert!(f.viewport.zoom() >= MIN_ZOOM);
        }
        assert_eq!(f.viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_buttons_stay_in_range() {
        let mut f = Fixture::new();
        for _ in 0..10 {
            f.controller.zoom_in(&mut f.viewport);
            assert!(f.viewport.zoom() <= MAX_ZOOM);
        }
        assert_eq!(f.viewport.zoom(), MAX_ZOOM);
        assert!(!f.controller.zoom_in(&mut f.viewport).zoom_changed);

        for _ in 0..10 {
            f.controller.zoom_out(&mut f.viewport);
            assert!(f.viewport.zoom() >= MIN_ZOOM);
        }
        assert_eq!(f.viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Down { pos: Pos2::new(0.0, 0.0), target: PointerTarget::Canvas });
        f.send(PointerEvent::Move { pos: Pos2::new(-80.0, 15.0) });
        f.controller.zoom_in(&mut f.viewport);

        let outcome = f.controller.reset(&mut f.viewport, Vec2::new(200.0, 0.0));
        assert!(outcome.pan_changed && outcome.zoom_changed);
        assert_eq!(f.viewport.zoom(), 1.0);
        assert_eq!(f.viewport.pan(), Vec2::new(200.0, 0.0));
        assert!(!f.viewport.is_panning());
        assert!(!f.controller.user_panned());
    }

    #[test]
    fn test_click_on_unknown_node_is_ignored() {
        let mut f = Fixture::new();
        let outcome = f.controller.click_node(NodeId(99), &mut f.selection, &f.registry);
        assert!(!outcome.selection_changed);
        assert_eq!(f.selection.selected(), None);
    }
}
