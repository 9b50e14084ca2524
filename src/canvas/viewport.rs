//! Viewport Transform Model
//!
//! Zoom factor, pan offset and panning flag for the roadmap content layer,
//! plus the world <-> screen mapping the render layer draws with.

use eframe::egui::{Pos2, Rect, Vec2};

/// Smallest allowed zoom factor
pub const MIN_ZOOM: f32 = 0.5;

/// Largest allowed zoom factor
pub const MAX_ZOOM: f32 = 2.0;

/// Zoom change per wheel notch
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Zoom change per toolbar button press
pub const BUTTON_ZOOM_STEP: f32 = 0.2;

/// Distance from a hundredth within which `zoom_by` snaps onto it
const ZOOM_SNAP_EPSILON: f32 = 1e-4;

/// Pan/zoom state of the content layer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    /// Current zoom level (1.0 = 100%), always within [MIN_ZOOM, MAX_ZOOM]
    zoom: f32,

    /// Translation applied to the content layer
    pan: Vec2,

    /// True between a pointer-down on empty canvas and the matching up/leave
    is_panning: bool,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportTransform {
    /// Identity transform: zoom 1, no pan
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            is_panning: false,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    /// Set the zoom level, clamped to [MIN_ZOOM, MAX_ZOOM].
    ///
    /// Non-finite input is ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Adjust zoom by a step and clamp.
    pub fn zoom_by(&mut self, delta: f32) {
        let target = self.zoom + delta;
        // Float error from repeated steps snaps back onto the 0.01 grid;
        // off-grid zoom levels are left alone.
        let snapped = (target * 100.0).round() / 100.0;
        if (target - snapped).abs() < ZOOM_SNAP_EPSILON {
            self.set_zoom(snapped);
        } else {
            self.set_zoom(target);
        }
    }

    /// Set the pan offset (unconstrained)
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    pub(crate) fn set_panning(&mut self, panning: bool) {
        self.is_panning = panning;
    }

    /// Back to zoom 1 at the given pan, leaving any drag
    pub fn reset(&mut self, default_pan: Vec2) {
        self.zoom = 1.0;
        self.pan = default_pan;
        self.is_panning = false;
    }

    /// CSS-equivalent transform for the content layer
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }

    /// Transition hint: no easing while the user is dragging
    pub fn transition(&self) -> &'static str {
        if self.is_panning {
            "none"
        } else {
            "transform 0.2s ease-out"
        }
    }

    /// Map a content-layer point to the screen.
    ///
    /// The layer fills `layer`, is translated by `pan` and scaled about its center.
    pub fn to_screen(&self, world: Pos2, layer: Rect) -> Pos2 {
        let half = layer.size() / 2.0;
        layer.min + self.pan + half + (world.to_vec2() - half) * self.zoom
    }

    /// Inverse of [`Self::to_screen`]
    pub fn to_world(&self, screen: Pos2, layer: Rect) -> Pos2 {
        let half = layer.size() / 2.0;
        let local = screen - layer.min - self.pan - half;
        (local / self.zoom + half).to_pos2()
    }

    /// Map a content-layer rectangle to the screen
    pub fn transform_rect(&self, rect: Rect, layer: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min, layer), self.to_screen(rect.max, layer))
    }
}
