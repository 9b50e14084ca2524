//! Interactive Roadmap Viewer
//!
//! Native egui rendering of the roadmap canvas with:
//! - Pan (drag empty canvas) and zoom (mouse wheel)
//! - Click-to-select nodes with a detail card
//! - Status-aware node styling and lock badges

use crate::canvas::{NodeView, PointerEvent, PointerTarget, RoadmapCanvas, VisualStyle};
use crate::theme::RoadmapTheme;
use eframe::egui::{self, Align2, Color32, CursorIcon, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

/// Width of the detail card in content coordinates
const CARD_WIDTH: f32 = 240.0;
/// Top of the detail card in content coordinates (fixed row under the path)
const CARD_TOP: f32 = 300.0;

/// Main roadmap viewer widget
pub struct RoadmapViewer {
    /// Interaction state
    pub canvas: RoadmapCanvas,

    /// Colors
    pub theme: RoadmapTheme,

    /// Draw the dashed path line
    pub show_path: bool,

    /// Whether the pointer was over the canvas last frame
    pointer_inside: bool,

    /// Load error shown as a banner
    error: Option<String>,
}

impl RoadmapViewer {
    pub fn new(canvas: RoadmapCanvas) -> Self {
        Self {
            canvas,
            theme: RoadmapTheme::default(),
            show_path: true,
            pointer_inside: false,
            error: None,
        }
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Main UI function
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        self.canvas.set_container_width(rect.width());
        self.handle_input(ui, rect);

        painter.rect_filled(rect, 0.0, self.theme.canvas_bg);
        let painter = painter.with_clip_rect(rect);

        if self.show_path {
            self.draw_path(&painter, rect);
        }

        for view in self.canvas.node_views() {
            self.draw_node(&painter, &view, rect);
        }

        if let Some(node) = self.canvas.selected_node() {
            self.draw_detail_card(&painter, rect, &node.title, &node.description, node.center().x);
        }

        if let Some(ref error) = self.error {
            self.draw_error(&painter, rect, error);
        }
    }

    /// Translate this frame's pointer state into canvas events
    fn handle_input(&mut self, ui: &egui::Ui, rect: Rect) {
        let (pressed, released, pointer, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                i.raw_scroll_delta.y,
            )
        });
        let inside = pointer.is_some_and(|p| rect.contains(p));

        if inside && scroll != 0.0 {
            // egui reports wheel-up as positive; the controller expects DOM sign
            let outcome = self.canvas.handle(PointerEvent::Wheel { delta_y: -scroll });
            if outcome.prevent_default {
                ui.ctx().input_mut(|i| {
                    i.raw_scroll_delta = Vec2::ZERO;
                    i.smooth_scroll_delta = Vec2::ZERO;
                });
            }
        }

        if let Some(pos) = pointer {
            if pressed && inside {
                let target = self.canvas.target_at(pos, rect);
                self.canvas.handle(PointerEvent::Down { pos, target });
            }
            if inside {
                self.canvas.handle(PointerEvent::Move { pos });
            }
        }

        if released {
            let target = pointer
                .filter(|p| rect.contains(*p))
                .and_then(|p| match self.canvas.target_at(p, rect) {
                    PointerTarget::Node(id) => Some(id),
                    PointerTarget::Canvas => None,
                });
            self.canvas.handle(PointerEvent::Up { target });
        }

        if self.pointer_inside && !inside {
            self.canvas.handle(PointerEvent::Leave);
        }
        self.pointer_inside = inside;

        if inside {
            let icon = if self.canvas.is_panning() {
                CursorIcon::Grabbing
            } else if pointer.is_some_and(|p| matches!(self.canvas.target_at(p, rect), PointerTarget::Node(_))) {
                CursorIcon::PointingHand
            } else {
                CursorIcon::Grab
            };
            ui.ctx().set_cursor_icon(icon);
        }
    }

    /// Dashed line through all node centers
    fn draw_path(&self, painter: &Painter, rect: Rect) {
        let nodes = self.canvas.registry().nodes();
        let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
            return;
        };
        let viewport = self.canvas.viewport();
        let start = viewport.to_screen(first.center(), rect);
        let end = viewport.to_screen(Pos2::new(last.center().x, first.center().y), rect);
        let zoom = viewport.zoom();
        draw_dashed_line(painter, start, end, 8.0 * zoom, self.theme.path_line, 14.0 * zoom);
    }

    /// Draw a node
    fn draw_node(&self, painter: &Painter, view: &NodeView<'_>, rect: Rect) {
        let viewport = self.canvas.viewport();
        let zoom = viewport.zoom();
        let node_rect = viewport.transform_rect(view.node.rect(), rect);
        let center = node_rect.center();
        let radius = node_rect.width() / 2.0;
        let palette = self.theme.palette(view.style);

        if let Some(glow) = palette.glow {
            painter.circle_filled(center, radius + 10.0 * zoom, glow);
        }
        painter.circle(
            center,
            radius,
            palette.fill,
            Stroke::new(palette.stroke_width * zoom, palette.stroke),
        );
        if view.selected {
            painter.circle_stroke(
                center,
                radius + 6.0 * zoom,
                Stroke::new(2.0 * zoom, self.theme.selection_ring),
            );
        }

        let icon_size = match view.style {
            VisualStyle::Final => 56.0,
            VisualStyle::Current => 40.0,
            _ => 24.0,
        } * zoom;
        painter.text(
            center,
            Align2::CENTER_CENTER,
            &view.node.icon,
            FontId::proportional(icon_size),
            palette.icon,
        );

        if view.node.is_locked() {
            let is_final = view.style == VisualStyle::Final;
            let badge_radius = if is_final { 17.0 } else { 14.0 } * zoom;
            let badge_center = Pos2::new(node_rect.max.x - 2.0 * zoom, node_rect.min.y + 6.0 * zoom);
            let badge_color = if is_final {
                self.theme.lock_badge_final
            } else {
                self.theme.lock_badge
            };
            painter.circle_filled(badge_center, badge_radius, badge_color);
            painter.text(
                badge_center,
                Align2::CENTER_CENTER,
                "🔒",
                FontId::proportional(badge_radius),
                Color32::WHITE,
            );
        }
    }

    /// Detail card on a fixed row, centered under the node
    fn draw_detail_card(&self, painter: &Painter, rect: Rect, title: &str, description: &str, center_x: f32) {
        let viewport = self.canvas.viewport();
        let zoom = viewport.zoom();
        let padding = 16.0 * zoom;
        let inner_width = (CARD_WIDTH * zoom - 2.0 * padding).max(1.0);

        let title_galley = painter.layout(
            title.to_string(),
            FontId::proportional(14.0 * zoom),
            self.theme.card_title,
            inner_width,
        );
        let body_galley = painter.layout(
            description.to_string(),
            FontId::proportional(13.0 * zoom),
            self.theme.card_text,
            inner_width,
        );

        let top_left = viewport.to_screen(Pos2::new(center_x - CARD_WIDTH / 2.0, CARD_TOP), rect);
        let height = padding * 2.0 + title_galley.size().y + 8.0 * zoom + body_galley.size().y;
        let card = Rect::from_min_size(top_left, Vec2::new(CARD_WIDTH * zoom, height));

        painter.rect_filled(card, 16.0 * zoom, self.theme.card_bg);
        painter.rect_stroke(card, 16.0 * zoom, Stroke::new(1.0, self.theme.card_border));

        let title_pos = card.min + Vec2::splat(padding);
        let body_pos = title_pos + Vec2::new(0.0, title_galley.size().y + 8.0 * zoom);
        painter.galley(title_pos, title_galley, self.theme.card_title);
        painter.galley(body_pos, body_galley, self.theme.card_text);
    }

    /// Draw error message
    fn draw_error(&self, painter: &Painter, rect: Rect, error: &str) {
        let error_rect = Rect::from_center_size(rect.center(), Vec2::new(400.0, 60.0));
        painter.rect_filled(error_rect, 8.0, Color32::from_rgb(60, 20, 20));
        painter.rect_stroke(error_rect, 8.0, Stroke::new(2.0, self.theme.error));

        painter.text(
            error_rect.center(),
            Align2::CENTER_CENTER,
            format!("⚠ {}", error),
            FontId::proportional(14.0),
            self.theme.error,
        );
    }
}

/// Draw a dashed line
fn draw_dashed_line(painter: &Painter, start: Pos2, end: Pos2, width: f32, color: Color32, dash_len: f32) {
    let dir = end - start;
    let len = dir.length();
    if len <= f32::EPSILON || dash_len <= f32::EPSILON {
        return;
    }
    let dir = dir / len;

    let mut pos = 0.0;
    let mut drawing = true;

    while pos < len {
        let next = (pos + dash_len).min(len);
        if drawing {
            let p1 = start + dir * pos;
            let p2 = start + dir * next;
            painter.line_segment([p1, p2], Stroke::new(width, color));
        }
        pos = next;
        drawing = !drawing;
    }
}
