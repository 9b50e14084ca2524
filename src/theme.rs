//! Roadmap color themes
//!
//! Maps node visual buckets and canvas chrome to egui colors.

use crate::canvas::VisualStyle;
use eframe::egui::Color32;

/// Colors for one node bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePalette {
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
    /// Soft halo drawn behind the node, if any
    pub glow: Option<Color32>,
    pub icon: Color32,
}

#[derive(Debug, Clone, Copy)]
pub struct RoadmapTheme {
    /// Background color for the canvas
    pub canvas_bg: Color32,

    /// Dashed path line behind the nodes
    pub path_line: Color32,

    pub completed: NodePalette,
    pub current: NodePalette,
    pub locked: NodePalette,
    pub final_node: NodePalette,

    /// Ring drawn around the selected node
    pub selection_ring: Color32,

    /// Lock badge on locked nodes
    pub lock_badge: Color32,
    pub lock_badge_final: Color32,

    /// Detail card under the selected node
    pub card_bg: Color32,
    pub card_border: Color32,
    pub card_title: Color32,
    pub card_text: Color32,

    /// Header progress bar
    pub progress_fill: Color32,

    /// Error banner
    pub error: Color32,
}

impl RoadmapTheme {
    /// Mint-and-sky palette of the web app
    pub fn light() -> Self {
        let white = Color32::WHITE;
        Self {
            canvas_bg: hex("#F0FDF9"),
            path_line: hex("#BAE6FD"),
            completed: NodePalette {
                fill: hex("#00BC7D"),
                stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 204),
                stroke_width: 4.0,
                glow: Some(Color32::from_rgba_unmultiplied(0, 212, 146, 77)),
                icon: white,
            },
            current: NodePalette {
                fill: hex("#00A6F4"),
                stroke: hex("#615FFF"),
                stroke_width: 5.0,
                glow: Some(Color32::from_rgba_unmultiplied(97, 95, 255, 153)),
                icon: white,
            },
            locked: NodePalette {
                fill: hex("#F8FDFC"),
                stroke: hex("#6EE7B7"),
                stroke_width: 3.0,
                glow: None,
                icon: hex("#64748B"),
            },
            final_node: NodePalette {
                fill: hex("#FFF8E7"),
                stroke: hex("#6EE7B7"),
                stroke_width: 4.0,
                glow: Some(Color32::from_rgba_unmultiplied(110, 231, 183, 77)),
                icon: hex("#FFA500"),
            },
            selection_ring: hex("#0084D1"),
            lock_badge: hex("#00A6F4"),
            lock_badge_final: hex("#FFA500"),
            card_bg: Color32::from_rgba_unmultiplied(255, 255, 255, 242),
            card_border: hex("#DFF2FE"),
            card_title: hex("#314158"),
            card_text: hex("#6B7280"),
            progress_fill: hex("#00D492"),
            error: hex("#E7000B"),
        }
    }

    /// Same hues on a dark canvas
    pub fn dark() -> Self {
        let light = Self::light();
        Self {
            canvas_bg: hex("#101418"),
            path_line: darken(light.path_line, 0.5),
            locked: NodePalette {
                fill: hex("#1E2A30"),
                ..light.locked
            },
            final_node: NodePalette {
                fill: hex("#2E2A1E"),
                ..light.final_node
            },
            card_bg: Color32::from_rgba_unmultiplied(30, 36, 42, 242),
            card_border: hex("#2C3E50"),
            card_title: hex("#E2E8F0"),
            card_text: hex("#94A3B8"),
            ..light
        }
    }

    pub fn palette(&self, style: VisualStyle) -> &NodePalette {
        match style {
            VisualStyle::Completed => &self.completed,
            VisualStyle::Current => &self.current,
            VisualStyle::Locked => &self.locked,
            VisualStyle::Final => &self.final_node,
        }
    }
}

impl Default for RoadmapTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Parse a hex color string to Color32
pub fn parse_hex_color(color_str: &str) -> Option<Color32> {
    let hex = color_str.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color32::from_rgb(r, g, b))
    } else if hex.len() == 8 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    } else {
        None
    }
}

// Palette constants are literals above; a typo shows up as magenta.
fn hex(s: &str) -> Color32 {
    parse_hex_color(s).unwrap_or(Color32::from_rgb(255, 0, 255))
}

/// Darken a color by a factor (0.0 - 1.0)
fn darken(color: Color32, factor: f32) -> Color32 {
    let factor = (1.0 - factor).max(0.0);
    Color32::from_rgb(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
    )
}
