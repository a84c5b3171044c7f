//! Color helpers and swatch components.
//!
//! Conversions between the core color model and egui colors, gradient
//! painting for the picker zones, and the clickable swatches used for the
//! trigger button and the preset row.

use egui::{
    Color32, CornerRadius, CursorIcon, Mesh, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2, vec2,
};
use tintkit_core::{Hsv, Rgba};

use crate::{sizing, theme};

/// Preset colors offered below the picker (Tailwind 500-level shades).
pub const PRESETS: &[(&str, [u8; 3])] = &[
    ("Red", [239, 68, 68]),
    ("Orange", [249, 115, 22]),
    ("Amber", [245, 158, 11]),
    ("Lime", [132, 204, 22]),
    ("Emerald", [16, 185, 129]),
    ("Cyan", [6, 182, 212]),
    ("Blue", [59, 130, 246]),
    ("Indigo", [99, 102, 241]),
    ("Purple", [168, 85, 247]),
    ("Pink", [236, 72, 153]),
    ("Slate", [100, 116, 139]),
    ("Black", [0, 0, 0]),
];

/// Convert a core color to an egui color.
pub fn to_color32(color: &Rgba) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// The fully saturated color of a hue.
pub fn hue_color32(hsv: &Hsv) -> Color32 {
    to_color32(&hsv.pure_hue().to_rgba(1.0))
}

/// Convert an egui rect to the kurbo rect the controller works with.
pub fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(rect.left()),
        f64::from(rect.top()),
        f64::from(rect.right()),
        f64::from(rect.bottom()),
    )
}

/// Convert an egui position to a kurbo point.
pub fn to_kurbo_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

/// Append a quad with per-corner colors (top-left, top-right,
/// bottom-right, bottom-left).
pub fn add_gradient_quad(mesh: &mut Mesh, rect: Rect, colors: [Color32; 4]) {
    let base = mesh.vertices.len() as u32;
    mesh.colored_vertex(rect.left_top(), colors[0]);
    mesh.colored_vertex(rect.right_top(), colors[1]);
    mesh.colored_vertex(rect.right_bottom(), colors[2]);
    mesh.colored_vertex(rect.left_bottom(), colors[3]);
    mesh.add_triangle(base, base + 1, base + 2);
    mesh.add_triangle(base, base + 2, base + 3);
}

/// Paint a gray checkerboard, the backdrop for translucent colors.
pub fn paint_checkerboard(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE);
    let size = sizing::CHECKER;
    let cols = (rect.width() / size).ceil() as usize;
    let rows = (rect.height() / size).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 0 {
                continue;
            }
            let min = rect.min + vec2(col as f32 * size, row as f32 * size);
            let cell = Rect::from_min_max(min, (min + vec2(size, size)).min(rect.max));
            painter.rect_filled(cell, CornerRadius::ZERO, Color32::from_gray(204));
        }
    }
}

/// Paint the hue spectrum left to right, in 60 degree segments.
pub fn paint_hue_gradient(painter: &Painter, rect: Rect) {
    let mut mesh = Mesh::default();
    let segments = 6;
    let step = rect.width() / segments as f32;
    for i in 0..segments {
        let left = hue_color32(&Hsv::new(i as f64 * 60.0, 1.0, 1.0));
        let right = hue_color32(&Hsv::new((i + 1) as f64 * 60.0, 1.0, 1.0));
        let segment = Rect::from_min_max(
            Pos2::new(rect.left() + step * i as f32, rect.top()),
            Pos2::new(rect.left() + step * (i + 1) as f32, rect.bottom()),
        );
        add_gradient_quad(&mut mesh, segment, [left, right, right, left]);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Paint the saturation/value plane for a hue: white to hue horizontally,
/// then transparent to black vertically.
pub fn paint_sat_val_gradient(painter: &Painter, rect: Rect, hue: Color32) {
    let mut mesh = Mesh::default();
    add_gradient_quad(&mut mesh, rect, [Color32::WHITE, hue, hue, Color32::WHITE]);
    add_gradient_quad(
        &mut mesh,
        rect,
        [Color32::TRANSPARENT, Color32::TRANSPARENT, Color32::BLACK, Color32::BLACK],
    );
    painter.add(egui::Shape::mesh(mesh));
}

/// Paint the alpha ramp of a color over a checkerboard.
pub fn paint_alpha_gradient(painter: &Painter, rect: Rect, color: &Rgba) {
    paint_checkerboard(painter, rect);
    let opaque = to_color32(&color.with_alpha(1.0));
    let mut mesh = Mesh::default();
    add_gradient_quad(
        &mut mesh,
        rect,
        [Color32::TRANSPARENT, opaque, opaque, Color32::TRANSPARENT],
    );
    painter.add(egui::Shape::mesh(mesh));
}

/// Draw a thumb marker: the color inside a white ring.
pub fn paint_thumb(painter: &Painter, center: Pos2, fill: Color32) {
    painter.circle_filled(center, sizing::THUMB_RADIUS, fill);
    painter.circle_stroke(center, sizing::THUMB_RADIUS, Stroke::new(2.0, Color32::WHITE));
    painter.circle_stroke(
        center,
        sizing::THUMB_RADIUS + 1.0,
        Stroke::new(1.0, Color32::from_black_alpha(60)),
    );
}

/// A clickable preset color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: vec2(sizing::SWATCH, sizing::SWATCH),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            ui.painter().circle_filled(center, radius, self.color);
            if self.selected {
                // Inner offset ring
                ui.painter().circle_stroke(
                    center,
                    radius - 3.0,
                    Stroke::new(2.0, Color32::WHITE),
                );
            } else if response.hovered() {
                ui.painter()
                    .circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// The picker's trigger button: current color (over a checkerboard when
/// translucent) inside a hue ring.
pub struct TriggerSwatch<'a> {
    color: Rgba,
    tooltip: &'a str,
    size: Vec2,
}

impl<'a> TriggerSwatch<'a> {
    /// Create a trigger for the given color.
    pub fn new(color: Rgba, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            size: vec2(sizing::TRIGGER, sizing::TRIGGER),
        }
    }

    /// Set the size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the trigger and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let outer_radius = rect.width().min(rect.height()) / 2.0;
            let inner_radius = outer_radius - 3.0;

            let num_segments: i32 = 32;
            for i in 0..num_segments {
                let angle1 = (i as f32 / num_segments as f32) * std::f32::consts::TAU;
                let angle2 = ((i + 1) as f32 / num_segments as f32) * std::f32::consts::TAU;
                let hue = hue_color32(&Hsv::new(f64::from(i) * 360.0 / f64::from(num_segments), 1.0, 1.0));
                let at = |radius: f32, angle: f32| {
                    Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
                };
                painter.add(egui::Shape::convex_polygon(
                    vec![
                        at(outer_radius, angle1),
                        at(outer_radius, angle2),
                        at(inner_radius, angle2),
                        at(inner_radius, angle1),
                    ],
                    hue,
                    Stroke::NONE,
                ));
            }

            painter.circle_filled(center, inner_radius, Color32::from_gray(30));
            let fill_radius = inner_radius - 2.0;
            if !self.color.is_opaque() {
                let square = Rect::from_center_size(center, Vec2::splat(fill_radius * 2.0));
                paint_checkerboard(&painter.with_clip_rect(square), square);
            }
            painter.circle_filled(center, fill_radius, to_color32(&self.color));
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Check if two colors match on their RGB channels.
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(&Rgba::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32(&Rgba::RED.with_alpha(0.0)), Color32::TRANSPARENT);
    }

    #[test]
    fn test_hue_color32() {
        assert_eq!(hue_color32(&Hsv::new(240.0, 0.1, 0.2)), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_rect_conversion() {
        let rect = Rect::from_min_max(Pos2::new(1.0, 2.0), Pos2::new(11.0, 22.0));
        let converted = to_kurbo_rect(rect);
        assert_eq!(converted.width(), 10.0);
        assert_eq!(converted.height(), 20.0);
        assert_eq!(to_kurbo_point(Pos2::new(3.0, 4.0)), kurbo::Point::new(3.0, 4.0));
    }

    #[test]
    fn test_gradient_quad_vertices() {
        let mut mesh = Mesh::default();
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(10.0, 10.0));
        add_gradient_quad(&mut mesh, rect, [Color32::WHITE; 4]);
        add_gradient_quad(&mut mesh, rect, [Color32::BLACK; 4]);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.indices[6], 4);
    }

    #[test]
    fn test_colors_match_ignores_alpha() {
        assert!(colors_match(
            Color32::from_rgb(1, 2, 3),
            Color32::from_rgba_unmultiplied(1, 2, 3, 255)
        ));
    }
}
