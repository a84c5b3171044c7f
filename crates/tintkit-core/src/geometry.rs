//! Drag zones and pointer geometry.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// One of the three interactive regions of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragZone {
    /// Horizontal hue bar.
    Hue,
    /// Two-dimensional saturation/value plane.
    SatVal,
    /// Horizontal alpha bar.
    Alpha,
}

impl DragZone {
    /// Parse a zone name as used by DOM `data-zone` attributes.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hue" => Some(DragZone::Hue),
            "sat-val" | "saturation-value" => Some(DragZone::SatVal),
            "alpha" => Some(DragZone::Alpha),
            _ => None,
        }
    }
}

/// Something that anchors a drag and can report its bounding box.
///
/// The box is in the same coordinate space as the pointer positions the
/// host delivers.
pub trait DragAnchor {
    fn bounding_box(&self) -> Rect;
}

impl DragAnchor for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }
}

/// Pointer offset inside `bounds`, clamped to the box.
pub fn clamped_offset(bounds: Rect, pointer: Point) -> Vec2 {
    let x = (pointer.x - bounds.x0).clamp(0.0, bounds.width().max(0.0));
    let y = (pointer.y - bounds.y0).clamp(0.0, bounds.height().max(0.0));
    Vec2::new(x, y)
}

/// `part / whole`, or 0 for a degenerate box.
pub fn fraction(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole } else { 0.0 }
}

/// Round a fraction to whole-percent granularity.
pub fn round_percent(fraction: f64) -> f64 {
    (fraction * 100.0).round() / 100.0
}
