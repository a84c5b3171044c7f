//! Derived UI state of the picker.

use serde::{Deserialize, Serialize};

use crate::color::{Hsv, Rgba};
use crate::css;

/// Everything a renderer needs to draw the picker.
///
/// Always rebuilt from the current colors with [`PickerSnapshot::compute`];
/// never edited field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerSnapshot {
    pub rgba: Rgba,
    pub hsv: Hsv,
    /// Hex of the fully saturated hue, the sat-val plane's background.
    pub hue_color: String,
    /// Hue thumb position along the hue bar.
    pub hue_percent: f64,
    /// Sat-val thumb horizontal position.
    pub sat_val_x_percent: f64,
    /// Sat-val thumb vertical position (value grows upward).
    pub sat_val_y_percent: f64,
    /// Alpha thumb position along the alpha bar.
    pub alpha_percent: f64,
}

impl PickerSnapshot {
    pub fn compute(rgba: Rgba, hsv: Hsv) -> Self {
        Self {
            rgba,
            hsv,
            hue_color: css::to_hex(&hsv.pure_hue().to_rgba(1.0)),
            hue_percent: hsv.h / 360.0 * 100.0,
            sat_val_x_percent: hsv.s * 100.0,
            sat_val_y_percent: 100.0 - hsv.v * 100.0,
            alpha_percent: rgba.a * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_for_red() {
        let snapshot = PickerSnapshot::compute(Rgba::RED, Rgba::RED.to_hsv());
        assert_eq!(snapshot.hue_color, "#ff0000");
        assert_eq!(snapshot.hue_percent, 0.0);
        assert_eq!(snapshot.sat_val_x_percent, 100.0);
        assert_eq!(snapshot.sat_val_y_percent, 0.0);
        assert_eq!(snapshot.alpha_percent, 100.0);
    }

    #[test]
    fn test_hue_color_ignores_saturation_and_value() {
        let hsv = Hsv::new(120.0, 0.2, 0.3);
        let snapshot = PickerSnapshot::compute(hsv.to_rgba(0.5), hsv);
        assert_eq!(snapshot.hue_color, "#00ff00");
        assert!((snapshot.sat_val_y_percent - 70.0).abs() < 1e-9);
        assert!((snapshot.alpha_percent - 50.0).abs() < 1e-9);
    }
}
