//! egui components for the tintkit color picker.
//!
//! - **Picker**: [`ColorPicker`], a trigger swatch plus popover editor
//!   driven by a [`tintkit_core::ColorSyncController`]
//! - **Colors**: swatches, presets, gradient painting and conversions
//! - **Panel**: popover frame, separators, section labels

pub mod colors;
pub mod panel;
pub mod picker;

pub use colors::{
    ColorSwatch, PRESETS, TriggerSwatch, colors_match, hue_color32, to_color32, to_kurbo_point,
    to_kurbo_rect,
};
pub use panel::{popover_frame, section_label, separator};
pub use picker::{ColorPicker, PopoverPosition};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Preset swatch diameter
    pub const SWATCH: f32 = 16.0;
    /// Trigger button size
    pub const TRIGGER: f32 = 24.0;
    /// Width of the popover contents
    pub const PICKER_WIDTH: f32 = 220.0;
    /// Approximate popover height, used to open it above the trigger
    pub const POPOVER_HEIGHT: f32 = 330.0;
    /// Height of the saturation/value plane
    pub const SAT_VAL_HEIGHT: f32 = 150.0;
    /// Height of the hue and alpha bars
    pub const BAR_HEIGHT: f32 = 12.0;
    /// Width of a numeric field
    pub const FIELD_WIDTH: f32 = 34.0;
    /// Thumb marker radius
    pub const THUMB_RADIUS: f32 = 6.0;
    /// Checkerboard cell size
    pub const CHECKER: f32 = 4.0;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
