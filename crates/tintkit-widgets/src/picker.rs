//! The color picker widget.
//!
//! An egui host for [`ColorSyncController`]: a trigger swatch that opens a
//! popover with the saturation/value plane, hue and alpha bars, a free-text
//! field, per-channel numeric fields and a preset row. The widget owns no
//! color state; every input is forwarded to the controller and everything
//! drawn comes from its snapshot.

use egui::{Color32, Id, Pos2, Rect, Sense, TextEdit, Ui, vec2};
use tintkit_core::{Channel, ColorParser, ColorSyncController, DragZone, FormValue, Rgba};

use crate::colors::{
    ColorSwatch, PRESETS, TriggerSwatch, colors_match, hue_color32, paint_alpha_gradient,
    paint_hue_gradient, paint_sat_val_gradient, paint_thumb, to_color32, to_kurbo_point,
    to_kurbo_rect,
};
use crate::panel::{popover_frame, section_label, separator};
use crate::{sizing, theme};

/// Where the popover opens relative to the trigger.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum PopoverPosition {
    /// Below the trigger (for top toolbars)
    #[default]
    Below,
    /// Above the trigger (for bottom toolbars)
    Above,
}

/// Text buffers for the editable fields, kept in egui memory between frames.
#[derive(Clone, Default)]
struct FieldBuffers {
    text: String,
    numeric: [String; 7],
}

/// A color picker bound to a controller.
pub struct ColorPicker<'a, F: FormValue, P: ColorParser> {
    controller: &'a mut ColorSyncController<F, P>,
    id: Id,
    tooltip: &'a str,
    position: PopoverPosition,
    show_presets: bool,
}

impl<'a, F: FormValue, P: ColorParser> ColorPicker<'a, F, P> {
    /// Create a picker. `id_salt` must be unique among pickers in the UI.
    pub fn new(controller: &'a mut ColorSyncController<F, P>, id_salt: impl std::hash::Hash) -> Self {
        Self {
            controller,
            id: Id::new(("tintkit_color_picker", id_salt)),
            tooltip: "Color",
            position: PopoverPosition::Below,
            show_presets: true,
        }
    }

    /// Set the trigger tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Open the popover above the trigger.
    pub fn above(mut self) -> Self {
        self.position = PopoverPosition::Above;
        self
    }

    /// Open the popover below the trigger.
    pub fn below(mut self) -> Self {
        self.position = PopoverPosition::Below;
        self
    }

    /// Show or hide the preset row.
    pub fn presets(mut self, show: bool) -> Self {
        self.show_presets = show;
        self
    }

    /// Show the trigger (and the popover when open).
    /// Returns true if a change was committed this frame.
    pub fn show(self, ui: &mut Ui) -> bool {
        let Self {
            controller,
            id,
            tooltip,
            position,
            show_presets,
        } = self;

        let (clicked, trigger_rect) = TriggerSwatch::new(controller.rgba(), tooltip).show(ui);
        if clicked {
            if controller.is_open() {
                controller.blur();
            } else {
                log::debug!("Opening color picker {:?}", id);
                controller.focus();
            }
        }

        if !controller.is_open() {
            return false;
        }

        let pos = match position {
            PopoverPosition::Below => Pos2::new(trigger_rect.left(), trigger_rect.bottom() + 8.0),
            PopoverPosition::Above => Pos2::new(
                trigger_rect.left(),
                trigger_rect.top() - sizing::POPOVER_HEIGHT - 8.0,
            ),
        };

        let mut changed = false;
        let area = egui::Area::new(id.with("popover"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ui.ctx(), |ui| {
                popover_frame().show(ui, |ui| {
                    ui.set_width(sizing::PICKER_WIDTH);
                    ui.spacing_mut().item_spacing = vec2(0.0, 6.0);
                    changed |= editor_contents(ui, controller, id, show_presets);
                });
            });

        // Pressing outside the trigger and popover closes the picker.
        let popover_rect = area.response.rect;
        let pressed_outside = ui.input(|i| {
            i.pointer.any_pressed()
                && i
                    .pointer
                    .interact_pos()
                    .is_some_and(|p| !popover_rect.contains(p) && !trigger_rect.contains(p))
        });
        let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
        if (pressed_outside || escape) && !controller.is_dragging() {
            controller.blur();
        }

        changed
    }
}

fn editor_contents<F: FormValue, P: ColorParser>(
    ui: &mut Ui,
    controller: &mut ColorSyncController<F, P>,
    id: Id,
    show_presets: bool,
) -> bool {
    let mut changed = false;
    let width = sizing::PICKER_WIDTH;

    changed |= drag_area(ui, controller, DragZone::SatVal, vec2(width, sizing::SAT_VAL_HEIGHT));
    changed |= drag_area(ui, controller, DragZone::Hue, vec2(width, sizing::BAR_HEIGHT));
    changed |= drag_area(ui, controller, DragZone::Alpha, vec2(width, sizing::BAR_HEIGHT));

    separator(ui);
    changed |= text_fields(ui, controller, id);

    if show_presets {
        separator(ui);
        section_label(ui, "Presets");
        changed |= preset_row(ui, controller);
    }

    changed
}

/// One interactive zone: forwards pointer press/move/release to the
/// controller, then paints from the updated snapshot.
fn drag_area<F: FormValue, P: ColorParser>(
    ui: &mut Ui,
    controller: &mut ColorSyncController<F, P>,
    zone: DragZone,
    size: egui::Vec2,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, Sense::drag());
    let anchor = to_kurbo_rect(rect);
    let pointer = response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.latest_pos()));
    let mut changed = false;

    if let Some(pos) = pointer {
        let point = to_kurbo_point(pos);
        if response.drag_started() {
            controller.drag_start(zone, anchor, point);
            changed = true;
        } else if response.dragged() && controller.drag_zone() == Some(zone) {
            changed |= controller.drag_move(point);
        }
        if response.drag_stopped() && controller.drag_zone() == Some(zone) {
            changed |= controller.drag_end(point);
        }
    }

    if ui.is_rect_visible(rect) {
        paint_zone(ui, controller, zone, rect);
    }

    response.on_hover_cursor(egui::CursorIcon::Crosshair);
    changed
}

fn paint_zone<F: FormValue, P: ColorParser>(
    ui: &Ui,
    controller: &ColorSyncController<F, P>,
    zone: DragZone,
    rect: Rect,
) {
    let painter = ui.painter_at(rect.expand(sizing::THUMB_RADIUS + 2.0));
    let snapshot = controller.snapshot();
    let along = |percent: f64| rect.left() + rect.width() * (percent / 100.0) as f32;

    match zone {
        DragZone::SatVal => {
            paint_sat_val_gradient(&painter, rect, hue_color32(&snapshot.hsv));
            let center = Pos2::new(
                along(snapshot.sat_val_x_percent),
                rect.top() + rect.height() * (snapshot.sat_val_y_percent / 100.0) as f32,
            );
            paint_thumb(&painter, center, to_color32(&snapshot.rgba.with_alpha(1.0)));
        }
        DragZone::Hue => {
            paint_hue_gradient(&painter, rect);
            let center = Pos2::new(along(snapshot.hue_percent), rect.center().y);
            paint_thumb(&painter, center, hue_color32(&snapshot.hsv));
        }
        DragZone::Alpha => {
            paint_alpha_gradient(&painter, rect, &snapshot.rgba);
            let center = Pos2::new(along(snapshot.alpha_percent), rect.center().y);
            paint_thumb(&painter, center, to_color32(&snapshot.rgba));
        }
    }
}

/// The free-text field and the seven numeric fields.
///
/// Unfocused fields mirror the controller every frame; a focused field
/// keeps what the user typed, and each keystroke is offered to the
/// controller, which silently ignores anything it cannot use.
fn text_fields<F: FormValue, P: ColorParser>(
    ui: &mut Ui,
    controller: &mut ColorSyncController<F, P>,
    id: Id,
) -> bool {
    let buffers_id = id.with("buffers");
    let mut buffers: FieldBuffers = ui.data_mut(|d| d.get_temp(buffers_id)).unwrap_or_default();
    let mut changed = false;

    let text_id = id.with("text");
    if !ui.memory(|m| m.has_focus(text_id)) {
        buffers.text = controller.value();
    }
    let response = ui.add(
        TextEdit::singleline(&mut buffers.text)
            .id(text_id)
            .desired_width(sizing::PICKER_WIDTH)
            .text_color(theme::TEXT),
    );
    if response.changed() {
        changed |= controller.text_edited(&buffers.text);
    }

    // RGBA on the first row, HSV on the second.
    for row in [0..4, 4..7] {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = vec2(4.0, 0.0);
            for index in row {
                let channel = Channel::ALL[index];
                let field_id = id.with(("numeric", index));
                if !ui.memory(|m| m.has_focus(field_id)) {
                    buffers.numeric[index] = controller.numeric_field_value(channel);
                }
                section_label(ui, channel.label());
                let response = ui.add(
                    TextEdit::singleline(&mut buffers.numeric[index])
                        .id(field_id)
                        .desired_width(sizing::FIELD_WIDTH),
                );
                if response.changed() {
                    changed |= controller.numeric_field_edited(channel, &buffers.numeric[index]);
                }
            }
        });
    }

    ui.data_mut(|d| d.insert_temp(buffers_id, buffers));
    changed
}

fn preset_row<F: FormValue, P: ColorParser>(
    ui: &mut Ui,
    controller: &mut ColorSyncController<F, P>,
) -> bool {
    let current: Color32 = to_color32(&controller.rgba());
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(2.0, 2.0);
        for (name, [r, g, b]) in PRESETS {
            let color = Color32::from_rgb(*r, *g, *b);
            if ColorSwatch::new(color, name)
                .selected(colors_match(current, color))
                .show(ui)
            {
                picked = Some(Rgba::from_rgb8(*r, *g, *b));
            }
        }
    });

    match picked {
        Some(color) => controller.text_edited(&tintkit_core::to_hex(&color)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(controller: &mut ColorSyncController) -> bool {
        let ctx = egui::Context::default();
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed |= ColorPicker::new(&mut *controller, "test").show(ui);
            });
        });
        changed
    }

    #[test]
    fn test_closed_picker_reports_no_change() {
        let mut controller = ColorSyncController::new("#3b82f6");
        assert!(!run_frame(&mut controller));
        assert!(!controller.is_open());
        assert_eq!(controller.value(), "#3b82f6");
    }

    #[test]
    fn test_open_picker_renders_without_committing() {
        let mut controller = ColorSyncController::new("rgba(59, 130, 246, 0.5)");
        controller.focus();
        assert!(!run_frame(&mut controller));
        assert!(controller.is_open());
        assert_eq!(controller.value(), "rgba(59, 130, 246, 0.5)");
    }
}
