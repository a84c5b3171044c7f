//! Color synchronization controller.
//!
//! Owns the picker's color state and keeps the form value, RGBA, HSV and
//! derived [`PickerSnapshot`] consistent across the three input channels:
//! free text, numeric fields and pointer drags over the picker's zones.
//!
//! Every mutator follows the same visible sequence: update the edited
//! color, rederive the other representation, recompute the snapshot,
//! commit the form value, then emit [`PickerEvent::Change`]. Rejected
//! input leaves all state untouched and emits nothing.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::color::{Hsv, Rgba};
use crate::config::{DragPolicy, PickerConfig};
use crate::css::{self, ColorParser, CssColorParser};
use crate::error::{ColorError, ColorResult};
use crate::events::{ChangeEmitter, ListenerId, PickerEvent};
use crate::form::{FormValue, FormValueHolder};
use crate::geometry::{self, DragAnchor, DragZone};
use crate::snapshot::PickerSnapshot;

/// A numeric input field of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    R,
    G,
    B,
    /// Alpha in percent.
    A,
    /// Hue in degrees.
    H,
    /// Saturation in percent.
    S,
    /// Value in percent.
    V,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 7] = [
        Channel::R,
        Channel::G,
        Channel::B,
        Channel::A,
        Channel::H,
        Channel::S,
        Channel::V,
    ];

    /// Parse a single-letter channel name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "r" => Some(Channel::R),
            "g" => Some(Channel::G),
            "b" => Some(Channel::B),
            "a" => Some(Channel::A),
            "h" => Some(Channel::H),
            "s" => Some(Channel::S),
            "v" => Some(Channel::V),
            _ => None,
        }
    }

    /// Short label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
            Channel::A => "A",
            Channel::H => "H",
            Channel::S => "S",
            Channel::V => "V",
        }
    }

    /// Inclusive range of accepted field values.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Channel::R | Channel::G | Channel::B => (0.0, 255.0),
            Channel::A | Channel::S | Channel::V => (0.0, 100.0),
            Channel::H => (0.0, 359.0),
        }
    }

    /// Validate raw field text.
    ///
    /// Returns `Ok(None)` for blank input, which callers treat as a no-op.
    pub fn parse_field(&self, raw: &str) -> ColorResult<Option<f64>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ColorError::NotNumeric(raw.to_string()))?;
        if !value.is_finite() {
            return Err(ColorError::NotNumeric(raw.to_string()));
        }
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(ColorError::OutOfRangeValue {
                channel: *self,
                value,
            });
        }
        Ok(Some(value))
    }
}

struct ActiveDrag {
    zone: DragZone,
    anchor: Box<dyn DragAnchor>,
}

/// Keeps the text value, RGBA, HSV and UI snapshot of a color picker in sync.
pub struct ColorSyncController<F: FormValue = FormValueHolder, P: ColorParser = CssColorParser> {
    rgba: Rgba,
    hsv: Hsv,
    snapshot: PickerSnapshot,
    form: F,
    parser: P,
    config: PickerConfig,
    emitter: ChangeEmitter,
    is_open: bool,
    is_dragging: bool,
    drag: Option<ActiveDrag>,
}

impl ColorSyncController {
    /// Create a controller over an owned form value with the CSS parser.
    pub fn new(value: impl Into<String>) -> Self {
        Self::attach(
            FormValueHolder::new(value),
            CssColorParser,
            PickerConfig::default(),
        )
    }
}

impl<F: FormValue, P: ColorParser> ColorSyncController<F, P> {
    /// Attach to a form value and initialize the color state from it.
    ///
    /// Blank or unparseable values fall back to the configured default
    /// color. No change is emitted.
    pub fn attach(form: F, parser: P, config: PickerConfig) -> Self {
        let initial = form.value();
        let parsed = match initial.trim() {
            "" => None,
            _ => parser.parse(&initial).ok(),
        };
        let rgba = parsed
            .or_else(|| parser.parse(&config.default_color).ok())
            .unwrap_or(Rgba::RED);

        let hsv = rgba.to_hsv();
        Self {
            rgba,
            hsv,
            snapshot: PickerSnapshot::compute(rgba, hsv),
            form,
            parser,
            config,
            emitter: ChangeEmitter::new(),
            is_open: false,
            is_dragging: false,
            drag: None,
        }
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The derived UI state for the current color.
    pub fn snapshot(&self) -> &PickerSnapshot {
        &self.snapshot
    }

    /// The external text value.
    pub fn value(&self) -> String {
        self.form.value()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Whether the editing surface is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// The zone of the drag in progress, if any.
    pub fn drag_zone(&self) -> Option<DragZone> {
        self.drag.as_ref().map(|drag| drag.zone)
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(PickerEvent) + 'static) -> ListenerId {
        self.emitter.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Open the editing surface.
    pub fn focus(&mut self) {
        self.is_open = true;
    }

    /// Close the editing surface.
    pub fn blur(&mut self) {
        self.is_open = false;
    }

    /// Integer text to display in a numeric field for the current color.
    pub fn numeric_field_value(&self, channel: Channel) -> String {
        let [r, g, b] = self.rgba.to_rgb8();
        let value = match channel {
            Channel::R => f64::from(r),
            Channel::G => f64::from(g),
            Channel::B => f64::from(b),
            Channel::A => (self.rgba.a * 100.0).round(),
            Channel::H => self.hsv.h.round().min(359.0),
            Channel::S => (self.hsv.s * 100.0).round(),
            Channel::V => (self.hsv.v * 100.0).round(),
        };
        format!("{}", value as i64)
    }

    /// Handle an edit of the free-text field.
    ///
    /// Valid colors are committed verbatim; blank or invalid text is
    /// ignored. Returns whether the edit was committed.
    pub fn text_edited(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let rgba = match self.parser.parse(text) {
            Ok(rgba) => rgba,
            Err(err) => {
                log::debug!("Ignoring text edit: {}", err);
                return false;
            }
        };

        self.sync_from_rgba(rgba);
        self.form.set_value(text.to_string());
        self.form.set_validity(true);
        self.emitter.emit(PickerEvent::Change);
        true
    }

    /// Handle an edit of one numeric field.
    ///
    /// Blank, non-numeric and out-of-range input is ignored. Returns
    /// whether the edit was committed.
    pub fn numeric_field_edited(&mut self, channel: Channel, raw: &str) -> bool {
        let value = match channel.parse_field(raw) {
            Ok(Some(value)) => value,
            Ok(None) => return false,
            Err(err) => {
                log::debug!("Ignoring numeric edit: {}", err);
                return false;
            }
        };

        let rgba = self.rgba;
        let hsv = self.hsv;
        match channel {
            Channel::R => self.sync_from_rgba(Rgba { r: value / 255.0, ..rgba }),
            Channel::G => self.sync_from_rgba(Rgba { g: value / 255.0, ..rgba }),
            Channel::B => self.sync_from_rgba(Rgba { b: value / 255.0, ..rgba }),
            Channel::A => self.sync_from_rgba(rgba.with_alpha(value / 100.0)),
            Channel::H => self.sync_from_hsv(hsv.with_hue(value)),
            Channel::S => self.sync_from_hsv(Hsv::new(hsv.h, value / 100.0, hsv.v)),
            Channel::V => self.sync_from_hsv(Hsv::new(hsv.h, hsv.s, value / 100.0)),
        }
        self.commit();
        true
    }

    /// Programmatically assign the value, as attribute reflection would.
    ///
    /// Parseable text resyncs the color state; unparseable text is stored
    /// but leaves the color untouched. Never emits a change.
    pub fn set_value(&mut self, text: &str) {
        let parsed = if text.trim().is_empty() {
            None
        } else {
            self.parser.parse(text).ok()
        };
        if let Some(rgba) = parsed {
            self.sync_from_rgba(rgba);
        }
        self.form.reset_value(text.to_string());
        self.form.set_validity(parsed.is_some());
    }

    /// Pointer-down on one of the picker's zones.
    pub fn drag_start(&mut self, zone: DragZone, anchor: impl DragAnchor + 'static, pointer: Point) {
        log::trace!("Drag start on {:?} at {:?}", zone, pointer);
        self.drag = Some(ActiveDrag {
            zone,
            anchor: Box::new(anchor),
        });
        self.drag_update(pointer);
        self.is_dragging = true;
    }

    /// Pointer-move. Ignored unless a drag is in progress.
    ///
    /// Returns whether a change was committed.
    pub fn drag_move(&mut self, pointer: Point) -> bool {
        if !self.is_dragging {
            return false;
        }
        if self.config.drag_policy == DragPolicy::ReleaseOnLeave && !self.pointer_inside(pointer) {
            log::trace!("Pointer left drag anchor at {:?}, releasing", pointer);
            self.clear_drag();
            return false;
        }
        self.drag_update(pointer)
    }

    /// Pointer-up. Applies the final position and ends the drag.
    pub fn drag_end(&mut self, pointer: Point) -> bool {
        if self.drag.is_none() {
            return false;
        }
        let committed = self.drag_update(pointer);
        log::trace!("Drag end at {:?}", pointer);
        self.clear_drag();
        committed
    }

    /// Map a pointer position to a color for the active zone and commit it.
    ///
    /// Repeated calls with the same position produce the same state.
    pub fn drag_update(&mut self, pointer: Point) -> bool {
        let Some(drag) = self.drag.as_ref() else {
            return false;
        };
        let zone = drag.zone;
        let bounds = drag.anchor.bounding_box();
        let offset = geometry::clamped_offset(bounds, pointer);
        let fx = geometry::fraction(offset.x, bounds.width());
        let fy = geometry::fraction(offset.y, bounds.height());

        match zone {
            DragZone::Hue => {
                let hue = self.config.hue_span * fx;
                self.sync_from_hsv(self.hsv.with_hue(hue));
            }
            DragZone::SatVal => {
                let value = (100.0 - 100.0 * fy).round() / 100.0;
                let saturation = geometry::round_percent(fx);
                self.sync_from_hsv(self.hsv.with_saturation_value(saturation, value));
            }
            DragZone::Alpha => {
                // Only alpha moves; HSV keeps the hue and saturation of
                // achromatic colors.
                self.rgba = self.rgba.with_alpha(geometry::round_percent(fx));
                self.snapshot = PickerSnapshot::compute(self.rgba, self.hsv);
            }
        }
        self.commit();
        true
    }

    fn pointer_inside(&self, pointer: Point) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|drag| drag.anchor.bounding_box().contains(pointer))
    }

    fn clear_drag(&mut self) {
        self.drag = None;
        self.is_dragging = false;
    }

    /// RGBA is the source of truth: rederive HSV and the snapshot.
    fn sync_from_rgba(&mut self, rgba: Rgba) {
        self.rgba = rgba;
        self.hsv = rgba.to_hsv();
        self.snapshot = PickerSnapshot::compute(self.rgba, self.hsv);
    }

    /// HSV is the source of truth: rederive RGBA (keeping alpha) and the snapshot.
    fn sync_from_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
        self.rgba = hsv.to_rgba(self.rgba.a);
        self.snapshot = PickerSnapshot::compute(self.rgba, self.hsv);
    }

    fn commit(&mut self) {
        self.form.set_value(css::to_css(&self.rgba));
        self.form.set_validity(true);
        self.emitter.emit(PickerEvent::Change);
    }
}

impl<F: FormValue + std::fmt::Debug, P: ColorParser> std::fmt::Debug for ColorSyncController<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSyncController")
            .field("rgba", &self.rgba)
            .field("hsv", &self.hsv)
            .field("form", &self.form)
            .field("is_open", &self.is_open)
            .field("is_dragging", &self.is_dragging)
            .field("drag_zone", &self.drag_zone())
            .finish()
    }
}
