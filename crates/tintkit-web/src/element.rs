//! The JavaScript-facing color picker element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Point;
use tintkit_core::{
    Channel, ColorSyncController, CssColorParser, DragZone, PickerConfig, PickerEvent,
};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, HtmlInputElement};

use crate::dom::{ElementAnchor, InputFormValue};

type Controller = ColorSyncController<InputFormValue, CssColorParser>;

/// Color picker state bound to a host element.
///
/// Every method takes `&self`: the `change` event is dispatched after the
/// controller borrow is released, so JS listeners may call back into the
/// element (e.g. to read `snapshot()`).
#[wasm_bindgen]
pub struct ColorPickerElement {
    host: HtmlElement,
    controller: RefCell<Controller>,
    /// Set by the controller's listener, drained by `flush`.
    pending_change: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl ColorPickerElement {
    /// Attach to `host`, reading the initial value from `input`.
    ///
    /// `config` is an optional object matching `PickerConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: HtmlElement,
        input: HtmlInputElement,
        config: JsValue,
    ) -> Result<ColorPickerElement, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            PickerConfig::default()
        } else {
            let config: PickerConfig = serde_wasm_bindgen::from_value(config)?;
            config.validate().map_err(to_js_error)?;
            config
        };

        let mut controller =
            ColorSyncController::attach(InputFormValue(input), CssColorParser, config);
        let pending_change = Rc::new(Cell::new(false));
        let flag = pending_change.clone();
        controller.subscribe(move |event| {
            if event == PickerEvent::Change {
                flag.set(true);
            }
        });

        Ok(Self {
            host,
            controller: RefCell::new(controller),
            pending_change,
        })
    }

    /// Host gained focus: open the editing surface.
    pub fn focus(&self) {
        self.controller.borrow_mut().focus();
    }

    /// Host lost focus: close the editing surface.
    pub fn blur(&self) {
        self.controller.borrow_mut().blur();
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.controller.borrow().value()
    }

    /// Programmatic value assignment (attribute reflection). Never
    /// dispatches `change`.
    #[wasm_bindgen(setter)]
    pub fn set_value(&self, value: &str) {
        self.controller.borrow_mut().set_value(value);
    }

    /// The current UI snapshot as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let controller = self.controller.borrow();
        Ok(serde_wasm_bindgen::to_value(controller.snapshot())?)
    }

    /// Text to show in a numeric field (`"r"`, `"g"`, ..., `"v"`).
    #[wasm_bindgen(js_name = numericFieldValue)]
    pub fn numeric_field_value(&self, channel: &str) -> Option<String> {
        let channel = Channel::from_name(channel)?;
        Some(self.controller.borrow().numeric_field_value(channel))
    }

    /// `input` event of the free-text field.
    #[wasm_bindgen(js_name = textEdited)]
    pub fn text_edited(&self, text: &str) -> Result<bool, JsValue> {
        let committed = self.controller.borrow_mut().text_edited(text);
        self.flush()?;
        Ok(committed)
    }

    /// `input` event of a numeric field. Unknown channel names are ignored.
    #[wasm_bindgen(js_name = numericFieldEdited)]
    pub fn numeric_field_edited(&self, channel: &str, raw: &str) -> Result<bool, JsValue> {
        let Some(channel) = Channel::from_name(channel) else {
            log::debug!("Ignoring edit of unknown channel {:?}", channel);
            return Ok(false);
        };
        let committed = self.controller.borrow_mut().numeric_field_edited(channel, raw);
        self.flush()?;
        Ok(committed)
    }

    /// `pointerdown` on a zone element (`"hue"`, `"sat-val"` or `"alpha"`).
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&self, zone: &str, anchor: HtmlElement, x: f64, y: f64) -> Result<(), JsValue> {
        let Some(zone) = DragZone::from_name(zone) else {
            log::debug!("Ignoring pointerdown on unknown zone {:?}", zone);
            return Ok(());
        };
        self.controller
            .borrow_mut()
            .drag_start(zone, ElementAnchor(anchor), Point::new(x, y));
        self.flush()
    }

    /// `pointermove` anywhere while a drag may be active.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.controller.borrow_mut().drag_move(Point::new(x, y));
        self.flush()
    }

    /// `pointerup` anywhere; ends an active drag.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.controller.borrow_mut().drag_end(Point::new(x, y));
        self.flush()
    }
}

impl ColorPickerElement {
    /// Dispatch `change` on the host if the last operation committed.
    fn flush(&self) -> Result<(), JsValue> {
        if self.pending_change.replace(false) {
            let event = Event::new(PickerEvent::Change.name())?;
            self.host.dispatch_event(&event)?;
        }
        Ok(())
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
