//! DOM-backed implementations of the controller's collaborators.

use kurbo::Rect;
use tintkit_core::{DragAnchor, FormValue};
use web_sys::{HtmlElement, HtmlInputElement};

/// Validation message set on the input while its value is not a color.
const INVALID_COLOR_MESSAGE: &str = "Please enter a valid color.";

/// A DOM element anchoring a drag. Its box is measured on every pointer
/// event, so layout changes during a drag are picked up.
#[derive(Debug, Clone)]
pub struct ElementAnchor(pub HtmlElement);

impl DragAnchor for ElementAnchor {
    fn bounding_box(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }
}

/// Form value stored in an `<input>` element, so it takes part in native
/// form submission and constraint validation.
#[derive(Debug, Clone)]
pub struct InputFormValue(pub HtmlInputElement);

impl FormValue for InputFormValue {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&mut self, value: String) {
        self.0.set_value(&value);
    }

    fn set_validity(&mut self, valid: bool) {
        let message = if valid { "" } else { INVALID_COLOR_MESSAGE };
        self.0.set_custom_validity(message);
    }
}
