//! Form value storage composed into the controller.

/// Access to the element's external string value.
///
/// Hosts implement this over whatever backs the form field (an owned
/// string, a DOM input element, ...).
pub trait FormValue {
    /// The current external value.
    fn value(&self) -> String;

    /// Replace the external value with a user-committed edit.
    fn set_value(&mut self, value: String);

    /// Replace the external value programmatically, without counting as a
    /// user edit.
    fn reset_value(&mut self, value: String) {
        self.set_value(value);
    }

    /// Record whether the current value is a usable color.
    fn set_validity(&mut self, _valid: bool) {}
}

/// Owned form value with validity tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValueHolder {
    value: String,
    /// Whether the value was last written by a user edit.
    dirty: bool,
    /// Whether the current value parsed as a color.
    valid: bool,
}

impl FormValueHolder {
    /// Create a holder with an initial value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            dirty: false,
            valid: true,
        }
    }

    /// Whether a user edit has been committed since creation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the stored value is a usable color.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Reset the dirty flag (e.g. after a form submit).
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl FormValue for FormValueHolder {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
    }

    fn reset_value(&mut self, value: String) {
        self.value = value;
    }

    fn set_validity(&mut self, valid: bool) {
        self.valid = valid;
    }
}
