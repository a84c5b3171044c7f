//! Browser bindings for the tintkit color picker.
//!
//! Compiled to WebAssembly, this crate exposes [`ColorPickerElement`] to
//! JavaScript. A custom element forwards its DOM events (focus, blur,
//! input, pointer down/move/up) to it; the element reads its form value
//! from an `<input>`, measures drag anchors with `getBoundingClientRect`
//! and dispatches a `change` event on the host after every commit.

#![cfg(target_arch = "wasm32")]

mod dom;
mod element;

pub use dom::{ElementAnchor, InputFormValue};
pub use element::ColorPickerElement;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Failed to initialize logger: {}", err).into());
    }
    log::info!("tintkit color picker loaded");
}
