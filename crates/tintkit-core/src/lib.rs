//! tintkit Core Library
//!
//! Platform-agnostic color model and synchronization logic for the tintkit
//! color picker. Hosts (egui widgets, the browser bridge) translate their
//! input events into [`ColorSyncController`] operations and render from its
//! [`PickerSnapshot`].

pub mod color;
pub mod config;
pub mod controller;
pub mod css;
pub mod error;
pub mod events;
pub mod form;
pub mod geometry;
pub mod snapshot;

pub use color::{Hsv, Rgba};
pub use config::{ConfigError, ConfigResult, DragPolicy, PickerConfig};
pub use controller::{Channel, ColorSyncController};
pub use css::{ColorParser, CssColorParser, to_css, to_hex, to_rgba_string};
pub use error::{ColorError, ColorResult};
pub use events::{ChangeEmitter, ListenerId, PickerEvent};
pub use form::{FormValue, FormValueHolder};
pub use geometry::{DragAnchor, DragZone};
pub use snapshot::PickerSnapshot;
