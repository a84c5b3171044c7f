//! Error types for color input handling.

use thiserror::Error;

use crate::controller::Channel;

/// Reasons a color edit is rejected.
///
/// The controller never surfaces these to the user; they exist so the
/// parsing and validation helpers can be tested and logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("Invalid color string: {0:?}")]
    InvalidColorString(String),
    #[error("Value {value} out of range for channel {channel:?}")]
    OutOfRangeValue { channel: Channel, value: f64 },
    #[error("Not a number: {0:?}")]
    NotNumeric(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
