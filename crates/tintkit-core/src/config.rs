//! Picker configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::css::{ColorParser, CssColorParser};

/// Hue reached at the right edge of the hue bar.
pub const DEFAULT_HUE_SPAN: f64 = 359.0;

/// Color used when the initial value is blank or unparseable.
pub const DEFAULT_COLOR: &str = "#ff0000";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid default color: {0:?}")]
    InvalidDefaultColor(String),
    #[error("Hue span must be in (0, 360), got {0}")]
    InvalidHueSpan(f64),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What happens when the pointer leaves the anchor box mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPolicy {
    /// Clamp the pointer to the box and keep dragging until pointer-up.
    #[default]
    ClampAndContinue,
    /// End the drag on the first move outside the box, without applying it.
    ReleaseOnLeave,
}

/// Tunables for a color picker instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub default_color: String,
    pub hue_span: f64,
    pub drag_policy: DragPolicy,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            hue_span: DEFAULT_HUE_SPAN,
            drag_policy: DragPolicy::default(),
        }
    }
}

impl PickerConfig {
    /// Load and validate a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !CssColorParser.is_valid(&self.default_color) {
            return Err(ConfigError::InvalidDefaultColor(self.default_color.clone()));
        }
        if !(self.hue_span > 0.0 && self.hue_span < 360.0) {
            return Err(ConfigError::InvalidHueSpan(self.hue_span));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PickerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PickerConfig::from_json(r#"{ "drag_policy": "release_on_leave" }"#).unwrap();
        assert_eq!(config.drag_policy, DragPolicy::ReleaseOnLeave);
        assert_eq!(config.default_color, DEFAULT_COLOR);
        assert_eq!(config.hue_span, DEFAULT_HUE_SPAN);
    }

    #[test]
    fn test_invalid_default_color() {
        let err = PickerConfig::from_json(r#"{ "default_color": "nope" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultColor(_)));
    }

    #[test]
    fn test_invalid_hue_span() {
        let err = PickerConfig::from_json(r#"{ "hue_span": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHueSpan(_)));
        // A full turn would wrap the right edge of the hue bar back to 0.
        let err = PickerConfig::from_json(r#"{ "hue_span": 360.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHueSpan(_)));
        assert!(PickerConfig::from_json(r#"{ "hue_span": 359.9 }"#).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(PickerConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PickerConfig {
            default_color: "#123456".to_string(),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
