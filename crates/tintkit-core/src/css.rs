//! CSS color parsing and serialization.

use peniko::color::{DynamicColor, Srgb, parse_color};

use crate::color::Rgba;
use crate::error::{ColorError, ColorResult};

/// Parses external color strings into [`Rgba`].
///
/// Injected into the controller so hosts can substitute their own notion
/// of a valid color.
pub trait ColorParser {
    /// Parse a color string.
    fn parse(&self, input: &str) -> ColorResult<Rgba>;

    /// Check whether a string is an acceptable color.
    fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }
}

/// Parser accepting CSS Color Level 4 syntax (hex, named colors, `rgb()`,
/// `hsl()`, `oklch()` and friends), converted to sRGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorParser;

impl ColorParser for CssColorParser {
    fn parse(&self, input: &str) -> ColorResult<Rgba> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::InvalidColorString(input.to_string()));
        }
        let color: DynamicColor = parse_color(trimmed)
            .map_err(|_| ColorError::InvalidColorString(input.to_string()))?;
        Ok(Rgba::from(color.to_alpha_color::<Srgb>()))
    }
}

/// Serialize the RGB part of a color as `#rrggbb`.
pub fn to_hex(color: &Rgba) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Serialize a color as `rgba(r, g, b, a)` with 8-bit channels.
pub fn to_rgba_string(color: &Rgba) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("rgba({}, {}, {}, {})", r, g, b, rounded_alpha(color))
}

/// Alpha as written in `rgba()`: clamped, two decimals.
fn rounded_alpha(color: &Rgba) -> f64 {
    (color.a.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Serialize a color the way committed values are written: hex when the
/// written alpha is 1, `rgba()` otherwise.
pub fn to_css(color: &Rgba) -> String {
    if rounded_alpha(color) >= 1.0 {
        to_hex(color)
    } else {
        to_rgba_string(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_parse_hex() {
        let c = CssColorParser.parse("#ff0000").unwrap();
        assert!(approx(c.r, 1.0) && approx(c.g, 0.0) && approx(c.b, 0.0) && approx(c.a, 1.0));
    }

    #[test]
    fn test_parse_named() {
        let c = CssColorParser.parse("blue").unwrap();
        assert!(approx(c.b, 1.0));
        assert!(approx(c.r, 0.0));
    }

    #[test]
    fn test_parse_rgba_function() {
        let c = CssColorParser.parse("rgba(0, 128, 255, 0.5)").unwrap();
        assert!(approx(c.g, 128.0 / 255.0));
        assert!(approx(c.a, 0.5));
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert!(CssColorParser.is_valid("  #00ff00  "));
    }

    #[test]
    fn test_reject_garbage() {
        assert!(!CssColorParser.is_valid("not-a-color"));
        assert!(!CssColorParser.is_valid(""));
        assert!(!CssColorParser.is_valid("#12"));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&Rgba::RED), "#ff0000");
        assert_eq!(to_hex(&Rgba::from_rgb8(18, 52, 86)), "#123456");
    }

    #[test]
    fn test_to_rgba_string() {
        let c = Rgba::RED.with_alpha(0.25);
        assert_eq!(to_rgba_string(&c), "rgba(255, 0, 0, 0.25)");
    }

    #[test]
    fn test_to_css_picks_format_by_alpha() {
        assert_eq!(to_css(&Rgba::WHITE), "#ffffff");
        assert_eq!(to_css(&Rgba::WHITE.with_alpha(0.5)), "rgba(255, 255, 255, 0.5)");
        // Alpha that rounds to 1 is written as hex, never `rgba(.., 1)`.
        assert_eq!(to_css(&Rgba::WHITE.with_alpha(0.996)), "#ffffff");
        assert_eq!(to_css(&Rgba::WHITE.with_alpha(0.994)), "rgba(255, 255, 255, 0.99)");
    }

    #[test]
    fn test_serialized_output_parses_back() {
        let c = Rgba::new(0.2, 0.4, 0.6, 0.7);
        let parsed = CssColorParser.parse(&to_css(&c)).unwrap();
        assert!((parsed.r - 0.2).abs() < 0.01);
        assert!((parsed.a - 0.7).abs() < 0.01);
    }
}
