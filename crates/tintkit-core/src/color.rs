//! RGBA and HSV color representations.
//!
//! [`Rgba`] is the canonical storage; [`Hsv`] is the view the picker's
//! sliders operate on. Both use `f64` channels to match kurbo geometry.

use serde::{Deserialize, Serialize};

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// All channels are normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque red, the picker's fallback color.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a new color from normalized channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// Return a copy with the alpha channel replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Return a copy with every channel clamped to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Red, green and blue as rounded 8-bit values.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }

    /// All four channels as rounded 8-bit values.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [r, g, b, channel_to_u8(self.a)]
    }

    /// Convert to HSV. Achromatic colors get a hue of 0.
    pub fn to_hsv(&self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv::new(h, s, max)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::RED
    }
}

impl From<peniko::Color> for Rgba {
    fn from(color: peniko::Color) -> Self {
        let [r, g, b, a] = color.components;
        Self::new(f64::from(r), f64::from(g), f64::from(b), f64::from(a)).clamped()
    }
}

impl From<Rgba> for peniko::Color {
    fn from(color: Rgba) -> Self {
        peniko::Color::new([
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a as f32,
        ])
    }
}

/// A hue/saturation/value color.
///
/// Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color. Hue is wrapped into `[0, 360)`.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s,
            v,
        }
    }

    /// Return a copy with the hue replaced.
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.v)
    }

    /// Return a copy with saturation and value replaced.
    pub fn with_saturation_value(self, s: f64, v: f64) -> Self {
        Self::new(self.h, s, v)
    }

    /// The fully saturated, full-value color of this hue.
    pub fn pure_hue(&self) -> Self {
        Self::new(self.h, 1.0, 1.0)
    }

    /// Convert to RGBA with the given alpha.
    pub fn to_rgba(&self, alpha: f64) -> Rgba {
        let c = self.v * self.s;
        let h_prime = self.h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgba::new(r + m, g + m, b + m, alpha).clamped()
    }
}

impl Default for Hsv {
    fn default() -> Self {
        Rgba::RED.to_hsv()
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_red_to_hsv() {
        let hsv = Rgba::RED.to_hsv();
        assert!(approx(hsv.h, 0.0));
        assert!(approx(hsv.s, 1.0));
        assert!(approx(hsv.v, 1.0));
    }

    #[test]
    fn test_primary_hues() {
        assert!(approx(Rgba::new(0.0, 1.0, 0.0, 1.0).to_hsv().h, 120.0));
        assert!(approx(Rgba::new(0.0, 0.0, 1.0, 1.0).to_hsv().h, 240.0));
        assert!(approx(Rgba::new(1.0, 0.0, 1.0, 1.0).to_hsv().h, 300.0));
    }

    #[test]
    fn test_gray_has_zero_hue_and_saturation() {
        let hsv = Rgba::new(0.5, 0.5, 0.5, 1.0).to_hsv();
        assert!(approx(hsv.h, 0.0));
        assert!(approx(hsv.s, 0.0));
        assert!(approx(hsv.v, 0.5));
    }

    #[test]
    fn test_black_has_zero_saturation() {
        let hsv = Rgba::BLACK.to_hsv();
        assert!(approx(hsv.s, 0.0));
        assert!(approx(hsv.v, 0.0));
    }

    #[test]
    fn test_hsv_to_rgba_keeps_alpha() {
        let rgba = Hsv::new(120.0, 1.0, 1.0).to_rgba(0.4);
        assert!(approx(rgba.r, 0.0));
        assert!(approx(rgba.g, 1.0));
        assert!(approx(rgba.b, 0.0));
        assert!(approx(rgba.a, 0.4));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(approx(Hsv::new(360.0, 1.0, 1.0).h, 0.0));
        assert!(approx(Hsv::new(-30.0, 1.0, 1.0).h, 330.0));
    }

    #[test]
    fn test_hsv_rgb_hsv_for_saturated_color() {
        let original = Hsv::new(200.0, 0.75, 0.5);
        let back = original.to_rgba(1.0).to_hsv();
        assert!((back.h - original.h).abs() < 1e-6);
        assert!((back.s - original.s).abs() < 1e-6);
        assert!((back.v - original.v).abs() < 1e-6);
    }

    #[test]
    fn test_to_rgb8_rounds() {
        let rgba = Rgba::new(0.5, 1.0, 0.0, 1.0);
        assert_eq!(rgba.to_rgb8(), [128, 255, 0]);
    }

    #[test]
    fn test_peniko_conversion() {
        let color = peniko::Color::from_rgba8(255, 0, 0, 255);
        let rgba = Rgba::from(color);
        assert!(approx(rgba.r, 1.0));
        assert!(approx(rgba.a, 1.0));
    }
}
