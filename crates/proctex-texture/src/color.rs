//! RGB color type for fragment evaluation and persistence.

use serde::{Deserialize, Serialize};

/// RGB color with f64 components (0.0 to 1.0 range).
///
/// Serializes as a 3-element array `[r, g, b]`, the form colors take in
/// persisted texture documents. Procedural fragments emit opaque pixels,
/// so there is no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    /// Create a new color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Linearly interpolate toward another color.
    pub fn lerp(&self, other: &Color3, t: f64) -> Color3 {
        let t = t.clamp(0.0, 1.0);
        Color3 {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color3 {
        Color3 {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Multiply color by a scalar.
    pub fn scale(&self, factor: f64) -> Color3 {
        Color3 {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Add two colors component-wise.
    pub fn add(&self, other: &Color3) -> Color3 {
        Color3 {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f64 / 255.0,
            g: rgb[1] as f64 / 255.0,
            b: rgb[2] as f64 / 255.0,
        }
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self::black()
    }
}

impl From<[f64; 3]> for Color3 {
    fn from(rgb: [f64; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color3> for [f64; 3] {
    fn from(c: Color3) -> Self {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        let black = Color3::black();
        let white = Color3::white();

        let mid = black.lerp(&white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert!((mid.g - 0.5).abs() < 1e-10);
        assert!((mid.b - 0.5).abs() < 1e-10);

        // t is clamped
        let over = black.lerp(&white, 1.5);
        assert_eq!(over, white);
    }

    #[test]
    fn test_rgb8_roundtrip() {
        let original = Color3::new(0.5, 0.25, 0.75);
        let rgb = original.to_rgb8();
        let restored = Color3::from_rgb8(rgb);

        // Allow for 8-bit quantization error
        assert!((original.r - restored.r).abs() < 0.01);
        assert!((original.g - restored.g).abs() < 0.01);
        assert!((original.b - restored.b).abs() < 0.01);
    }

    #[test]
    fn test_serde_as_array() {
        let color = Color3::new(0.72, 0.72, 0.72);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "[0.72,0.72,0.72]");

        let parsed: Color3 = serde_json::from_str("[0.77,0.47,0.4]").unwrap();
        assert_eq!(parsed, Color3::new(0.77, 0.47, 0.4));
    }
}
