//! Pixel buffer for rendered textures.

use crate::color::Color3;

/// A 2D pixel buffer.
#[derive(Debug, Clone)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color3>,
}

impl TextureBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color3) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new buffer filled with black.
    pub fn new_black(width: u32, height: u32) -> Self {
        Self::new(width, height, Color3::black())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color3 {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color3) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// Get a pixel with wrapping coordinates.
    #[inline]
    pub fn get_wrapped(&self, x: i32, y: i32) -> Color3 {
        let wx = x.rem_euclid(self.width as i32) as u32;
        let wy = y.rem_euclid(self.height as i32) as u32;
        self.get(wx, wy)
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }

    /// Convert to packed 8-bit RGBA bytes with opaque alpha.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            let [r, g, b] = color.to_rgb8();
            bytes.extend_from_slice(&[r, g, b, 255]);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut buffer = TextureBuffer::new_black(4, 4);
        buffer.set(2, 3, Color3::white());

        assert_eq!(buffer.get(2, 3), Color3::white());
        assert_eq!(buffer.get(0, 0), Color3::black());
    }

    #[test]
    fn test_wrapped_access() {
        let mut buffer = TextureBuffer::new_black(4, 4);
        buffer.set(0, 0, Color3::white());

        assert_eq!(buffer.get_wrapped(4, 4), Color3::white());
        assert_eq!(buffer.get_wrapped(-4, -4), Color3::white());
    }

    #[test]
    fn test_byte_conversion_sizes() {
        let buffer = TextureBuffer::new(8, 4, Color3::gray(0.5));
        assert_eq!(buffer.to_rgb8().len(), 8 * 4 * 3);
        assert_eq!(buffer.to_rgba8().len(), 8 * 4 * 4);

        // Alpha is opaque
        assert_eq!(buffer.to_rgba8()[3], 255);
    }
}
