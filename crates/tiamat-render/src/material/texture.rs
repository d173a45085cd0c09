use std::sync::OnceLock;

use crate::paint::Color;

/// Image-backed shading resource.
///
/// Pixel data may arrive after construction (decoding happens off the hot
/// path, outside this crate): [`supply`](Self::supply) publishes RGBA8 data
/// once, and [`is_loaded`](Self::is_loaded) reports readiness. A material
/// holding an unloaded texture is not ready, which keeps the primitive it
/// shades out of command construction until the data lands.
#[derive(Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pixels: OnceLock<Vec<u8>>,
}

impl Texture {
    /// Creates a texture whose pixels have not arrived yet.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: OnceLock::new(),
        }
    }

    /// Creates a texture that is loaded from the start.
    ///
    /// # Panics
    /// Panics if `pixels` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "pixel buffer does not match {width}x{height} RGBA8"
        );
        let texture = Self::new(width, height);
        let _ = texture.pixels.set(pixels);
        texture
    }

    /// Creates a loaded texture filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let px = color.to_rgba8();
        let pixels = px
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * 4)
            .collect();
        Self::from_rgba8(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Publishes pixel data. Returns `false` when data was already present
    /// (first supply wins) or when the buffer size does not match.
    pub fn supply(&self, pixels: Vec<u8>) -> bool {
        if pixels.len() != (self.width as usize) * (self.height as usize) * 4 {
            log::warn!(
                "texture supply rejected: {} bytes for {}x{} RGBA8",
                pixels.len(),
                self.width,
                self.height
            );
            return false;
        }
        self.pixels.set(pixels).is_ok()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.pixels.get().is_some()
    }

    /// Nearest-neighbor sample at normalized coordinates.
    ///
    /// Coordinates are clamped to the image; an unloaded texture samples
    /// transparent black.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let Some(pixels) = self.pixels.get() else {
            return Color::TRANSPARENT;
        };
        if self.width == 0 || self.height == 0 {
            return Color::TRANSPARENT;
        }

        let x = ((u * self.width as f32) as i64).clamp(0, self.width as i64 - 1) as usize;
        let y = ((v * self.height as f32) as i64).clamp(0, self.height as i64 - 1) as usize;
        let i = (y * self.width as usize + x) * 4;

        match pixels.get(i..i + 4) {
            Some(px) => Color::from_rgba8(px[0], px[1], px[2], px[3]),
            None => Color::TRANSPARENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unloaded_until_supplied() {
        let texture = Texture::new(2, 2);
        assert!(!texture.is_loaded());

        assert!(texture.supply(vec![255; 16]));
        assert!(texture.is_loaded());
    }

    #[test]
    fn first_supply_wins() {
        let texture = Texture::new(1, 1);
        assert!(texture.supply(vec![255, 0, 0, 255]));
        assert!(!texture.supply(vec![0, 255, 0, 255]));
        assert_eq!(texture.sample(0.5, 0.5), Color::RED);
    }

    #[test]
    fn supply_rejects_wrong_size() {
        let texture = Texture::new(2, 2);
        assert!(!texture.supply(vec![0; 3]));
        assert!(!texture.is_loaded());
    }

    #[test]
    fn sample_clamps_to_edges() {
        let texture = Texture::from_rgba8(
            2,
            1,
            vec![255, 0, 0, 255, 0, 0, 255, 255], // red, blue
        );
        assert_eq!(texture.sample(-1.0, 0.5), Color::RED);
        assert_eq!(texture.sample(2.0, 0.5), Color::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn unloaded_sample_is_transparent() {
        let texture = Texture::new(4, 4);
        assert_eq!(texture.sample(0.5, 0.5), Color::TRANSPARENT);
    }
}
