use std::path::Path;

use image::RgbImage;

use crate::colors;
use crate::error::{Error, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// An owned RGB image used as a polygon texture or normal map.
///
/// Cloning deep-copies the pixel data, so a polygon and its copy never share
/// an image.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    image: RgbImage,
}

impl Texture {
    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path)?.to_rgb8();
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Builds a texture from tightly packed, row-major RGB bytes (row 0 at the top).
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let len = data.len();
        if width == 0 || height == 0 {
            return Err(Error::TextureSize { width, height, len });
        }
        RgbImage::from_raw(width, height, data)
            .map(Self::from_image)
            .ok_or(Error::TextureSize { width, height, len })
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// # UV Coordinate Convention
    /// - UV coordinates are expected in [0,1]
    /// - v = 0 is the bottom of the image, but row 0 is stored at the top,
    ///   so v is flipped before indexing
    /// - Coordinates at exactly 1.0 land on the last row/column
    ///
    /// Returns the channels on a 0-255 scale.
    #[inline]
    pub fn sample(&self, uv: Vec2) -> Vec3 {
        let width = self.width() as f32;
        let height = self.height() as f32;

        let x = (width * uv.x).min(width - 1.0);
        let y = (height * (1.0 - uv.y)).min(height - 1.0);

        if x < 0.0 || y < 0.0 {
            return colors::GRAY;
        }

        let [r, g, b] = self.image.get_pixel(x as u32, y as u32).0;
        Vec3::new(r as f32, g as f32, b as f32)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// Color of `texture` at `uv`, or opaque white when there is no texture.
pub fn image_color(uv: Vec2, texture: Option<&Texture>) -> Vec3 {
    match texture {
        Some(texture) => texture.sample(uv),
        None => colors::WHITE,
    }
}
