//! Output raster plus depth buffer for one frame.
//!
//! Both are created fresh per render call. The depth buffer stores distances
//! (3D) or raw z (2D); smaller is closer, and a fragment replaces what is
//! stored when its depth is less than or equal to it.

use image::RgbImage;

use crate::colors;
use crate::math::vec3::Vec3;
use crate::settings::RasterSize;

/// Depth-buffer clear value in 3D mode. Fragments farther away than this are
/// never drawn.
pub const DEPTH_CLEAR_3D: f32 = 1000.0;

/// Depth-buffer clear value in 2D mode, where z is used as authored.
pub const DEPTH_CLEAR_2D: f32 = 1.0;

pub struct FrameBuffer {
    color: RgbImage,
    depth: Vec<f32>,
    size: RasterSize,
}

impl FrameBuffer {
    /// A raster filled with `background` and a depth buffer filled with `clear_depth`.
    pub fn new(size: RasterSize, background: Vec3, clear_depth: f32) -> Self {
        Self {
            color: RgbImage::from_pixel(size.width, size.height, colors::to_rgb(background)),
            depth: vec![clear_depth; size.pixel_count()],
            size,
        }
    }

    pub fn size(&self) -> RasterSize {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }

    /// Stored depth at (x, y).
    #[inline]
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.index(x, y)]
    }

    /// Depth test and write.
    ///
    /// Passes when `depth <= stored`; on pass the stored depth is replaced and
    /// `true` is returned so the caller can write the color.
    #[inline]
    pub fn test_and_set_depth(&mut self, x: u32, y: u32, depth: f32) -> bool {
        let idx = self.index(x, y);
        if depth <= self.depth[idx] {
            self.depth[idx] = depth;
            true
        } else {
            false
        }
    }

    /// Write a color without depth testing. Channels must already be in range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Vec3) {
        self.color.put_pixel(x, y, colors::to_rgb(color));
    }

    /// Hands the finished raster to the caller, dropping the depth buffer.
    pub fn into_image(self) -> RgbImage {
        self.color
    }
}
