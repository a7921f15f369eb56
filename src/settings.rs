//! Per-render configuration.
//!
//! Everything here is plain data chosen by the caller before a frame; nothing
//! is persisted between renders.

use crate::colors;
use crate::math::vec3::Vec3;

/// Reference output edge length in pixels.
pub const REFERENCE_SIZE: u32 = 512;

/// Focal length of the fisheye lens as a fraction of the image size.
pub const DEFAULT_FISHEYE_FOCAL_LENGTH: f32 = 0.3;

/// Dimensions of the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl Default for RasterSize {
    fn default() -> Self {
        Self::square(REFERENCE_SIZE)
    }
}

impl RasterSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera lens used to project vertices in 3D mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lens {
    /// Standard perspective projection through the camera's matrices.
    #[default]
    Pinhole,
    /// Equidistant (f-theta) fisheye: pixel radius grows linearly with the
    /// angle from the viewing axis.
    Fisheye {
        /// Fraction of the image size covered per radian.
        focal_length: f32,
    },
}

impl Lens {
    pub fn fisheye() -> Self {
        Lens::Fisheye {
            focal_length: DEFAULT_FISHEYE_FOCAL_LENGTH,
        }
    }
}

/// Which shading pipeline a frame runs through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Vertices are already in pixel space. Barycentric vertex-color blend,
    /// raw-z depth test.
    Flat2D,
    /// Full camera transform, perspective-correct texturing and lighting.
    Perspective3D(Lens),
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Perspective3D(Lens::Pinhole)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Flat2D => write!(f, "2D"),
            RenderMode::Perspective3D(Lens::Pinhole) => write!(f, "3D pinhole"),
            RenderMode::Perspective3D(Lens::Fisheye { focal_length }) => {
                write!(f, "3D fisheye (f = {focal_length})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub size: RasterSize,
    pub mode: RenderMode,
    /// Color of pixels no triangle covers (0-255 channels).
    pub background: Vec3,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: RasterSize::default(),
            mode: RenderMode::default(),
            background: colors::BLACK,
        }
    }
}
