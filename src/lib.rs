//! A CPU scanline rasterizer for convex polygons.
//!
//! Polygons are fan-triangulated and drawn into an [`image::RgbImage`] with a
//! per-pixel depth buffer. Two pipelines share one scan core:
//!
//! - **3D**: vertices go through a [`Camera`] and a pinhole or fisheye lens;
//!   depth, UVs and normals are interpolated perspective-correctly and shaded
//!   with a headlight along the view direction.
//! - **2D**: vertices are already in pixel space; colors blend linearly and
//!   raw z decides visibility.
//!
//! # Quick Start
//!
//! ```
//! use scanraster::prelude::*;
//!
//! let triangle = Polygon::new(
//!     "triangle",
//!     &[
//!         Vec4::point(-1.0, -1.0, 0.0),
//!         Vec4::point(1.0, -1.0, 0.0),
//!         Vec4::point(0.0, 1.0, 0.0),
//!     ],
//!     &[colors::WHITE; 3],
//! )?;
//!
//! let rasterizer = Rasterizer::new(vec![triangle]);
//! let image = rasterizer.render_scene();
//! assert_eq!(image.dimensions(), (512, 512));
//! # Ok::<(), scanraster::Error>(())
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod error;
pub mod geometry;
pub mod math;
pub mod rasterizer;
pub mod settings;
pub mod texture;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use error::{Error, Result};
pub use geometry::{Polygon, Vertex};
pub use rasterizer::Rasterizer;
pub use settings::{Lens, RasterSize, RenderMode, RenderSettings};
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use scanraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::colors;
    pub use crate::geometry::{Polygon, Triangle, Vertex};
    pub use crate::rasterizer::Rasterizer;
    pub use crate::settings::{Lens, RasterSize, RenderMode, RenderSettings};
    pub use crate::texture::Texture;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::quat::Quat;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::geometry::BoundingBox;
    pub use crate::render::framebuffer::{DEPTH_CLEAR_2D, DEPTH_CLEAR_3D};
    pub use crate::render::scan::scan_triangle;
    pub use crate::render::{draw_triangle, Edge, FlatShader, FrameBuffer};
}
