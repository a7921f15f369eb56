//! Vertex projection from world space to pixel space.
//!
//! Returned positions carry pixel x/y; z holds the NDC depth (pinhole) or the
//! view-space cosine to the viewing axis (fisheye) and is informational only,
//! since 3D depth comes from world-space distances.

use crate::math::mat4::Mat4;
use crate::math::vec4::Vec4;
use crate::settings::{Lens, RasterSize};

/// Precomputed matrices for projecting one frame's vertices.
pub struct Projector {
    lens: Lens,
    view: Mat4,
    view_projection: Mat4,
    size: RasterSize,
}

impl Projector {
    pub fn new(lens: Lens, view: Mat4, view_projection: Mat4, size: RasterSize) -> Self {
        Self {
            lens,
            view,
            view_projection,
            size,
        }
    }

    /// Projects a world-space point. `None` when a pinhole vertex sits on or
    /// behind the camera plane.
    pub fn project(&self, position: Vec4) -> Option<Vec4> {
        match self.lens {
            Lens::Pinhole => pinhole(self.view_projection * position, self.size),
            Lens::Fisheye { focal_length } => {
                Some(fisheye(self.view * position, focal_length, self.size))
            }
        }
    }
}

/// Perspective divide and viewport mapping of a clip-space point.
pub fn pinhole(clip: Vec4, size: RasterSize) -> Option<Vec4> {
    if clip.w <= 0.0 {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    let ndc_z = clip.z / clip.w;

    Some(Vec4::new(
        (ndc_x + 1.0) * 0.5 * size.width as f32,
        (1.0 - ndc_y) * 0.5 * size.height as f32,
        ndc_z,
        clip.w,
    ))
}

/// Equidistant fisheye mapping of a view-space point.
///
/// The homogeneous point is normalized as a whole (w included) and θ is taken
/// from the length of its xy part. The pixel radius from the image center is
/// `focal_length * θ` as a fraction of the image size. Both axes are flipped,
/// so view-space +x lands in the left half and +y in the upper half.
pub fn fisheye(view: Vec4, focal_length: f32, size: RasterSize) -> Vec4 {
    let dir = view.normalize();

    let phi = dir.y.atan2(dir.x);
    let radial = (dir.x * dir.x + dir.y * dir.y).sqrt().min(1.0);
    let theta = radial.asin();
    let r = focal_length * theta;

    Vec4::new(
        (0.5 - r * phi.cos()) * size.width as f32,
        (0.5 - r * phi.sin()) * size.height as f32,
        dir.z,
        1.0,
    )
}
