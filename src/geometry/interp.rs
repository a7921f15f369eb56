//! Barycentric and perspective-correct interpolation helpers.
//!
//! Screen-space weights come from [`barycentric_2d`]. They are linear in pixel
//! space, so attributes are blended through per-vertex camera distances:
//!
//! ```text
//! depth = 1 / (w0/d0 + w1/d1 + w2/d2)
//! attr  = depth * (a0*w0/d0 + a1*w1/d1 + a2*w2/d2)
//! ```
//!
//! This is the usual 1/w interpolation, keyed on world-space distance to the
//! camera instead of clip-space w.

use crate::colors;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::texture::{image_color, Texture};

use super::vertex::Vertex;

/// Areas at or below this are treated as degenerate.
pub const AREA_EPSILON: f32 = 1e-6;

/// Ambient term added to the diffuse factor.
pub const AMBIENT_LIGHT: f32 = 0.2;

/// Overall brightness multiplier applied after the ambient term.
pub const LIGHT_GAIN: f32 = 1.3;

/// Camera distances of a fragment's triangle and the interpolated depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthSample {
    /// Distance from the camera to each world-space vertex.
    pub distances: [f32; 3],
    /// Perspective-correct distance at the fragment.
    pub depth: f32,
}

impl DepthSample {
    /// Perspective-correct blend of a per-vertex attribute.
    #[inline]
    fn blend<T>(&self, weights: &[f32; 3], attrs: [T; 3]) -> T
    where
        T: std::ops::Mul<f32, Output = T> + std::ops::Div<f32, Output = T> + std::ops::Add<Output = T>,
    {
        let [a0, a1, a2] = attrs;
        (a0 * weights[0] / self.distances[0]
            + a1 * weights[1] / self.distances[1]
            + a2 * weights[2] / self.distances[2])
            * self.depth
    }
}

/// Area of a triangle in the XY plane; z and w are ignored.
pub fn tri_area_2d(p1: Vec4, p2: Vec4, p3: Vec4) -> f32 {
    let a = Vec3::new(p1.x, p1.y, 0.0);
    let b = Vec3::new(p2.x, p2.y, 0.0);
    let c = Vec3::new(p3.x, p3.y, 0.0);
    0.5 * (a - b).cross(c - b).magnitude()
}

/// Area of a triangle in 3D; w is ignored.
pub fn tri_area_3d(p1: Vec4, p2: Vec4, p3: Vec4) -> f32 {
    let (a, b, c) = (p1.to_vec3(), p2.to_vec3(), p3.to_vec3());
    0.5 * (a - b).cross(c - b).magnitude()
}

/// Barycentric weights of `point` with respect to a triangle's XY projection.
///
/// Each weight is the area of the sub-triangle opposite that vertex divided by
/// the total area. Returns `None` for a zero-area triangle.
pub fn barycentric_2d(positions: &[Vec4; 3], point: Vec4) -> Option<[f32; 3]> {
    let [v0, v1, v2] = *positions;

    let total = tri_area_2d(v0, v1, v2);
    if total <= AREA_EPSILON {
        return None;
    }

    Some([
        tri_area_2d(point, v1, v2) / total,
        tri_area_2d(point, v2, v0) / total,
        tri_area_2d(point, v0, v1) / total,
    ])
}

/// Perspective-correct depth of a fragment from world-space vertex positions.
pub fn interp_depth(weights: &[f32; 3], world: &[Vec4; 3], camera_position: Vec4) -> DepthSample {
    let distances = world.map(|p| (camera_position - p).magnitude());

    let inverse = weights[0] / distances[0] + weights[1] / distances[1] + weights[2] / distances[2];

    DepthSample {
        distances,
        depth: 1.0 / inverse,
    }
}

/// Texture color at the fragment's perspective-correct UV.
///
/// UVs outside [0, 1] on either axis render black instead of sampling.
pub fn interp_uv_color(
    weights: &[f32; 3],
    sample: &DepthSample,
    vertices: [&Vertex; 3],
    texture: Option<&Texture>,
) -> Vec3 {
    let uv: Vec2 = sample.blend(weights, vertices.map(|v| v.uv));

    if uv.x < 0.0 || uv.y < 0.0 || uv.x > 1.0 || uv.y > 1.0 {
        return colors::BLACK;
    }
    image_color(uv, texture)
}

/// Lighting multiplier from the perspective-correct normal.
///
/// A headlight along `look`: `(|dot(n, look)| + ambient) * gain`. A normal
/// that interpolates to zero counts as facing the viewer.
pub fn interp_normal_intensity(
    weights: &[f32; 3],
    sample: &DepthSample,
    vertices: [&Vertex; 3],
    look: Vec4,
) -> f32 {
    let normal: Vec4 = sample.blend(weights, vertices.map(|v| v.normal));

    let facing = if normal.magnitude() <= f32::EPSILON {
        1.0
    } else {
        normal.normalize().dot(look).abs()
    };

    (facing + AMBIENT_LIGHT) * LIGHT_GAIN
}
