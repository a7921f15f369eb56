//! Per-fragment shading strategies.
//!
//! The scan core decides *which* pixels a triangle covers; a shader decides
//! how deep each one is and what color it gets, similar to how GPUs separate
//! the fixed-function rasterizer from programmable fragment shaders.
//!
//! Depth and color are split so that color work only happens for fragments
//! that survive the depth test.

use crate::geometry::interp::{self, DepthSample};
use crate::geometry::Vertex;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::texture::Texture;

/// Fragments closer to the camera than this are discarded.
pub const NEAR_DISCARD_DEPTH: f32 = 1.0;

/// Trait for per-fragment shading computations.
///
/// # Barycentric Weights
///
/// `weights` holds [w₀, w₁, w₂] for the fragment, measured in pixel space:
/// - They sum to 1.0 for any point inside the triangle
/// - Each is the influence of the matching vertex
pub trait FragmentShader {
    /// Depth of the fragment, or `None` to discard it before the depth test.
    fn depth(&self, weights: &[f32; 3]) -> Option<DepthSample>;

    /// Color of a fragment that passed the depth test, 0-255 per channel,
    /// possibly out of range.
    fn color(&self, weights: &[f32; 3], sample: &DepthSample) -> Vec3;
}

/// 2D shader: raw-z depth and barycentric vertex-color blend.
///
/// Vertices are used as authored, so there is no perspective correction.
/// Every fragment takes vertex 0's z as its depth, so visibility between
/// 2D triangles is decided per triangle, not per pixel.
pub struct FlatShader<'a> {
    vertices: [&'a Vertex; 3],
}

impl<'a> FlatShader<'a> {
    pub fn new(vertices: [&'a Vertex; 3]) -> Self {
        Self { vertices }
    }
}

impl FragmentShader for FlatShader<'_> {
    #[inline]
    fn depth(&self, _weights: &[f32; 3]) -> Option<DepthSample> {
        let [v0, v1, v2] = self.vertices;
        Some(DepthSample {
            distances: [v0.position.z, v1.position.z, v2.position.z],
            depth: v0.position.z,
        })
    }

    #[inline]
    fn color(&self, weights: &[f32; 3], _sample: &DepthSample) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        v0.color * weights[0] + v1.color * weights[1] + v2.color * weights[2]
    }
}

/// 3D shader: perspective-correct depth, texture lookup and headlight lighting.
///
/// Depth and attributes are interpolated from the *world-space* vertices;
/// the pixel-space copy only drives coverage and the barycentric weights.
pub struct PerspectiveShader<'a> {
    world: [&'a Vertex; 3],
    world_positions: [Vec4; 3],
    camera_position: Vec4,
    look: Vec4,
    texture: Option<&'a Texture>,
}

impl<'a> PerspectiveShader<'a> {
    pub fn new(
        world: [&'a Vertex; 3],
        camera_position: Vec4,
        look: Vec4,
        texture: Option<&'a Texture>,
    ) -> Self {
        Self {
            world,
            world_positions: world.map(|v| v.position),
            camera_position,
            look,
            texture,
        }
    }
}

impl FragmentShader for PerspectiveShader<'_> {
    #[inline]
    fn depth(&self, weights: &[f32; 3]) -> Option<DepthSample> {
        let sample = interp::interp_depth(weights, &self.world_positions, self.camera_position);
        // Too close to the camera. The negated test also drops NaN depths.
        if !(sample.depth >= NEAR_DISCARD_DEPTH) {
            return None;
        }
        Some(sample)
    }

    #[inline]
    fn color(&self, weights: &[f32; 3], sample: &DepthSample) -> Vec3 {
        let base = interp::interp_uv_color(weights, sample, self.world, self.texture);
        let intensity = interp::interp_normal_intensity(weights, sample, self.world, self.look);
        base * intensity
    }
}
