use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// One corner of a polygon and the attributes it contributes to shading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    /// Homogeneous position. World space for 3D scenes, pixel space for 2D.
    pub position: Vec4,
    /// RGB on a 0-255 scale.
    pub color: Vec3,
    /// Surface normal (w = 0). Zero when the scene supplies none.
    pub normal: Vec4,
    /// Texture coordinate in [0, 1].
    pub uv: Vec2,
}

impl Vertex {
    pub fn new(position: Vec4, color: Vec3, normal: Vec4, uv: Vec2) -> Self {
        Self {
            position,
            color,
            normal,
            uv,
        }
    }

    /// A vertex with only position and color; normal and uv are zero.
    pub fn colored(position: Vec4, color: Vec3) -> Self {
        Self::new(position, color, Vec4::ZERO, Vec2::ZERO)
    }
}
