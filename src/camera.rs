//! Perspective camera with an incremental movement model.
//!
//! # Coordinate System
//!
//! World space is **right-handed** with the default camera sitting on +Z and
//! looking down -Z:
//! - right: +X
//! - up: +Y
//! - forward: -Z
//!
//! # Orientation
//!
//! Orientation is a single unit quaternion. The forward/right/up basis is
//! derived from it on demand, so the frame stays orthonormal across any
//! number of rotation commands.

use crate::math::mat4::Mat4;
use crate::math::quat::Quat;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Camera with position, orientation and projection parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    orientation: Quat,
    position: Vec4,

    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    /// Width divided by height.
    pub aspect_ratio: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            position: Vec4::point(0.0, 0.0, 10.0),
            fov: 45.0,
            near_clip: 0.01,
            far_clip: 100.0,
            aspect_ratio: 1.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the camera's world position (w = 1).
    pub fn position(&self) -> Vec4 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = Vec4::from_vec3(position, 1.0);
    }

    /// Viewing direction (w = 0).
    pub fn forward(&self) -> Vec4 {
        Vec4::from_vec3(self.orientation.rotate(Vec3::FORWARD), 0.0)
    }

    pub fn right(&self) -> Vec4 {
        Vec4::from_vec3(self.orientation.rotate(Vec3::RIGHT), 0.0)
    }

    pub fn up(&self) -> Vec4 {
        Vec4::from_vec3(self.orientation.rotate(Vec3::UP), 0.0)
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// World -> camera transform.
    ///
    /// Rows are right/up/forward (the transposed basis) composed with a
    /// translation by -position, which inverts the camera's world pose.
    /// Points in front of the camera end up with positive view-space z.
    pub fn view_matrix(&self) -> Mat4 {
        let orient = Mat4::from_basis_rows(
            self.right().to_vec3(),
            self.up().to_vec3(),
            self.forward().to_vec3(),
        );
        let trans = Mat4::translation(-self.position.x, -self.position.y, -self.position.z);
        orient * trans
    }

    /// Perspective projection mapping view-space z into the [0, 1] depth range.
    ///
    /// View-space z is copied into w; the perspective divide happens downstream.
    pub fn perspective_matrix(&self) -> Mat4 {
        let fov_rad = self.fov.to_radians();

        let p = self.far_clip / (self.far_clip - self.near_clip);
        let q = (-self.far_clip * self.near_clip) / (self.far_clip - self.near_clip);
        let s = 1.0 / (fov_rad / 2.0).tan();

        Mat4::new([
            [s / self.aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, s, 0.0, 0.0],
            [0.0, 0.0, p, q],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// `projection * view`.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.perspective_matrix() * self.view_matrix()
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn translate_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }

    pub fn translate_right(&mut self, distance: f32) {
        self.position = self.position + self.right() * distance;
    }

    pub fn translate_up(&mut self, distance: f32) {
        self.position = self.position + self.up() * distance;
    }

    // =========================================================================
    // Rotation (degrees)
    // =========================================================================

    /// Rolls right/up about the forward axis.
    pub fn rotate_forward(&mut self, degrees: f32) {
        self.rotate_about(self.forward().to_vec3(), degrees);
    }

    /// Pitches forward/up about the right axis.
    pub fn rotate_right(&mut self, degrees: f32) {
        self.rotate_about(self.right().to_vec3(), degrees);
    }

    /// Yaws forward/right about the up axis.
    pub fn rotate_up(&mut self, degrees: f32) {
        self.rotate_about(self.up().to_vec3(), degrees);
    }

    fn rotate_about(&mut self, axis: Vec3, degrees: f32) {
        let turn = Quat::from_axis_angle(axis, degrees.to_radians());
        self.orientation = (turn * self.orientation).normalize();
    }
}
