//! Convex polygons and their fan triangulation.

use crate::error::{Error, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::settings::RasterSize;
use crate::texture::Texture;

use super::interp::{self, DepthSample};
use super::triangle::{BoundingBox, Triangle};
use super::vertex::Vertex;

/// A convex polygon: ordered vertices, derived triangles and optional images.
///
/// The vertex order must trace a convex boundary with consistent winding.
/// Triangulation fans out from vertex 0, so non-convex input silently yields
/// overlapping or missing triangles.
///
/// `Clone` deep-copies the texture and normal map.
#[derive(Clone, Debug)]
pub struct Polygon {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
    pub texture: Option<Texture>,
    /// Carried with the polygon but not consulted by shading yet.
    pub normal_map: Option<Texture>,
}

impl Default for Polygon {
    fn default() -> Self {
        Self::named("Polygon")
    }
}

impl Polygon {
    /// An empty polygon with no vertices.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            triangles: Vec::new(),
            texture: None,
            normal_map: None,
        }
    }

    /// Builds and triangulates a polygon from parallel position and color lists.
    pub fn new(name: impl Into<String>, positions: &[Vec4], colors: &[Vec3]) -> Result<Self> {
        if positions.len() != colors.len() {
            return Err(Error::AttributeMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }

        let vertices = positions
            .iter()
            .zip(colors)
            .map(|(&p, &c)| Vertex::colored(p, c))
            .collect();
        Ok(Self::from_vertices(name, vertices))
    }

    /// Builds and triangulates a polygon from fully specified vertices.
    pub fn from_vertices(name: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        let mut polygon = Self::named(name);
        polygon.vertices = vertices;
        polygon.triangulate();
        polygon
    }

    /// A regular polygon with `sides` vertices of one color.
    ///
    /// The unit template starts at (0, 1) and walks counter-clockwise; it is
    /// scaled, rotated by `rotation` degrees about Z and moved to `center`.
    pub fn regular(
        name: impl Into<String>,
        sides: usize,
        color: Vec3,
        center: Vec4,
        rotation: f32,
        scale: Vec4,
    ) -> Self {
        let step = 360.0 / sides as f32;
        let placement = Mat4::translation(center.x, center.y, center.z)
            * Mat4::rotation_z(rotation.to_radians())
            * Mat4::scaling(scale.x, scale.y, scale.z);

        let vertices = (0..sides)
            .map(|i| {
                let corner = Mat4::rotation_z((i as f32 * step).to_radians())
                    * Vec4::point(0.0, 1.0, 0.0);
                Vertex::colored(placement * corner, color)
            })
            .collect();
        Self::from_vertices(name, vertices)
    }

    /// Rebuilds the triangle list as a fan around vertex 0.
    ///
    /// `n` vertices give `n - 2` triangles `{0, i + 1, i + 2}`. Bounds are
    /// computed against the reference raster size from the authored positions.
    /// They are informational; rendering recomputes bounds from pixel-space
    /// positions for the actual raster.
    pub fn triangulate(&mut self) {
        self.triangles.clear();

        let n = self.vertices.len();
        if n < 3 {
            log::warn!(
                "polygon {:?} has {} vertices, nothing to triangulate",
                self.name,
                n
            );
            return;
        }

        for i in 0..n - 2 {
            let mut triangle = Triangle::new([0, i + 1, i + 2]);
            triangle.bounds = self.calc_bounding_box(&triangle, RasterSize::default());
            self.triangles.push(triangle);
        }
    }

    /// Recomputes every triangle's bounds for the current vertex positions.
    pub fn update_bounds(&mut self, size: RasterSize) {
        let bounds: Vec<BoundingBox> = self
            .triangles
            .iter()
            .map(|t| self.calc_bounding_box(t, size))
            .collect();
        for (triangle, bounds) in self.triangles.iter_mut().zip(bounds) {
            triangle.bounds = bounds;
        }
    }

    /// Pixel bounds of `triangle` for the current vertex positions.
    pub fn calc_bounding_box(&self, triangle: &Triangle, size: RasterSize) -> BoundingBox {
        BoundingBox::from_positions(&self.positions(triangle), size)
    }

    /// Positions of the triangle's three vertices.
    pub fn positions(&self, triangle: &Triangle) -> [Vec4; 3] {
        triangle.indices.map(|i| self.vertices[i].position)
    }

    /// The triangle's three vertices.
    pub fn corners(&self, triangle: &Triangle) -> [&Vertex; 3] {
        triangle.indices.map(|i| &self.vertices[i])
    }

    /// Barycentric weights of `point` within `triangle` (XY only).
    pub fn bary_interp_2d(&self, triangle: &Triangle, point: Vec4) -> Option<[f32; 3]> {
        interp::barycentric_2d(&self.positions(triangle), point)
    }

    /// Perspective-correct depth of a fragment, from the given world-space
    /// corner positions and camera position.
    pub fn interp_z_depth(
        &self,
        weights: &[f32; 3],
        world: &[Vec4; 3],
        camera_position: Vec4,
    ) -> DepthSample {
        interp::interp_depth(weights, world, camera_position)
    }

    /// Texture color at the fragment, using this polygon's texture.
    pub fn bary_interp_uvs(
        &self,
        weights: &[f32; 3],
        sample: &DepthSample,
        triangle: &Triangle,
    ) -> Vec3 {
        interp::interp_uv_color(weights, sample, self.corners(triangle), self.texture.as_ref())
    }

    /// Lighting multiplier at the fragment for a viewer looking along `look`.
    pub fn bary_interp_normals(
        &self,
        weights: &[f32; 3],
        sample: &DepthSample,
        triangle: &Triangle,
        look: Vec4,
    ) -> f32 {
        interp::interp_normal_intensity(weights, sample, self.corners(triangle), look)
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn set_normal_map(&mut self, normal_map: Texture) {
        self.normal_map = Some(normal_map);
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Appends a triangle, computing its bounds against the reference raster.
    ///
    /// Like [`Polygon::triangulate`], the stored bounds are not used for drawing.
    pub fn add_triangle(&mut self, mut triangle: Triangle) {
        triangle.bounds = self.calc_bounding_box(&triangle, RasterSize::default());
        self.triangles.push(triangle);
    }

    pub fn clear_triangles(&mut self) {
        self.triangles.clear();
    }

    pub fn triangle(&self, index: usize) -> &Triangle {
        &self.triangles[index]
    }

    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    pub fn vertex_mut(&mut self, index: usize) -> &mut Vertex {
        &mut self.vertices[index]
    }
}
