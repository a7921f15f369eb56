//! Scene container and per-frame render loop.
//!
//! A [`Rasterizer`] owns the polygons, the camera and the render settings.
//! Each [`Rasterizer::render_scene`] call builds a fresh raster and depth
//! buffer, so frames never share state.

use image::RgbImage;

use crate::camera::Camera;
use crate::geometry::{Polygon, Triangle, Vertex};
use crate::math::vec4::Vec4;
use crate::render::framebuffer::{DEPTH_CLEAR_2D, DEPTH_CLEAR_3D};
use crate::render::{self, FlatShader, FrameBuffer, PerspectiveShader, Projector};
use crate::settings::{Lens, RenderMode, RenderSettings};

/// Per-frame counters, logged at debug level.
#[derive(Debug, Default, Clone, Copy)]
struct FrameStats {
    triangles: usize,
    culled: usize,
    pixels: usize,
}

pub struct Rasterizer {
    polygons: Vec<Polygon>,
    camera: Camera,
    settings: RenderSettings,
}

impl Rasterizer {
    /// A rasterizer with the default camera and settings (512x512, 3D pinhole).
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self::with_settings(polygons, RenderSettings::default())
    }

    pub fn with_settings(polygons: Vec<Polygon>, settings: RenderSettings) -> Self {
        Self {
            polygons,
            camera: Camera::default(),
            settings,
        }
    }

    // =========================================================================
    // Scene
    // =========================================================================

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Removes every polygon. Later frames render only the background.
    pub fn clear_scene(&mut self) {
        self.polygons.clear();
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: RenderSettings) {
        self.settings = settings;
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.settings.mode = mode;
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders every polygon and returns the finished raster.
    ///
    /// Rendering cannot fail: degenerate, culled or unprojectable triangles
    /// are skipped.
    pub fn render_scene(&self) -> RgbImage {
        let RenderSettings {
            size,
            mode,
            background,
        } = self.settings;

        let clear_depth = match mode {
            RenderMode::Flat2D => DEPTH_CLEAR_2D,
            RenderMode::Perspective3D(_) => DEPTH_CLEAR_3D,
        };
        let mut fb = FrameBuffer::new(size, background, clear_depth);

        let stats = match mode {
            RenderMode::Flat2D => self.render_flat(&mut fb),
            RenderMode::Perspective3D(lens) => self.render_perspective(&mut fb, lens),
        };

        log::debug!(
            "{} frame {}x{}: {} polygons, {} triangles ({} culled), {} pixels written",
            mode,
            size.width,
            size.height,
            self.polygons.len(),
            stats.triangles,
            stats.culled,
            stats.pixels
        );

        fb.into_image()
    }

    /// Vertices are already in pixel space.
    fn render_flat(&self, fb: &mut FrameBuffer) -> FrameStats {
        let mut stats = FrameStats::default();

        for polygon in &self.polygons {
            for triangle in &polygon.triangles {
                let shader = FlatShader::new(polygon.corners(triangle));
                stats.pixels += render::draw_triangle(fb, &polygon.positions(triangle), &shader);
                stats.triangles += 1;
            }
        }
        stats
    }

    /// The camera's aspect ratio follows the raster size.
    fn render_perspective(&self, fb: &mut FrameBuffer, lens: Lens) -> FrameStats {
        let mut camera = self.camera.clone();
        camera.aspect_ratio = fb.size().aspect_ratio();
        let projector = Projector::new(
            lens,
            camera.view_matrix(),
            camera.view_projection_matrix(),
            fb.size(),
        );
        let camera_position = camera.position();
        let forward = camera.forward();

        let mut stats = FrameStats::default();
        // Pixel-space positions for the current polygon, parallel to its vertices.
        let mut screen: Vec<Option<Vec4>> = Vec::new();

        for polygon in &self.polygons {
            screen.clear();
            screen.extend(polygon.vertices.iter().map(|v| projector.project(v.position)));

            for triangle in &polygon.triangles {
                stats.triangles += 1;
                let world = polygon.corners(triangle);

                if is_back_facing(world, forward) {
                    log::trace!("culled back-facing triangle {:?} of {:?}", triangle.indices, polygon.name);
                    stats.culled += 1;
                    continue;
                }

                let Some(pixels) = screen_positions(&screen, triangle) else {
                    log::trace!("triangle {:?} of {:?} is behind the camera", triangle.indices, polygon.name);
                    stats.culled += 1;
                    continue;
                };

                let shader = PerspectiveShader::new(world, camera_position, forward, polygon.texture.as_ref());
                stats.pixels += render::draw_triangle(fb, &pixels, &shader);
            }
        }
        stats
    }
}

/// A triangle faces away only when every vertex normal points along the view
/// direction. Zero normals never cull.
fn is_back_facing(vertices: [&Vertex; 3], forward: Vec4) -> bool {
    vertices.iter().all(|v| forward.dot(v.normal) > 0.0)
}

fn screen_positions(screen: &[Option<Vec4>], triangle: &Triangle) -> Option<[Vec4; 3]> {
    let [a, b, c] = triangle.indices.map(|i| screen[i]);
    Some([a?, b?, c?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::math::vec2::Vec2;
    use crate::math::vec3::Vec3;
    use crate::settings::RasterSize;
    use crate::texture::Texture;

    const BLACK: [u8; 3] = [0, 0, 0];

    fn centered_triangle() -> Polygon {
        Polygon::new(
            "triangle",
            &[
                Vec4::point(-1.0, -1.0, 0.0),
                Vec4::point(1.0, -1.0, 0.0),
                Vec4::point(0.0, 1.0, 0.0),
            ],
            &[colors::WHITE; 3],
        )
        .unwrap()
    }

    fn with_normals(mut polygon: Polygon, normal: Vec4) -> Polygon {
        for vertex in &mut polygon.vertices {
            vertex.normal = normal;
        }
        polygon
    }

    fn corners_are(image: &RgbImage, color: [u8; 3]) -> bool {
        let (w, h) = image.dimensions();
        [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)]
            .iter()
            .all(|&(x, y)| image.get_pixel(x, y).0 == color)
    }

    #[test]
    fn triangle_in_front_of_camera_covers_center() {
        let rasterizer = Rasterizer::new(vec![centered_triangle()]);
        let image = rasterizer.render_scene();

        assert_eq!(image.dimensions(), (512, 512));
        assert_ne!(image.get_pixel(256, 256).0, BLACK);
        assert!(corners_are(&image, BLACK));
    }

    #[test]
    fn wide_raster_keeps_square_proportions() {
        let square = Polygon::new(
            "square",
            &[
                Vec4::point(-1.0, -1.0, 0.0),
                Vec4::point(1.0, -1.0, 0.0),
                Vec4::point(1.0, 1.0, 0.0),
                Vec4::point(-1.0, 1.0, 0.0),
            ],
            &[colors::WHITE; 4],
        )
        .unwrap();
        let settings = RenderSettings {
            size: RasterSize::new(128, 64),
            ..RenderSettings::default()
        };
        let image = Rasterizer::with_settings(vec![square], settings).render_scene();

        let across = (0..128).filter(|&x| image.get_pixel(x, 32).0 != BLACK).count();
        let down = (0..64).filter(|&y| image.get_pixel(64, y).0 != BLACK).count();
        assert!((13..=17).contains(&down), "square is {down} pixels tall");
        assert!(across.abs_diff(down) <= 2, "square is {across}x{down} pixels");
    }

    #[test]
    fn fisheye_covers_center() {
        let mut rasterizer = Rasterizer::new(vec![centered_triangle()]);
        rasterizer.set_render_mode(RenderMode::Perspective3D(Lens::fisheye()));
        let image = rasterizer.render_scene();

        assert_ne!(image.get_pixel(256, 256).0, BLACK);
        assert!(corners_are(&image, BLACK));
    }

    #[test]
    fn textured_polygon_is_lit_and_clamped() {
        let mut polygon = with_normals(centered_triangle(), Vec4::direction(0.0, 0.0, 1.0));
        for vertex in &mut polygon.vertices {
            vertex.uv = Vec2::new(0.5, 0.5);
        }
        polygon.set_texture(Texture::from_rgb(1, 1, vec![255, 0, 0]).unwrap());

        let image = Rasterizer::new(vec![polygon]).render_scene();
        assert_eq!(image.get_pixel(256, 256).0, [255, 0, 0]);
    }

    #[test]
    fn back_facing_triangle_is_culled() {
        let away = with_normals(centered_triangle(), Vec4::direction(0.0, 0.0, -1.0));
        let image = Rasterizer::new(vec![away]).render_scene();
        assert!(image.pixels().all(|p| p.0 == BLACK));

        let toward = with_normals(centered_triangle(), Vec4::direction(0.0, 0.0, 1.0));
        let image = Rasterizer::new(vec![toward]).render_scene();
        assert_ne!(image.get_pixel(256, 256).0, BLACK);
    }

    #[test]
    fn geometry_behind_camera_is_skipped() {
        let mut rasterizer = Rasterizer::new(vec![centered_triangle()]);
        rasterizer.camera_mut().rotate_up(180.0);
        let image = rasterizer.render_scene();
        assert!(image.pixels().all(|p| p.0 == BLACK));
    }

    #[test]
    fn fragments_nearer_than_one_unit_are_discarded() {
        // Every vertex is within one unit of the camera.
        let small = Polygon::new(
            "small",
            &[
                Vec4::point(-0.5, -0.5, 0.0),
                Vec4::point(0.5, -0.5, 0.0),
                Vec4::point(0.0, 0.5, 0.0),
            ],
            &[colors::WHITE; 3],
        )
        .unwrap();
        let mut rasterizer = Rasterizer::new(vec![small]);
        rasterizer.camera_mut().set_position(Vec3::new(0.0, 0.0, 0.5));
        let image = rasterizer.render_scene();
        assert!(image.pixels().all(|p| p.0 == BLACK));
    }

    #[test]
    fn nearer_polygon_hides_farther_one() {
        let far = Polygon::regular(
            "far",
            4,
            Vec3::new(0.0, 0.0, 255.0),
            Vec4::point(0.0, 0.0, -5.0),
            45.0,
            Vec4::new(4.0, 4.0, 1.0, 1.0),
        );
        let mut near = centered_triangle();
        near.set_texture(Texture::from_rgb(1, 1, vec![0, 200, 0]).unwrap());
        for vertex in &mut near.vertices {
            vertex.uv = Vec2::new(0.5, 0.5);
        }

        // Submission order must not matter.
        for scene in [vec![far.clone(), near.clone()], vec![near.clone(), far.clone()]] {
            let image = Rasterizer::new(scene).render_scene();
            let center = image.get_pixel(256, 256).0;
            assert_eq!(center[0], 0);
            assert!(center[1] > 0);
            assert_eq!(center[2], 0);
        }
    }

    #[test]
    fn flat_mode_uses_pixel_coordinates_and_raw_z() {
        let size = RasterSize::new(64, 48);
        let settings = RenderSettings {
            size,
            mode: RenderMode::Flat2D,
            background: colors::BLACK,
        };

        let back = Polygon::regular(
            "back",
            4,
            Vec3::new(0.0, 0.0, 255.0),
            Vec4::point(32.0, 24.0, 0.8),
            45.0,
            Vec4::new(20.0, 20.0, 1.0, 1.0),
        );
        let front = Polygon::regular(
            "front",
            3,
            colors::RED,
            Vec4::point(32.0, 24.0, 0.1),
            0.0,
            Vec4::new(10.0, 10.0, 1.0, 1.0),
        );
        // Beyond the cleared 2D depth, never drawn.
        let hidden = Polygon::regular(
            "hidden",
            4,
            colors::WHITE,
            Vec4::point(32.0, 24.0, 2.0),
            45.0,
            Vec4::new(30.0, 30.0, 1.0, 1.0),
        );

        let rasterizer = Rasterizer::with_settings(vec![front, hidden, back], settings);
        let image = rasterizer.render_scene();

        assert_eq!(image.dimensions(), (64, 48));
        assert_eq!(image.get_pixel(32, 24).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(32, 10).0, [0, 0, 255]);
        assert_eq!(image.get_pixel(2, 2).0, BLACK);
    }

    #[test]
    fn polygons_beyond_reference_raster_still_draw() {
        let settings = RenderSettings {
            size: RasterSize::new(1024, 64),
            mode: RenderMode::Flat2D,
            background: colors::BLACK,
        };
        let far_right = Polygon::regular(
            "far right",
            4,
            colors::RED,
            Vec4::point(800.0, 32.0, 0.5),
            45.0,
            Vec4::new(20.0, 20.0, 1.0, 1.0),
        );
        // Stored bounds were clamped to the 512-wide reference raster.
        assert!(far_right.triangles[0].bounds.x_left > far_right.triangles[0].bounds.x_right);

        let image = Rasterizer::with_settings(vec![far_right], settings).render_scene();
        assert_eq!(image.get_pixel(800, 32).0, [255, 0, 0]);
    }

    #[test]
    fn clear_scene_leaves_background() {
        let settings = RenderSettings {
            size: RasterSize::square(32),
            background: colors::GRAY,
            ..RenderSettings::default()
        };
        let mut rasterizer = Rasterizer::with_settings(vec![centered_triangle()], settings);
        assert_eq!(rasterizer.polygons().len(), 1);

        rasterizer.clear_scene();
        assert!(rasterizer.polygons().is_empty());
        let image = rasterizer.render_scene();
        assert!(image.pixels().all(|p| p.0 == [128, 128, 128]));

        rasterizer.add_polygon(centered_triangle());
        assert_ne!(rasterizer.render_scene().get_pixel(16, 16).0, [128, 128, 128]);
    }
}
