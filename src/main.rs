use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use scanraster::prelude::*;

const CHECKER_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

fn checkerboard() -> Texture {
    Texture::from_image(RgbImage::from_fn(CHECKER_SIZE, CHECKER_SIZE, |x, y| {
        if (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0 {
            Rgb([230, 230, 230])
        } else {
            Rgb([40, 90, 200])
        }
    }))
}

/// A textured 4x4 quad facing +Z, tilted away from the camera.
fn textured_quad() -> Polygon {
    let corners = [(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)];
    let uvs = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let tilt = Mat4::rotation_z(15f32.to_radians());

    let vertices = corners
        .iter()
        .zip(uvs)
        .map(|(&(x, y), (u, v))| {
            Vertex::new(
                tilt * Vec4::point(x, y, -2.0 + 0.4 * y),
                colors::WHITE,
                Vec4::direction(0.0, -0.2, 1.0).normalize(),
                Vec2::new(u, v),
            )
        })
        .collect();

    let mut quad = Polygon::from_vertices("checker quad", vertices);
    quad.set_texture(checkerboard());
    quad
}

fn scene_3d() -> Vec<Polygon> {
    let hexagon = Polygon::regular(
        "hexagon",
        6,
        colors::RED,
        Vec4::point(1.5, 1.0, 1.0),
        0.0,
        Vec4::new(1.0, 1.0, 1.0, 1.0),
    );
    vec![textured_quad(), hexagon]
}

/// Overlapping polygons already in pixel coordinates; smaller z is in front.
fn scene_2d(size: RasterSize) -> Vec<Polygon> {
    let (w, h) = (size.width as f32, size.height as f32);
    let radius = w.min(h) * 0.3;

    vec![
        Polygon::regular(
            "back square",
            4,
            Vec3::new(40.0, 90.0, 200.0),
            Vec4::point(w * 0.45, h * 0.5, 0.9),
            45.0,
            Vec4::new(radius, radius, 1.0, 1.0),
        ),
        Polygon::regular(
            "front triangle",
            3,
            colors::RED,
            Vec4::point(w * 0.55, h * 0.5, 0.2),
            0.0,
            Vec4::new(radius, radius, 1.0, 1.0),
        ),
        Polygon::regular(
            "pentagon",
            5,
            Vec3::new(255.0, 200.0, 0.0),
            Vec4::point(w * 0.3, h * 0.3, 0.5),
            10.0,
            Vec4::new(radius * 0.5, radius * 0.5, 1.0, 1.0),
        ),
    ]
}

fn save(image: &RgbImage, dir: &Path, name: &str) -> scanraster::Result<()> {
    let path = dir.join(name);
    image.save(&path)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> scanraster::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let settings = RenderSettings::default();
    let mut rasterizer = Rasterizer::with_settings(scene_3d(), settings);
    rasterizer.camera_mut().rotate_right(-5.0);
    rasterizer.camera_mut().translate_up(0.5);

    save(&rasterizer.render_scene(), &out_dir, "pinhole.png")?;

    rasterizer.set_render_mode(RenderMode::Perspective3D(Lens::fisheye()));
    save(&rasterizer.render_scene(), &out_dir, "fisheye.png")?;

    rasterizer.clear_scene();
    for polygon in scene_2d(settings.size) {
        rasterizer.add_polygon(polygon);
    }
    rasterizer.set_render_mode(RenderMode::Flat2D);
    save(&rasterizer.render_scene(), &out_dir, "flat.png")?;

    Ok(())
}
