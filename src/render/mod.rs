//! Frame rendering internals: edges, scan conversion, shading and output.
//!
//! Every render mode goes through [`draw_triangle`]; modes differ only in how
//! vertices reach pixel space and which [`FragmentShader`] colors the result.

pub mod edge;
pub mod framebuffer;
pub mod lens;
pub mod scan;
pub mod shader;

pub use edge::Edge;
pub use framebuffer::FrameBuffer;
pub use lens::Projector;
pub use shader::{FlatShader, FragmentShader, PerspectiveShader};

use crate::colors;
use crate::geometry::interp::{self, AREA_EPSILON};
use crate::geometry::BoundingBox;
use crate::math::vec4::Vec4;

/// Rasterizes one pixel-space triangle into `fb`.
///
/// `screen` holds the pixel-space corner positions; the shader owns whatever
/// per-vertex data it needs. Returns the number of pixels written.
pub fn draw_triangle<S: FragmentShader>(
    fb: &mut FrameBuffer,
    screen: &[Vec4; 3],
    shader: &S,
) -> usize {
    let [a, b, c] = *screen;
    if interp::tri_area_2d(a, b, c) <= AREA_EPSILON {
        log::trace!("skipping degenerate triangle {:?}", screen);
        return 0;
    }

    let size = fb.size();
    let bounds = BoundingBox::from_positions(screen, size);
    let edges = Edge::triangle(screen);

    let mut written = 0;
    scan::scan_triangle(&edges, bounds, size, |x, y| {
        let point = Vec4::point(x as f32, y as f32, 0.0);
        let Some(weights) = interp::barycentric_2d(screen, point) else {
            return;
        };
        let Some(sample) = shader.depth(&weights) else {
            return;
        };
        if !fb.test_and_set_depth(x, y, sample.depth) {
            return;
        }

        let color = colors::clamp_channels(shader.color(&weights, &sample), colors::MAX_INTENSITY);
        fb.set_pixel(x, y, color);
        written += 1;
    });
    written
}
