//! Scan conversion shared by every render mode.
//!
//! # Algorithm Overview
//!
//! For each integer scanline `y` inside the triangle's bounds:
//!
//! 1. Ask the three edges where they cross `y`
//! 2. Keep the valid crossings; the leftmost is where the span is entered,
//!    the rightmost is where it is exited
//! 3. Walk the bounded columns and report every `x` with `enter <= x <= exit`
//!
//! ```text
//!          v0
//!          /\
//!   y --- x----x ---     enter/exit from the two crossing edges
//!        /      \
//!       /________\
//!     v1          v2
//! ```
//!
//! Pixels are sampled at their integer coordinates (no half-pixel offset).
//! Rows run over `[y_upper, y_lower)` and columns over `[x_left, x_right)`,
//! both additionally capped by the raster size.

use crate::geometry::BoundingBox;
use crate::settings::RasterSize;

use super::edge::Edge;

/// Crossings of all three edges with the scanline at `y`.
pub fn crossings(edges: &[Edge; 3], y: f32) -> impl Iterator<Item = f32> + '_ {
    edges.iter().filter_map(move |edge| edge.intersection(y))
}

/// The `(enter, exit)` span of the triangle on scanline `y`.
///
/// A vertex lying on the scanline is reported by both of its edges, so three
/// crossings can occur; the span always runs from the smallest to the largest.
/// A single crossing gives a one-point span.
pub fn span(edges: &[Edge; 3], y: f32) -> Option<(f32, f32)> {
    crossings(edges, y).fold(None, |span, x| match span {
        None => Some((x, x)),
        Some((enter, exit)) => Some((enter.min(x), exit.max(x))),
    })
}

/// Calls `plot(x, y)` for every pixel covered by the triangle bounded by `edges`.
pub fn scan_triangle<F>(edges: &[Edge; 3], bounds: BoundingBox, size: RasterSize, mut plot: F)
where
    F: FnMut(u32, u32),
{
    let y_end = bounds.y_lower.min(size.height as i32);
    let x_end = bounds.x_right.min(size.width as i32);

    for y in bounds.y_upper.max(0)..y_end {
        let Some((enter, exit)) = span(edges, y as f32) else {
            continue;
        };

        for x in bounds.x_left.max(0)..x_end {
            let px = x as f32;
            if px >= enter && px <= exit {
                plot(x as u32, y as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::math::vec4::Vec4;

    fn triangle() -> [Vec4; 3] {
        [
            Vec4::point(20.0, 10.5, 0.0),
            Vec4::point(40.0, 30.5, 0.0),
            Vec4::point(5.0, 40.5, 0.0),
        ]
    }

    #[test]
    fn scanlines_cross_zero_or_two_edges() {
        let edges = Edge::triangle(&triangle());
        // Vertices sit on half-pixel rows, so integer scanlines never touch one.
        for y in 0..60 {
            let count = crossings(&edges, y as f32).count();
            assert!(count == 0 || count == 2, "scanline {y} had {count} crossings");
            let inside = (11..=40).contains(&y);
            assert_eq!(count == 2, inside, "scanline {y}");
        }
    }

    #[test]
    fn span_is_ordered() {
        let edges = Edge::triangle(&triangle());
        let (enter, exit) = span(&edges, 20.0).unwrap();
        assert!(enter < exit);
        assert!(span(&edges, 5.0).is_none());
    }

    #[test]
    fn vertex_on_scanline_collapses_duplicate_crossing() {
        let tri = [
            Vec4::point(10.0, 0.0, 0.0),
            Vec4::point(20.0, 10.0, 0.0),
            Vec4::point(0.0, 20.0, 0.0),
        ];
        let edges = Edge::triangle(&tri);
        assert_eq!(crossings(&edges, 10.0).count(), 3);
        let (enter, exit) = span(&edges, 10.0).unwrap();
        assert_eq!(enter, 5.0);
        assert_eq!(exit, 20.0);
    }

    #[test]
    fn row_through_middle_vertex_spans_all_crossings() {
        let tri = [
            Vec4::point(10.0, 0.0, 0.0),
            Vec4::point(20.0, 10.0, 0.0),
            Vec4::point(0.0, 20.0, 0.0),
        ];
        let edges = Edge::triangle(&tri);

        // The first two crossings are both the shared vertex at x = 20.
        let first_two: Vec<f32> = crossings(&edges, 10.0).take(2).collect();
        assert_eq!(first_two, vec![20.0, 20.0]);

        // The span still covers the whole row of the triangle.
        let size = RasterSize::square(32);
        let bounds = BoundingBox::from_positions(&tri, size);
        let mut row = Vec::new();
        scan_triangle(&edges, bounds, size, |x, y| {
            if y == 10 {
                row.push(x);
            }
        });
        assert_eq!(row, (5..20).collect::<Vec<u32>>());
    }

    #[test]
    fn single_crossing_paints_one_pixel() {
        let edges = [
            Edge::new(Vec2::new(6.0, 0.0), Vec2::new(6.0, 10.0)),
            Edge::new(Vec2::new(0.0, 20.0), Vec2::new(9.0, 20.0)),
            Edge::new(Vec2::new(0.0, 30.0), Vec2::new(9.0, 40.0)),
        ];
        assert_eq!(span(&edges, 5.0), Some((6.0, 6.0)));

        let bounds = BoundingBox {
            x_left: 1,
            x_right: 12,
            y_upper: 5,
            y_lower: 6,
        };
        let mut pixels = Vec::new();
        scan_triangle(&edges, bounds, RasterSize::square(16), |x, y| pixels.push((x, y)));
        assert_eq!(pixels, vec![(6, 5)]);
    }

    #[test]
    fn flat_top_edge_does_not_count() {
        let tri = [
            Vec4::point(0.0, 5.0, 0.0),
            Vec4::point(10.0, 5.0, 0.0),
            Vec4::point(5.0, 15.0, 0.0),
        ];
        let edges = Edge::triangle(&tri);
        assert_eq!(crossings(&edges, 5.0).count(), 2);
        assert_eq!(span(&edges, 5.0), Some((0.0, 10.0)));
    }

    #[test]
    fn plotted_pixels_stay_inside_bounds_and_triangle() {
        let tri = triangle();
        let size = RasterSize::square(64);
        let bounds = BoundingBox::from_positions(&tri, size);
        let edges = Edge::triangle(&tri);

        let mut pixels = Vec::new();
        scan_triangle(&edges, bounds, size, |x, y| pixels.push((x, y)));

        assert!(!pixels.is_empty());
        for &(x, y) in &pixels {
            assert!((x as i32) >= bounds.x_left && (x as i32) < bounds.x_right);
            assert!((y as i32) >= bounds.y_upper && (y as i32) < bounds.y_lower);
            let (enter, exit) = span(&edges, y as f32).unwrap();
            assert!(x as f32 >= enter && x as f32 <= exit);
        }
        // A pixel well inside the triangle is covered.
        assert!(pixels.contains(&(20, 25)));
    }

    #[test]
    fn scan_is_capped_by_raster() {
        let tri = [
            Vec4::point(-100.0, -100.0, 0.0),
            Vec4::point(500.0, -100.0, 0.0),
            Vec4::point(-100.0, 500.0, 0.0),
        ];
        let size = RasterSize::square(16);
        let bounds = BoundingBox::from_positions(&tri, size);
        let edges = Edge::triangle(&tri);

        let mut count = 0;
        scan_triangle(&edges, bounds, size, |x, y| {
            assert!(x < 16 && y < 16);
            count += 1;
        });
        // Columns 1..15 on rows 0..15.
        assert_eq!(count, 14 * 15);
    }
}
