//! Triangle edges as 2D segments in pixel space.
//!
//! Scan conversion asks each edge where it crosses a horizontal scanline.
//! Two cases are special:
//!
//! - An edge lying along the scanline reports no crossing. Its endpoints are
//!   shared with the two neighbouring edges, which already report them.
//! - A vertical edge stores `f32::MAX` as its slope, so the crossing formula
//!   `x0 - (y0 - y) / slope` collapses to `x0`.

use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;

/// Tolerance for treating coordinates as equal.
pub const EDGE_EPSILON: f32 = 2.0 * f32::EPSILON;

/// A directed segment with its slope precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    start: Vec2,
    end: Vec2,
    slope: f32,
}

impl Default for Edge {
    /// Unit segment along +X from the origin.
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::new(1.0, 0.0))
    }
}

impl Edge {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        Self {
            start,
            end,
            slope: Self::slope_of(dx, dy),
        }
    }

    /// Builds the edge between the XY parts of two positions.
    pub fn between(start: Vec4, end: Vec4) -> Self {
        Self::new(start.xy(), end.xy())
    }

    /// The three edges `v0->v1`, `v1->v2`, `v2->v0` of a triangle.
    pub fn triangle(positions: &[Vec4; 3]) -> [Edge; 3] {
        let [v0, v1, v2] = *positions;
        [
            Self::between(v0, v1),
            Self::between(v1, v2),
            Self::between(v2, v0),
        ]
    }

    fn slope_of(dx: f32, dy: f32) -> f32 {
        // A point, not a segment. Keep slope at 0.
        if dx.abs() < EDGE_EPSILON && dy.abs() < EDGE_EPSILON {
            return 0.0;
        }
        if dx.abs() < EDGE_EPSILON {
            return f32::MAX;
        }
        dy / dx
    }

    pub fn slope(&self) -> f32 {
        self.slope
    }

    /// X coordinate where the edge crosses the horizontal line at `y`.
    ///
    /// Returns `None` when both endpoints are strictly above or strictly below
    /// the line, or when the edge lies on it.
    pub fn intersection(&self, y: f32) -> Option<f32> {
        let (y0, y1) = (self.start.y, self.end.y);

        if (y0 > y && y1 > y) || (y0 < y && y1 < y) {
            return None;
        }

        if (y0 - y).abs() < EDGE_EPSILON && (y1 - y).abs() < EDGE_EPSILON {
            return None;
        }

        Some(self.start.x - (y0 - y) / self.slope)
    }
}
