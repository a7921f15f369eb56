use crate::math::vec4::Vec4;
use crate::settings::RasterSize;

/// Integer pixel bounds of a triangle, clamped to the raster.
///
/// Iteration treats `x_left..x_right` and `y_upper..y_lower` as half-open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_left: i32,
    pub x_right: i32,
    pub y_upper: i32,
    pub y_lower: i32,
}

impl BoundingBox {
    /// Bounds of three pixel-space positions.
    ///
    /// Extents are rounded up to whole pixels, then clamped: the left edge
    /// never goes below 1, an upper edge below 1 snaps to 0, and the right and
    /// lower edges stop at the last column/row.
    pub fn from_positions(positions: &[Vec4; 3], size: RasterSize) -> Self {
        let [p0, p1, p2] = positions;

        let mut x_left = p0.x.min(p1.x).min(p2.x).ceil() as i32;
        let mut x_right = p0.x.max(p1.x).max(p2.x).ceil() as i32;
        let mut y_upper = p0.y.min(p1.y).min(p2.y).ceil() as i32;
        let mut y_lower = p0.y.max(p1.y).max(p2.y).ceil() as i32;

        let max_x = size.width as i32 - 1;
        let max_y = size.height as i32 - 1;

        if x_left < 1 {
            x_left = 1;
        }
        if x_right > max_x {
            x_right = max_x;
        }
        if y_upper < 1 {
            y_upper = 0;
        }
        if y_lower > max_y {
            y_lower = max_y;
        }

        Self {
            x_left,
            x_right,
            y_upper,
            y_lower,
        }
    }
}

/// Three indices into the owning polygon's vertex list plus cached bounds.
///
/// `bounds` is only meaningful for the positions it was computed from. The
/// renderer never reads it; each frame computes bounds from the projected
/// positions instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub bounds: BoundingBox,
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self {
            indices,
            bounds: BoundingBox::default(),
        }
    }
}
