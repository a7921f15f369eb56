//! Scene geometry: vertices, triangles, polygons and the interpolation
//! machinery the rasterizer runs per fragment.

pub mod interp;
mod polygon;
mod triangle;
mod vertex;

pub use interp::DepthSample;
pub use polygon::Polygon;
pub use triangle::{BoundingBox, Triangle};
pub use vertex::Vertex;
