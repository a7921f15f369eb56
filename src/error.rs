//! Errors raised while building scene inputs or saving output.
//!
//! Rendering itself never fails; every degenerate case during a frame is
//! resolved by a fixed policy instead of an error.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Reading, decoding or encoding an image failed.
    Image(image::ImageError),
    /// A raw RGB buffer does not describe a `width` x `height` image.
    TextureSize { width: u32, height: u32, len: usize },
    /// Per-vertex attribute lists have different lengths.
    AttributeMismatch { positions: usize, colors: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Image(e) => write!(f, "image error: {e}"),
            Error::TextureSize { width, height, len } => write!(
                f,
                "texture of {width}x{height} needs {} bytes of RGB data, got {len}",
                *width as usize * *height as usize * 3
            ),
            Error::AttributeMismatch { positions, colors } => write!(
                f,
                "polygon has {positions} positions but {colors} colors"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
