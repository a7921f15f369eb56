//! Color constants and conversions.
//!
//! Colors travel through the pipeline as [`Vec3`] with channels on a 0-255
//! scale and are only quantized to 8 bits when written to the raster.

use image::Rgb;

use crate::math::vec3::Vec3;

/// Highest value a channel may hold after clamping.
pub const MAX_INTENSITY: f32 = 255.0;

pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const WHITE: Vec3 = Vec3::new(255.0, 255.0, 255.0);
/// Returned when a texture lookup lands on a negative texel index.
pub const GRAY: Vec3 = Vec3::new(128.0, 128.0, 128.0);
pub const RED: Vec3 = Vec3::new(255.0, 0.0, 0.0);

/// Scales overflowing colors back into range, one channel at a time.
///
/// Red, then green, then blue: whenever a channel exceeds `max`, all three
/// channels are divided by `channel / max`. Each step leaves the checked
/// channel at exactly `max` and preserves the ratios between channels.
pub fn clamp_channels(color: Vec3, max: f32) -> Vec3 {
    let mut color = color;
    if color.x > max {
        color = color / (color.x / max);
        color.x = max;
    }
    if color.y > max {
        color = color / (color.y / max);
        color.y = max;
    }
    if color.z > max {
        color = color / (color.z / max);
        color.z = max;
    }
    color
}

/// Quantizes a clamped color to the nearest 8-bit value. NaN becomes 0.
#[inline]
pub fn to_rgb(color: Vec3) -> Rgb<u8> {
    Rgb([
        color.x.round() as u8,
        color.y.round() as u8,
        color.z.round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn in_range_color_is_untouched() {
        let color = Vec3::new(10.0, 200.0, 255.0);
        assert_eq!(clamp_channels(color, MAX_INTENSITY), color);
    }

    #[test]
    fn red_overflow_scales_all_channels() {
        let clamped = clamp_channels(Vec3::new(300.0, 120.0, 40.0), MAX_INTENSITY);
        let factor = 300.0 / 255.0;
        assert_eq!(clamped.x, 255.0);
        assert_relative_eq!(clamped.y, 120.0 / factor, epsilon = 1e-4);
        assert_relative_eq!(clamped.z, 40.0 / factor, epsilon = 1e-4);
        assert_eq!(to_rgb(clamped), Rgb([255, 102, 34]));
    }

    #[test]
    fn sequential_clamp_matches_joint_rescale() {
        // Two channels overflow: red is handled first, then green still
        // exceeds the limit and gets its own pass.
        let color = Vec3::new(300.0, 400.0, 100.0);
        let after_red = color / (300.0 / 255.0);
        assert!(after_red.y > MAX_INTENSITY);

        let sequential = clamp_channels(color, MAX_INTENSITY);
        let joint = color / (400.0 / MAX_INTENSITY);
        assert_relative_eq!(sequential.x, joint.x, epsilon = 1e-3);
        assert_relative_eq!(sequential.y, joint.y, epsilon = 1e-3);
        assert_relative_eq!(sequential.z, joint.z, epsilon = 1e-3);
        assert_relative_eq!(sequential.y, 255.0, epsilon = 1e-4);
    }

    #[test]
    fn later_channel_absorbs_earlier_overflow() {
        // Red overflows first, but blue is the brightest channel, so the final
        // pass on blue also pulls red below the limit.
        let clamped = clamp_channels(Vec3::new(400.0, 300.0, 500.0), MAX_INTENSITY);
        assert_relative_eq!(clamped.z, 255.0, epsilon = 1e-4);
        assert_relative_eq!(clamped.x, 204.0, epsilon = 1e-3);
        assert_relative_eq!(clamped.y, 153.0, epsilon = 1e-3);
    }

    #[test]
    fn quantization_rounds_and_saturates() {
        assert_eq!(to_rgb(Vec3::new(254.6, 300.0, f32::NAN)), Rgb([255, 255, 0]));
    }
}
