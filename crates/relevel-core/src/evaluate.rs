//! Per-pixel levels evaluation.
//!
//! A GPU shader consuming [`LevelsUniform`](crate::transform::LevelsUniform)
//! mirrors [`evaluate_pixel`] exactly; CPU hosts call [`apply_levels`] on the
//! whole frame.

use glam::Vec3;

use crate::frame::Frame;
use crate::transform::LevelsTransform;

/// Remap one RGBA pixel: `c' = clamp((c - offset) * scale, 0, 1)` per RGB
/// channel. Alpha passes through untouched.
pub fn evaluate_pixel(rgba: [f32; 4], transform: &LevelsTransform) -> [f32; 4] {
    let rgb = Vec3::new(rgba[0], rgba[1], rgba[2]);
    let out = ((rgb - transform.offset) * transform.scale).clamp(Vec3::ZERO, Vec3::ONE);
    [out.x, out.y, out.z, rgba[3]]
}

/// Apply the transform to every pixel of the frame, in place.
///
/// Each pixel is visited exactly once; pixels are independent, so ordering
/// carries no meaning.
pub fn apply_levels(frame: &mut Frame, transform: &LevelsTransform) {
    for px in &mut frame.pixels {
        *px = evaluate_pixel(*px, transform);
    }
}
