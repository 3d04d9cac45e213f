//! The levels transform: per-channel offset and scale derived from bounds.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::bounds::ChannelBounds;

/// Affine per-channel map stretching an input sub-range to full scale.
///
/// In normalized channel space the map is `out = (in - offset) * scale`,
/// equivalent to `out_255 = (in_255 - min) * 255 / (max - min)`. Recomputed
/// whenever bounds change and read by every frame render until the next
/// recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelsTransform {
    /// Per-channel black point, `min / 255`.
    pub offset: Vec3,
    /// Per-channel stretch factor, `255 / (max - min)`. Always positive.
    pub scale: Vec3,
}

impl LevelsTransform {
    /// The no-op transform produced by default bounds.
    pub const IDENTITY: Self = Self {
        offset: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Derive offset and scale from sanitized bounds.
    ///
    /// Pure and infallible: bounds construction already guarantees
    /// `max - min >= 1` per channel, so the scale is finite and positive
    /// for every input.
    pub fn compute(bounds: &ChannelBounds) -> Self {
        let offset = Vec3::new(
            bounds.red.min() as f32,
            bounds.green.min() as f32,
            bounds.blue.min() as f32,
        ) / 255.0;
        let scale = 255.0
            / Vec3::new(
                bounds.red.span() as f32,
                bounds.green.span() as f32,
                bounds.blue.span() as f32,
            );
        Self { offset, scale }
    }
}

impl Default for LevelsTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// GPU-compatible mirror of [`LevelsTransform`].
///
/// Layout matches a std140 uniform block with two `vec3` members (each
/// padded to 16 bytes), for hosts that run the levels map in a shader
/// instead of on the CPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LevelsUniform {
    pub offset: [f32; 3],
    pub _pad0: f32,
    pub scale: [f32; 3],
    pub _pad1: f32,
}

impl From<&LevelsTransform> for LevelsUniform {
    fn from(transform: &LevelsTransform) -> Self {
        Self {
            offset: transform.offset.to_array(),
            _pad0: 0.0,
            scale: transform.scale.to_array(),
            _pad1: 0.0,
        }
    }
}
