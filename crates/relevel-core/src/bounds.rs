//! Per-channel input ranges for the levels stretch.
//!
//! A host settings store can deliver any integer for a min/max field, so the
//! raw values are sanitized here rather than rejected: `min` is clamped into
//! its slider domain and `max` is floored to `min + 1`. Out-of-order input
//! (`max <= min`) is auto-repaired on purpose — levels adjustments are
//! visually continuous and a hard validation error would be worse for the
//! user than a silently steep stretch.

use serde::{Deserialize, Serialize};

/// Largest legal value for a channel minimum. One below full scale so the
/// repaired maximum always fits in 8-bit range.
pub const MIN_CEILING: i64 = 254;

/// Full-scale channel value.
pub const FULL_SCALE: i64 = 255;

/// Sanitized (min, max) input range for one color channel.
///
/// Invariant: `max > min`, always. Construction enforces it, so a
/// [`LevelsTransform`](crate::transform::LevelsTransform) built from a range
/// never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRange {
    min: u32,
    max: u32,
}

impl ChannelRange {
    /// Sanitize a raw (min, max) pair from a settings field.
    ///
    /// `raw_min` is clamped into `[0, 254]`. The effective maximum is
    /// `max(min + 1, raw_max)`, computed in i64 so negative or oversized
    /// input never wraps.
    pub fn new(raw_min: i64, raw_max: i64) -> Self {
        let min = raw_min.clamp(0, MIN_CEILING);
        let max = raw_max.max(min + 1).min(i64::from(u32::MAX));
        Self {
            min: min as u32,
            max: max as u32,
        }
    }

    /// Identity range: the full `[0, 255]` input domain.
    pub const fn identity() -> Self {
        Self { min: 0, max: FULL_SCALE as u32 }
    }

    /// Channel minimum, in `[0, 254]`.
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Effective channel maximum, always `> min`.
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Width of the input range, always `>= 1`.
    pub const fn span(&self) -> u32 {
        self.max - self.min
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self::identity()
    }
}

/// Three independent channel ranges, one per color channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBounds {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

impl ChannelBounds {
    /// Build bounds from six raw settings integers, sanitizing each pair.
    pub fn from_raw(
        red_min: i64,
        red_max: i64,
        green_min: i64,
        green_max: i64,
        blue_min: i64,
        blue_max: i64,
    ) -> Self {
        Self {
            red: ChannelRange::new(red_min, red_max),
            green: ChannelRange::new(green_min, green_max),
            blue: ChannelRange::new(blue_min, blue_max),
        }
    }

    /// True when every channel covers the full input domain.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
