//! Relevel Core — domain layer for the RGB levels filter.
//!
//! This crate contains the channel-bounds model, the levels transform math,
//! the frame representation, and per-pixel evaluation. No host or framework
//! dependencies.

pub mod bounds;
pub mod evaluate;
pub mod frame;
pub mod transform;

// Re-exports for convenience.
pub use bounds::{ChannelBounds, ChannelRange};
pub use evaluate::{apply_levels, evaluate_pixel};
pub use frame::{Frame, FrameError};
pub use transform::{LevelsTransform, LevelsUniform};
