//! Render backends — where the levels program actually runs.
//!
//! A backend compiles the per-channel map into a program resource owned by
//! one filter instance. The provided [`CpuBackend`] evaluates on the CPU via
//! `relevel-core`; a GPU host would implement [`RenderBackend`] over its own
//! device and upload a [`LevelsUniform`](relevel_core::LevelsUniform)
//! instead.

use relevel_core::{Frame, LevelsTransform, apply_levels};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("failed to build levels program: {0}")]
    ProgramBuild(String),
    #[error("render context unavailable")]
    ContextUnavailable,
}

/// A compiled levels program. Released by dropping; every acquisition is
/// paired with exactly one release, including the construction failure path.
pub trait LevelsProgram {
    /// Replace the transform consumed by subsequent frames.
    fn set_transform(&mut self, transform: LevelsTransform);

    /// Apply the current transform to one frame.
    ///
    /// Returns false when the rendering context cannot begin the frame; the
    /// frame must then be left untouched.
    fn process(&mut self, frame: &mut Frame) -> bool;
}

/// Factory for levels programs. Held by the host, consulted once per filter
/// instance at creation time.
pub trait RenderBackend {
    fn load_program(
        &self,
        transform: LevelsTransform,
    ) -> Result<Box<dyn LevelsProgram>, BackendError>;
}

/// CPU evaluation backend. Program acquisition cannot fail here; the
/// fallible signature exists for GPU backends whose shader compile can.
#[derive(Debug, Default)]
pub struct CpuBackend;

struct CpuProgram {
    transform: LevelsTransform,
}

impl LevelsProgram for CpuProgram {
    fn set_transform(&mut self, transform: LevelsTransform) {
        self.transform = transform;
    }

    fn process(&mut self, frame: &mut Frame) -> bool {
        apply_levels(frame, &self.transform);
        true
    }
}

impl RenderBackend for CpuBackend {
    fn load_program(
        &self,
        transform: LevelsTransform,
    ) -> Result<Box<dyn LevelsProgram>, BackendError> {
        Ok(Box::new(CpuProgram { transform }))
    }
}
