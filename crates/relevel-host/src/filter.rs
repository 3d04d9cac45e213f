//! The host-facing filter interface and the RGB levels filter instance.

use relevel_core::{Frame, LevelsTransform};

use crate::backend::{BackendError, LevelsProgram, RenderBackend};
use crate::properties::{SliderProperty, levels_properties};
use crate::settings::FilterSettings;

/// Per-frame render outcome. `Skipped` is a soft failure: the frame was left
/// untouched because the rendering context could not begin it. It never
/// escalates beyond the single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered,
    Skipped,
}

/// Errors fatal to filter construction. Nothing else crosses the instance
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("levels program acquisition failed: {0}")]
    ResourceAcquisition(#[from] BackendError),
}

/// Interface the host holds for each filter stage. The host never sees the
/// concrete type; teardown is `Drop`, which releases the program resource.
///
/// The host serializes `update` and `render` on one instance, so an updated
/// transform takes effect from the next render call.
pub trait VideoFilter {
    /// Display name for the host's source list.
    fn name(&self) -> &'static str;

    /// React to a changed settings object.
    fn update(&mut self, settings: &FilterSettings);

    /// Transform one frame in place.
    fn render(&mut self, frame: &mut Frame) -> RenderStatus;

    /// Sliders the configuration UI should present.
    fn properties(&self) -> Vec<SliderProperty>;

    /// Settings the host should seed a fresh source with.
    fn defaults(&self) -> FilterSettings;
}

/// The RGB levels filter: remaps each color channel from `[min, max]` to
/// full scale, clipping out-of-range values.
pub struct LevelsFilter {
    program: Box<dyn LevelsProgram>,
    transform: LevelsTransform,
    context_lost: bool,
}

impl LevelsFilter {
    pub const ID: &'static str = "rgb_levels_filter";
    pub const NAME: &'static str = "RGB levels";

    /// Acquire the program resource and build a ready instance.
    ///
    /// On acquisition failure no partial instance escapes: anything the
    /// backend allocated before failing is released on its error path, and
    /// the error propagates to the host as a construction failure.
    pub fn create(
        settings: &FilterSettings,
        backend: &dyn RenderBackend,
    ) -> Result<Self, FilterError> {
        let transform = LevelsTransform::compute(&settings.bounds());
        let program = backend.load_program(transform)?;
        tracing::info!(filter = Self::ID, "levels filter created");
        Ok(Self {
            program,
            transform,
            context_lost: false,
        })
    }
}

impl VideoFilter for LevelsFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn update(&mut self, settings: &FilterSettings) {
        self.transform = LevelsTransform::compute(&settings.bounds());
        self.program.set_transform(self.transform);
        tracing::debug!(
            offset = ?self.transform.offset,
            scale = ?self.transform.scale,
            "levels transform updated"
        );
    }

    fn render(&mut self, frame: &mut Frame) -> RenderStatus {
        if self.program.process(frame) {
            self.context_lost = false;
            RenderStatus::Rendered
        } else {
            // Warn once per loss, not once per frame.
            if !self.context_lost {
                tracing::warn!(filter = Self::ID, "render context unavailable, skipping frames");
                self.context_lost = true;
            }
            RenderStatus::Skipped
        }
    }

    fn properties(&self) -> Vec<SliderProperty> {
        levels_properties()
    }

    fn defaults(&self) -> FilterSettings {
        FilterSettings::default()
    }
}
