//! Relevel Host — adapter layer binding the levels core to a video host.
//!
//! Provides the settings object delivered by a host settings store, the
//! slider descriptors a configuration UI consumes, the polymorphic
//! [`VideoFilter`] interface the host holds, the concrete RGB levels filter
//! with its render-program lifecycle, and process-wide source registration.
//!
//! The host serializes settings updates and render calls on one instance;
//! nothing here locks except the module-scope registry.

pub mod backend;
pub mod filter;
pub mod properties;
pub mod registry;
pub mod settings;

// Re-exports for downstream crates.
pub use backend::{BackendError, CpuBackend, LevelsProgram, RenderBackend};
pub use filter::{FilterError, LevelsFilter, RenderStatus, VideoFilter};
pub use properties::{SliderProperty, levels_properties};
pub use registry::{SourceInfo, module_load, module_unload};
pub use settings::FilterSettings;
