//! Process-wide source registration and module lifecycle.
//!
//! Mirrors a host plugin's load/unload hooks: loading registers the filter
//! descriptors this module provides, unloading clears them. This is the only
//! shared state in the crate and is scoped strictly to registration —
//! filter instances themselves are single-owner.

use parking_lot::Mutex;

use crate::backend::RenderBackend;
use crate::filter::{FilterError, LevelsFilter, VideoFilter};
use crate::settings::FilterSettings;

/// Descriptor the host stores for each registered source type. The host
/// constructs instances through `create` and only ever holds the returned
/// interface, never a concrete filter type.
#[derive(Clone, Copy)]
pub struct SourceInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub create:
        fn(&FilterSettings, &dyn RenderBackend) -> Result<Box<dyn VideoFilter>, FilterError>,
}

static REGISTRY: Mutex<Vec<SourceInfo>> = Mutex::new(Vec::new());

fn create_levels_filter(
    settings: &FilterSettings,
    backend: &dyn RenderBackend,
) -> Result<Box<dyn VideoFilter>, FilterError> {
    Ok(Box::new(LevelsFilter::create(settings, backend)?))
}

/// Register a source descriptor. Re-registering an id replaces the previous
/// descriptor, so a repeated module load stays idempotent.
pub fn register_source(info: SourceInfo) {
    let mut registry = REGISTRY.lock();
    registry.retain(|existing| existing.id != info.id);
    registry.push(info);
}

/// Look up a registered source descriptor by id.
pub fn find_source(id: &str) -> Option<SourceInfo> {
    REGISTRY.lock().iter().find(|info| info.id == id).copied()
}

/// Module load hook: register the RGB levels filter.
pub fn module_load() {
    register_source(SourceInfo {
        id: LevelsFilter::ID,
        name: LevelsFilter::NAME,
        create: create_levels_filter,
    });
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "relevel module loaded"
    );
}

/// Module unload hook: drop all registrations.
pub fn module_unload() {
    REGISTRY.lock().clear();
    tracing::info!("relevel module unloaded");
}
