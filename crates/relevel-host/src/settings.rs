//! Filter settings as delivered by the host settings store.

use relevel_core::ChannelBounds;
use serde::{Deserialize, Serialize};

/// The six integer fields a host settings object carries for this filter.
///
/// Fields are i64 because a settings store places no bounds on what a user
/// or a hand-edited profile can deliver; sanitization happens when the
/// fields are converted into [`ChannelBounds`]. Missing fields deserialize
/// to the declared defaults (the identity transform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub red_min: i64,
    pub red_max: i64,
    pub green_min: i64,
    pub green_max: i64,
    pub blue_min: i64,
    pub blue_max: i64,
}

impl Default for FilterSettings {
    /// Declared defaults: min 0, max 255 per channel — the identity map.
    fn default() -> Self {
        Self {
            red_min: 0,
            red_max: 255,
            green_min: 0,
            green_max: 255,
            blue_min: 0,
            blue_max: 255,
        }
    }
}

impl FilterSettings {
    /// Sanitize the raw fields into validated channel bounds.
    pub fn bounds(&self) -> ChannelBounds {
        ChannelBounds::from_raw(
            self.red_min,
            self.red_max,
            self.green_min,
            self.green_max,
            self.blue_min,
            self.blue_max,
        )
    }
}
