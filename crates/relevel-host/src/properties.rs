//! Slider descriptors exposed to the configuration UI.
//!
//! The core does not implement any UI; it only declares the legal domain
//! each slider may produce.

/// One integer slider the host UI should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderProperty {
    /// Settings field this slider writes.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

const fn min_slider(key: &'static str, label: &'static str) -> SliderProperty {
    SliderProperty {
        key,
        label,
        min: 0,
        max: 254,
        step: 1,
    }
}

const fn max_slider(key: &'static str, label: &'static str) -> SliderProperty {
    SliderProperty {
        key,
        label,
        min: 1,
        max: 255,
        step: 1,
    }
}

/// The six sliders of the RGB levels filter, red/green/blue × min/max.
pub fn levels_properties() -> Vec<SliderProperty> {
    vec![
        min_slider("red_min", "Red min"),
        max_slider("red_max", "Red max"),
        min_slider("green_min", "Green min"),
        max_slider("green_max", "Green max"),
        min_slider("blue_min", "Blue min"),
        max_slider("blue_max", "Blue max"),
    ]
}
