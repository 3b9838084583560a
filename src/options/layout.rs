use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper (exclusive) viewport widths of each device tier, in CSS pixels.
///
/// Anything at or above `small_desktop` is a full desktop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Breakpoints", inline)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths below this are phones.
    pub mobile: f32,
    /// Widths below this are tablets.
    pub tablet: f32,
    /// Widths below this are laptops.
    pub laptop: f32,
    /// Widths below this are small desktops.
    pub small_desktop: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 640.0,
            tablet: 1024.0,
            laptop: 1200.0,
            small_desktop: 1440.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Device classification and layout transition timing.
pub struct LayoutOptions {
    /// Tier breakpoints.
    pub breakpoints: Breakpoints,
    /// Quiet period after the last resize before the tier is re-evaluated.
    #[schemars(title = "Resize Debounce (ms)", range(min = 0, max = 1000))]
    pub resize_debounce_ms: u64,
    /// Columns of the flat tablet grid.
    #[schemars(title = "Grid Columns", range(min = 1, max = 6))]
    pub grid_columns: u32,
    /// Cross-fade duration when the tier changes, in seconds.
    #[schemars(skip)]
    pub tier_fade_secs: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            resize_debounce_ms: 150,
            grid_columns: 3,
            tier_fade_secs: 0.2,
        }
    }
}
