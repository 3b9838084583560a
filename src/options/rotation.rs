use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Rates that turn the skill ring.
pub struct RotationOptions {
    /// Radians added per frame for each unit of joystick velocity.
    #[schemars(title = "Manual Speed", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub manual_multiplier: f32,
    /// Velocity magnitude treated as "no manual input".
    #[schemars(skip)]
    pub idle_threshold: f32,
    /// Idle auto-rotation rate on touch layouts, in radians per second.
    #[schemars(title = "Idle Spin", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub auto_rotate_speed: f32,
    /// Turntable rate on desktop layouts, in radians per second.
    #[schemars(title = "Turntable Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub turntable_speed: f32,
    /// Minimum spacing between accepted joystick velocity updates, in ms.
    #[schemars(skip)]
    pub throttle_ms: u64,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            manual_multiplier: 8.0,
            idle_threshold: 0.0001,
            auto_rotate_speed: 0.1,
            turntable_speed: 0.08,
            throttle_ms: 8,
        }
    }
}
