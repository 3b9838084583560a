use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SkillorbError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Joystick", inline)]
#[serde(default)]
/// Geometry and momentum parameters of the rotation joystick.
pub struct JoystickOptions {
    /// Radius the knob offset is clamped to, in CSS pixels.
    #[schemars(title = "Travel Radius", range(min = 8.0, max = 96.0), extend("step" = 1.0))]
    pub radius: f32,
    /// Angular velocity produced by a full-right deflection.
    #[schemars(title = "Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub sensitivity: f32,
    /// Per-frame velocity multiplier once the drag ends.
    #[schemars(title = "Momentum", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub velocity_decay: f32,
    /// Per-frame knob offset multiplier once the drag ends.
    #[schemars(title = "Knob Return", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub knob_decay: f32,
    /// Velocity magnitude below which the coast counts as finished.
    #[schemars(skip)]
    pub velocity_threshold: f32,
    /// Knob displacement (per axis) below which it counts as centred.
    #[schemars(skip)]
    pub knob_threshold: f32,
}

impl Default for JoystickOptions {
    fn default() -> Self {
        Self {
            radius: 28.0,
            sensitivity: 0.008,
            velocity_decay: 0.98,
            knob_decay: 0.92,
            velocity_threshold: 0.0005,
            knob_threshold: 0.3,
        }
    }
}

impl JoystickOptions {
    /// Reject values that would break the clamp or stop the coast from ever
    /// finishing.
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::OptionsParse`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SkillorbError> {
        let positive = [
            ("radius", self.radius),
            ("velocity_threshold", self.velocity_threshold),
            ("knob_threshold", self.knob_threshold),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(name, value, "must be positive"));
            }
        }
        if !(self.sensitivity.is_finite() && self.sensitivity >= 0.0) {
            return Err(invalid(
                "sensitivity",
                self.sensitivity,
                "must not be negative",
            ));
        }
        for (name, value) in [
            ("velocity_decay", self.velocity_decay),
            ("knob_decay", self.knob_decay),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(invalid(name, value, "must be in [0, 1)"));
            }
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f32, rule: &str) -> SkillorbError {
    SkillorbError::OptionsParse(format!("joystick.{name} = {value} {rule}"))
}
