use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SkillorbError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Drag-to-orbit camera on the desktop layouts.
pub struct OrbitOptions {
    /// Whether a drag on the scene orbits the camera.
    #[schemars(title = "Enable Orbit")]
    pub enabled: bool,
    /// Drag sensitivity. At 1.0 a drag across the full viewport height turns
    /// the camera one full revolution.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Camera auto-orbit rate; 1.0 is one revolution per minute.
    #[schemars(title = "Auto Orbit", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            rotate_speed: 0.4,
            auto_rotate_speed: 0.3,
        }
    }
}

impl OrbitOptions {
    /// Reject speeds that are not finite numbers.
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::OptionsParse`] naming the bad field.
    pub fn validate(&self) -> Result<(), SkillorbError> {
        for (name, value) in [
            ("rotate_speed", self.rotate_speed),
            ("auto_rotate_speed", self.auto_rotate_speed),
        ] {
            if !value.is_finite() {
                return Err(SkillorbError::OptionsParse(format!(
                    "orbit.{name} = {value} must be finite"
                )));
            }
        }
        Ok(())
    }
}
