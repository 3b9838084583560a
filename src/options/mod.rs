//! Centralized interaction/layout options with TOML preset support.
//!
//! Every tuned constant (joystick feel, rotation rates, breakpoints, star
//! field density) lives here instead of being baked into the code. The values
//! were chosen by eye, so they are presets rather than physics. Options
//! serialize to/from TOML so alternative "feels" can be kept side by side in a
//! preset directory.

mod joystick;
mod layout;
mod orbit;
mod rotation;
mod stars;

use std::path::Path;

pub use joystick::JoystickOptions;
pub use layout::{Breakpoints, LayoutOptions};
pub use orbit::OrbitOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use stars::{StarFieldParams, StarOptions};

use crate::error::SkillorbError;
use crate::skills::{default_catalogue, Skill};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[joystick]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Joystick geometry and momentum decay.
    pub joystick: JoystickOptions,
    /// Scene rotation rates.
    pub rotation: RotationOptions,
    /// Desktop drag-to-orbit camera.
    pub orbit: OrbitOptions,
    /// Device breakpoints and layout timing.
    pub layout: LayoutOptions,
    /// Background star field.
    pub stars: StarOptions,
    /// Skill catalogue shown on the ring.
    #[schemars(skip)]
    pub skills: Vec<Skill>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            joystick: JoystickOptions::default(),
            rotation: RotationOptions::default(),
            orbit: OrbitOptions::default(),
            layout: LayoutOptions::default(),
            stars: StarOptions::default(),
            skills: default_catalogue(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::OptionsParse`] on malformed TOML or
    /// out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, SkillorbError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SkillorbError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from a JSON string (the web host's format).
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::OptionsJson`] on malformed JSON and
    /// [`SkillorbError::OptionsParse`] on out-of-range values.
    pub fn from_json_str(content: &str) -> Result<Self, SkillorbError> {
        let options: Self = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Check value ranges the interactive code relies on.
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::OptionsParse`] naming the bad field.
    pub fn validate(&self) -> Result<(), SkillorbError> {
        self.joystick.validate()?;
        self.orbit.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::Io`] if the file cannot be read, otherwise
    /// as [`Options::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, SkillorbError> {
        let content =
            std::fs::read_to_string(path).map_err(SkillorbError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options preset {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), SkillorbError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillorbError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SkillorbError::Io)?;
        }
        std::fs::write(path, content).map_err(SkillorbError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
