//! Crate-level error types.

use std::fmt;

/// Errors produced by the skillorb crate.
///
/// The interactive path (joystick, rotation, layout) has no failure modes;
/// only preset I/O and host integration can fail.
#[derive(Debug)]
pub enum SkillorbError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options JSON handed over by a web host could not be decoded.
    OptionsJson(serde_json::Error),
    /// The skill catalogue is empty, so there is nothing to lay out.
    EmptyCatalogue,
}

impl fmt::Display for SkillorbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::OptionsJson(e) => write!(f, "options JSON error: {e}"),
            Self::EmptyCatalogue => f.write_str("skill catalogue is empty"),
        }
    }
}

impl std::error::Error for SkillorbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsJson(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SkillorbError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SkillorbError {
    fn from(e: serde_json::Error) -> Self {
        Self::OptionsJson(e)
    }
}
