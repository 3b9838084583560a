use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of one star shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct StarFieldParams {
    /// Inner radius of the shell.
    pub radius: f32,
    /// Shell thickness beyond `radius`.
    pub depth: f32,
    /// Number of stars.
    pub count: u32,
    /// Size multiplier.
    pub factor: f32,
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 200,
            factor: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stars", inline)]
#[serde(default)]
/// Background star field per layout family.
pub struct StarOptions {
    /// Sparse field used on phones.
    pub mobile: StarFieldParams,
    /// Denser field used on 3D desktop layouts.
    pub desktop: StarFieldParams,
    /// RNG seed so the sky is stable across reloads.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for StarOptions {
    fn default() -> Self {
        Self {
            mobile: StarFieldParams {
                radius: 80.0,
                depth: 40.0,
                count: 80,
                factor: 1.5,
            },
            desktop: StarFieldParams::default(),
            seed: 0x5EED_0B5,
        }
    }
}
