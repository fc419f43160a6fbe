use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Animation and interaction parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Simulation", inline)]
#[serde(default)]
pub struct SimulationOptions {
    /// Animation speed slider position, 0-100. 50 is the neutral speed;
    /// the transform clock maps this to a 0.5x-2.0x factor.
    #[schemars(title = "Animation Speed")]
    pub animation_speed: f32,
    /// Geometry detail slider position, 0-100.
    #[schemars(title = "Detail Level")]
    pub detail_level: f32,
    /// Turntable auto-rotation toggle.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            animation_speed: 50.0,
            detail_level: 75.0,
            auto_rotate: false,
        }
    }
}
