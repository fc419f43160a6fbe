//! Centralized simulation settings with TOML preset support.
//!
//! All tweakable settings (animation speed, render quality, shading
//! toggles, overlay toggles) are consolidated here. Settings panels
//! mutate them exclusively through [`Options::merge_update`] with a
//! partial [`OptionsPatch`]: unspecified fields retain their prior
//! value and unknown keys are ignored. Options serialize to/from TOML
//! for view presets.

mod display;
mod overlay;
mod simulation;

use std::path::Path;

pub use display::{DisplayOptions, RenderQuality};
pub use overlay::{OverlayOptions, TextSize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use simulation::SimulationOptions;

use crate::error::SimError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[display]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Animation and interaction parameters.
    pub simulation: SimulationOptions,
    /// Render quality and shading toggles.
    pub display: DisplayOptions,
    /// Information overlay toggles.
    pub overlay: OverlayOptions,
}

/// A partial settings update, flat like the settings panel's form.
///
/// Every field is optional; [`Options::merge_update`] applies only the
/// fields that are present. Deserializing a patch ignores unknown keys,
/// which keeps the settings surface forward compatible.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
    /// New animation speed, 0-100.
    pub animation_speed: Option<f32>,
    /// New detail level, 0-100.
    pub detail_level: Option<f32>,
    /// New auto-rotate toggle.
    pub auto_rotate: Option<bool>,
    /// New render quality tier.
    pub render_quality: Option<RenderQuality>,
    /// New shadows toggle.
    pub shadows: Option<bool>,
    /// New ambient occlusion toggle.
    pub ambient_occlusion: Option<bool>,
    /// New measurements panel toggle.
    pub show_measurements: Option<bool>,
    /// New timeline panel toggle.
    pub show_timeline: Option<bool>,
    /// New overlay text size.
    pub text_size: Option<TextSize>,
}

impl OptionsPatch {
    /// Parse a patch from a JSON object (the settings panel's wire
    /// format). Unknown keys are ignored, not an error.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json)
            .map_err(|e| SimError::OptionsParse(e.to_string()))
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Merge a partial patch. Fields absent from the patch keep their
    /// current value.
    pub fn merge_update(&mut self, patch: &OptionsPatch) {
        if let Some(v) = patch.animation_speed {
            self.simulation.animation_speed = v.clamp(0.0, 100.0);
        }
        if let Some(v) = patch.detail_level {
            self.simulation.detail_level = v.clamp(0.0, 100.0);
        }
        if let Some(v) = patch.auto_rotate {
            self.simulation.auto_rotate = v;
        }
        if let Some(v) = patch.render_quality {
            self.display.render_quality = v;
        }
        if let Some(v) = patch.shadows {
            self.display.shadows = v;
        }
        if let Some(v) = patch.ambient_occlusion {
            self.display.ambient_occlusion = v;
        }
        if let Some(v) = patch.show_measurements {
            self.overlay.show_measurements = v;
        }
        if let Some(v) = patch.show_timeline {
            self.overlay.show_timeline = v;
        }
        if let Some(v) = patch.text_size {
            self.overlay.text_size = v;
        }
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path).map_err(SimError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SimError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SimError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SimError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SimError::Io)?;
        }
        std::fs::write(path, content).map_err(SimError::Io)
    }
}
