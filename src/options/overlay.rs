use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text size for the information overlays.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    /// Compact text.
    Small,
    /// Standard text.
    #[default]
    Medium,
    /// Enlarged text.
    Large,
}

/// Information overlay toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Overlays", inline)]
#[serde(default)]
pub struct OverlayOptions {
    /// Whether the measurements panel is shown.
    #[schemars(title = "Show Measurements")]
    pub show_measurements: bool,
    /// Whether the treatment timeline is shown.
    #[schemars(title = "Show Timeline")]
    pub show_timeline: bool,
    /// Overlay text size.
    #[schemars(title = "Text Size")]
    pub text_size: TextSize,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            show_measurements: true,
            show_timeline: true,
            text_size: TextSize::Medium,
        }
    }
}
