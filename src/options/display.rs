use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render quality tier, mapped to a device pixel density.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderQuality {
    /// 1x pixel density.
    Low,
    /// 1.5x pixel density.
    Medium,
    /// 2x pixel density.
    #[default]
    High,
    /// 3x pixel density.
    Ultra,
}

impl RenderQuality {
    /// Device pixel density the host should render at.
    #[must_use]
    pub fn pixel_density(self) -> f32 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.5,
            Self::High => 2.0,
            Self::Ultra => 3.0,
        }
    }
}

/// Render quality and shading toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Render quality tier.
    #[schemars(title = "Render Quality")]
    pub render_quality: RenderQuality,
    /// Whether the host should render shadows.
    #[schemars(title = "Shadows")]
    pub shadows: bool,
    /// Whether the host should apply ambient occlusion.
    #[schemars(title = "Ambient Occlusion")]
    pub ambient_occlusion: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            render_quality: RenderQuality::High,
            shadows: true,
            ambient_occlusion: true,
        }
    }
}
