//! Ambient configuration published by a scope.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

pub const DEFAULT_ANIMATED: bool = true;
pub const DEFAULT_SIZE: f32 = 24.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Settings every icon under a scope inherits unless it specifies its own.
/// Immutable once published.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientConfig {
    pub animated: bool,
    pub default_size: f32,
    pub default_stroke_width: f32,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            animated: DEFAULT_ANIMATED,
            default_size: DEFAULT_SIZE,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// The partial config a provider is created with. Keys left out fall back to
/// the library defaults, not to whatever an enclosing scope published.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientConfigPatch {
    #[serde(default)]
    pub animated: Option<bool>,
    #[serde(default)]
    pub default_size: Option<f32>,
    #[serde(default)]
    pub default_stroke_width: Option<f32>,
}

impl AmbientConfigPatch {
    /// Parse a provider config from JSON and check its geometry.
    pub fn from_json_str(json: &str) -> Result<Self, MotionError> {
        let patch: AmbientConfigPatch = serde_json::from_str(json)?;
        patch.validate()?;
        Ok(patch)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        check_geometry("defaultSize", self.default_size)?;
        check_geometry("defaultStrokeWidth", self.default_stroke_width)?;
        Ok(())
    }

    /// Merge against the library defaults.
    pub fn publish(&self) -> AmbientConfig {
        let base = AmbientConfig::default();
        AmbientConfig {
            animated: self.animated.unwrap_or(base.animated),
            default_size: self.default_size.unwrap_or(base.default_size),
            default_stroke_width: self.default_stroke_width.unwrap_or(base.default_stroke_width),
        }
    }
}

fn check_geometry(field: &'static str, value: Option<f32>) -> Result<(), MotionError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(MotionError::InvalidGeometry { field, value: v }),
        _ => Ok(()),
    }
}

impl From<AmbientConfigPatch> for AmbientConfig {
    fn from(patch: AmbientConfigPatch) -> Self {
        patch.publish()
    }
}
