//! Animated/geometry resolution.
//!
//! `animated` walks a three-level chain: component override, then the ambient
//! scope, then the negated system reduced-motion flag. An explicit override
//! beats the accessibility preference. Geometry is two-level (component, then
//! ambient); there is no system default for size or stroke.

use serde::{Deserialize, Serialize};

use crate::config::AmbientConfig;

/// Per-call props that can shadow the ambient config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverride {
    #[serde(default)]
    pub animated: Option<bool>,
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub stroke_width: Option<f32>,
    #[serde(default)]
    pub class_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub is_animated: bool,
    pub size: f32,
    pub stroke_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// The priority law on its own.
#[inline]
pub fn resolve_animated(
    component: Option<bool>,
    ambient: Option<bool>,
    system_reduced_motion: bool,
) -> bool {
    component.or(ambient).unwrap_or(!system_reduced_motion)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigResolver;

impl ConfigResolver {
    pub fn resolve(
        component: &ComponentOverride,
        ambient: &AmbientConfig,
        system_reduced_motion: bool,
    ) -> ResolvedConfig {
        ResolvedConfig {
            is_animated: resolve_animated(
                component.animated,
                Some(ambient.animated),
                system_reduced_motion,
            ),
            size: component.size.unwrap_or(ambient.default_size),
            stroke_width: component.stroke_width.unwrap_or(ambient.default_stroke_width),
            class_name: component.class_name.clone(),
        }
    }
}
