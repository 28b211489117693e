//! Public entry point: one call in, everything a renderer needs out.
//!
//! ```
//! use iconmotion_core::{AmbientConfig, IconAnimationFacade, IconProps, MotionType, TriggerMode};
//!
//! let props = IconProps {
//!     motion_type: Some(MotionType::Pulse),
//!     trigger: Some(TriggerMode::Loop),
//!     ..Default::default()
//! };
//! let icon = IconAnimationFacade::resolve(&props, Some(&AmbientConfig::default()), false);
//! assert!(icon.animation.is_animated);
//! assert!(icon.animation.transition.unwrap().repeats_forever());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::binding::BindingSet;
use crate::catalog::MotionPresetCatalog;
use crate::config::AmbientConfig;
use crate::draw::DrawPropagationAdapter;
use crate::motion::{self, MotionType};
use crate::observer::SystemPreferenceObserver;
use crate::resolver::{ComponentOverride, ConfigResolver};
use crate::scope::ConfigScope;
use crate::transition::TransitionProfile;
use crate::trigger::{self, TriggerBindingGenerator, TriggerMode};
use crate::variants::Variants;

/// Props an icon component is rendered with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconProps {
    #[serde(default, deserialize_with = "or_none")]
    pub size: Option<f32>,
    #[serde(default, deserialize_with = "or_none")]
    pub stroke_width: Option<f32>,
    #[serde(default, deserialize_with = "or_none")]
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "or_none")]
    pub animated: Option<bool>,
    #[serde(default, deserialize_with = "motion::deserialize_lenient")]
    pub motion_type: Option<MotionType>,
    #[serde(default, deserialize_with = "trigger::deserialize_lenient")]
    pub trigger: Option<TriggerMode>,
    #[serde(default, rename = "aria-label", deserialize_with = "or_none")]
    pub aria_label: Option<String>,
}

/// A wrongly typed prop is dropped as if it had not been passed.
fn or_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<serde_json::Value> = Option::deserialize(de)?;
    Ok(raw.and_then(|v| match serde_json::from_value(v.clone()) {
        Ok(t) => Some(t),
        Err(e) => {
            log::debug!("ignoring icon prop {v}: {e}");
            None
        }
    }))
}

impl IconProps {
    fn component_override(&self) -> ComponentOverride {
        ComponentOverride {
            animated: self.animated,
            size: self.size,
            stroke_width: self.stroke_width,
            class_name: self.class_name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnimationState {
    pub is_animated: bool,
    pub motion_type: MotionType,
    pub trigger: TriggerMode,
    pub variants: Option<Variants>,
    pub transition: Option<TransitionProfile>,
    pub wrapper_bindings: BindingSet,
    pub path_bindings: BindingSet,
    pub draw_wrapper_bindings: BindingSet,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGeometry {
    pub size: f32,
    pub stroke_width: f32,
}

/// Labelled icons are announced as images; unlabelled ones are hidden from
/// assistive technology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Accessibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "aria-hidden", skip_serializing_if = "Option::is_none")]
    pub aria_hidden: Option<bool>,
}

impl Accessibility {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(label) => Self {
                role: Some("img"),
                aria_label: Some(label.to_string()),
                aria_hidden: None,
            },
            None => Self {
                role: None,
                aria_label: None,
                aria_hidden: Some(true),
            },
        }
    }

    #[inline]
    pub fn is_decorative(&self) -> bool {
        self.aria_hidden == Some(true)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIcon {
    pub animation: ResolvedAnimationState,
    pub geometry: ResolvedGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub accessibility: Accessibility,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IconAnimationFacade;

impl IconAnimationFacade {
    /// Resolve one icon. A missing ambient config means library defaults.
    pub fn resolve(
        props: &IconProps,
        ambient: Option<&AmbientConfig>,
        system_reduced_motion: bool,
    ) -> ResolvedIcon {
        let default_cfg = AmbientConfig::default();
        let ambient = ambient.unwrap_or(&default_cfg);
        let resolved =
            ConfigResolver::resolve(&props.component_override(), ambient, system_reduced_motion);

        let animation = Self::resolve_animation(
            resolved.is_animated,
            props.motion_type.unwrap_or_default(),
            props.trigger.unwrap_or_default(),
        );

        ResolvedIcon {
            animation,
            geometry: ResolvedGeometry {
                size: resolved.size,
                stroke_width: resolved.stroke_width,
            },
            class_name: resolved.class_name,
            accessibility: Accessibility::from_label(props.aria_label.as_deref()),
        }
    }

    /// Resolve against a scope and a live observer.
    pub fn resolve_in(
        props: &IconProps,
        scope: &ConfigScope,
        observer: &SystemPreferenceObserver,
    ) -> ResolvedIcon {
        Self::resolve(props, Some(scope.config()), observer.prefers_reduced_motion())
    }

    /// The animation half of resolution, once `is_animated` is known.
    pub fn resolve_animation(
        is_animated: bool,
        motion_type: MotionType,
        trigger: TriggerMode,
    ) -> ResolvedAnimationState {
        let descriptor = MotionPresetCatalog::lookup(motion_type);
        let bound = TriggerBindingGenerator::bind(is_animated, descriptor, trigger);

        let (wrapper_bindings, path_bindings, draw_wrapper_bindings) =
            if motion_type.draws_paths() {
                let path = DrawPropagationAdapter::adapt(&bound);
                let container = DrawPropagationAdapter::container(&bound);
                (BindingSet::noop(), path, container)
            } else {
                (bound, BindingSet::noop(), BindingSet::noop())
            };

        let (variants, transition) = if is_animated {
            // `none` keeps its instant tween; looping it would never settle
            let transition = if descriptor.is_animatable() {
                trigger.effective_transition(descriptor.transition)
            } else {
                descriptor.transition
            };
            (Some(descriptor.variants.clone()), Some(transition))
        } else {
            (None, None)
        };

        ResolvedAnimationState {
            is_animated,
            motion_type,
            trigger,
            variants,
            transition,
            wrapper_bindings,
            path_bindings,
            draw_wrapper_bindings,
        }
    }
}
