//! Trigger modes and the binding generator.
//!
//! Each trigger maps to one activation predicate; the trigger is fixed for the
//! lifetime of a binding set. Every mode starts in `initial` and activates to
//! `hover`. Only `loop` touches the transition: it forces infinite repetition.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::binding::{ActivationCondition, ActivationPredicate, BindingSet};
use crate::error::MotionError;
use crate::transition::{Repeat, TransitionProfile};
use crate::variants::{MotionDescriptor, StateName};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerMode {
    #[default]
    Hover,
    Loop,
    Mount,
    InView,
}

impl TriggerMode {
    pub const ALL: [TriggerMode; 4] = [
        TriggerMode::Hover,
        TriggerMode::Loop,
        TriggerMode::Mount,
        TriggerMode::InView,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TriggerMode::Hover => "hover",
            TriggerMode::Loop => "loop",
            TriggerMode::Mount => "mount",
            TriggerMode::InView => "inView",
        }
    }

    /// Parse without failing: anything unrecognized becomes `Hover`.
    pub fn parse_lenient(raw: &str) -> TriggerMode {
        raw.parse().unwrap_or_else(|_| {
            log::debug!("unknown trigger {raw:?}; falling back to hover");
            TriggerMode::Hover
        })
    }

    pub fn predicate(self) -> ActivationPredicate {
        match self {
            TriggerMode::Hover => ActivationPredicate::WhileHovered,
            TriggerMode::Loop => ActivationPredicate::WhileMounted,
            TriggerMode::Mount => ActivationPredicate::OnceMounted,
            TriggerMode::InView => ActivationPredicate::OnceInView,
        }
    }

    /// The transition actually used under this trigger.
    pub fn effective_transition(self, base: TransitionProfile) -> TransitionProfile {
        match self {
            TriggerMode::Loop => base.repeating(Repeat::Infinite),
            TriggerMode::Hover | TriggerMode::Mount | TriggerMode::InView => base,
        }
    }
}

impl FromStr for TriggerMode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriggerMode::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MotionError::UnknownTrigger(s.to_string()))
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn deserialize_lenient<'de, D>(de: D) -> Result<Option<TriggerMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(de)?;
    Ok(raw.map(|v| match v {
        serde_json::Value::String(s) => TriggerMode::parse_lenient(&s),
        other => TriggerMode::parse_lenient(&other.to_string()),
    }))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TriggerBindingGenerator;

impl TriggerBindingGenerator {
    /// Bind a descriptor to a trigger. With animation off, or nothing to
    /// activate to, the result is [`BindingSet::noop`] whatever the trigger.
    pub fn bind(
        is_animated: bool,
        descriptor: &MotionDescriptor,
        trigger: TriggerMode,
    ) -> BindingSet {
        if !is_animated || !descriptor.is_animatable() {
            return BindingSet::noop();
        }
        BindingSet {
            initial: Some(StateName::Initial),
            activate: Some(StateName::Hover),
            variants: Some(descriptor.variants.clone()),
            transition: Some(trigger.effective_transition(descriptor.transition)),
            condition: Arc::new(ActivationCondition::new(trigger.predicate())),
        }
    }
}
