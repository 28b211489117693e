//! Variants and motion descriptors.
//!
//! A variant is a named set of property targets (`initial`, `hover`). A
//! descriptor pairs the variants of one motion type with its transition.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::transition::TransitionProfile;
use crate::value::Value;

/// Canonical variant names. `Hover` is the activation target for every trigger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateName {
    Initial,
    Hover,
}

impl StateName {
    pub fn as_str(self) -> &'static str {
        match self {
            StateName::Initial => "initial",
            StateName::Hover => "hover",
        }
    }
}

/// Animatable properties, named the way renderers spell them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Scale,
    Rotate,
    X,
    Y,
    Opacity,
    PathLength,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyDelta(pub HashMap<Property, Value>);

impl PropertyDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Property, value: f32) -> Self {
        self.0.insert(prop, Value::Float(value));
        self
    }

    pub fn with_frames(mut self, prop: Property, frames: &[f32]) -> Self {
        self.0.insert(prop, Value::Keyframes(frames.to_vec()));
        self
    }

    pub fn insert(&mut self, prop: Property, value: Value) -> Option<Value> {
        self.0.insert(prop, value)
    }

    pub fn get(&self, prop: Property) -> Option<&Value> {
        self.0.get(&prop)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Property, &Value)> {
        self.0.iter()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variants(pub HashMap<StateName, PropertyDelta>);

impl Variants {
    /// Variants with no states at all; binding against them is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pair(initial: PropertyDelta, hover: PropertyDelta) -> Self {
        let mut map = HashMap::with_capacity(2);
        map.insert(StateName::Initial, initial);
        map.insert(StateName::Hover, hover);
        Self(map)
    }

    pub fn get(&self, state: StateName) -> Option<&PropertyDelta> {
        self.0.get(&state)
    }

    pub fn contains(&self, state: StateName) -> bool {
        self.0.contains_key(&state)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Variants plus the transition that animates between them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionDescriptor {
    pub variants: Variants,
    pub transition: TransitionProfile,
}

impl MotionDescriptor {
    pub fn new(variants: Variants, transition: TransitionProfile) -> Self {
        Self {
            variants,
            transition,
        }
    }

    /// A descriptor can only animate if it has somewhere to go.
    #[inline]
    pub fn is_animatable(&self) -> bool {
        self.variants.contains(StateName::Hover)
    }
}
