//! Animatable target values.
//!
//! A target is either a single number the renderer animates towards, or a
//! keyframe sequence for non-monotonic effects (shake, heartbeat, ring...).
//! Serialized untagged so a renderer reads `1.1` or `[0, -3, 3, 0]` directly.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Keyframes,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Single target
    Float(f32),
    /// Keyframe sequence, played start to end over the transition
    Keyframes(Vec<f32>),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Keyframes(_) => ValueKind::Keyframes,
        }
    }

    /// Value the element settles on once the transition completes.
    pub fn final_value(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Keyframes(frames) => frames.last().copied(),
        }
    }

    /// Number of frames the renderer steps through (1 for a plain target).
    pub fn frame_count(&self) -> usize {
        match self {
            Value::Float(_) => 1,
            Value::Keyframes(frames) => frames.len(),
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}
