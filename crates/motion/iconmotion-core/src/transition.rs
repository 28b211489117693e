//! Transition profiles: how a variant change is animated.
//!
//! A profile names either spring physics or a fixed-duration tween, plus an
//! optional repeat. The renderer owns the actual timing; this only selects it.

use serde::{Deserialize, Serialize};

/// Spring tuning for attention-seeking motion (high stiffness, low damping).
pub const BOUNCY_STIFFNESS: f32 = 400.0;
pub const BOUNCY_DAMPING: f32 = 10.0;
/// Spring tuning for smooth structural motion.
pub const SOFT_STIFFNESS: f32 = 200.0;
pub const SOFT_DAMPING: f32 = 20.0;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransitionKind {
    Spring { stiffness: f32, damping: f32 },
    /// Duration in seconds.
    Tween { duration: f32, ease: Easing },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    Infinite,
    Count(u32),
}

/// Coarse classification of a profile; what a designer would call its "feel".
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransitionFeel {
    Bouncy,
    Soft,
    Eased,
    Continuous,
    Instant,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionProfile {
    #[serde(flatten)]
    pub kind: TransitionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
}

impl TransitionProfile {
    pub const fn spring(stiffness: f32, damping: f32) -> Self {
        Self {
            kind: TransitionKind::Spring { stiffness, damping },
            repeat: None,
        }
    }

    pub const fn bouncy() -> Self {
        Self::spring(BOUNCY_STIFFNESS, BOUNCY_DAMPING)
    }

    pub const fn soft() -> Self {
        Self::spring(SOFT_STIFFNESS, SOFT_DAMPING)
    }

    pub const fn tween(duration: f32, ease: Easing) -> Self {
        Self {
            kind: TransitionKind::Tween { duration, ease },
            repeat: None,
        }
    }

    /// Zero-length tween; the element jumps straight to its target.
    pub const fn instant() -> Self {
        Self::tween(0.0, Easing::Linear)
    }

    pub const fn repeating(self, repeat: Repeat) -> Self {
        Self {
            kind: self.kind,
            repeat: Some(repeat),
        }
    }

    #[inline]
    pub fn repeats_forever(&self) -> bool {
        matches!(self.repeat, Some(Repeat::Infinite))
    }

    pub fn feel(&self) -> TransitionFeel {
        if self.repeats_forever() {
            return TransitionFeel::Continuous;
        }
        match self.kind {
            TransitionKind::Spring { stiffness, damping } => {
                if stiffness >= BOUNCY_STIFFNESS && damping <= BOUNCY_DAMPING {
                    TransitionFeel::Bouncy
                } else {
                    TransitionFeel::Soft
                }
            }
            TransitionKind::Tween { duration, .. } if duration <= 0.0 => TransitionFeel::Instant,
            TransitionKind::Tween { .. } => TransitionFeel::Eased,
        }
    }
}
