//! Motion preset catalog.
//!
//! One fixed descriptor per [`MotionType`], built once on first use and indexed
//! by the enum discriminant. Feels:
//! - bouncy spring: `scale`, `bounce`
//! - soft spring: `rotate`, `translate`
//! - eased keyframe tweens: `shake`, `draw`, `ring`, `wiggle`, `heartbeat`, `swing`
//! - infinite tweens: `spin`, `pulse`, `float`
//! - `none`: no variants, zero-length tween

use once_cell::sync::Lazy;

use crate::motion::MotionType;
use crate::transition::{Easing, Repeat, TransitionProfile};
use crate::variants::{MotionDescriptor, Property, PropertyDelta, Variants};

static PRESETS: Lazy<MotionPresetCatalog> = Lazy::new(MotionPresetCatalog::build);

#[derive(Debug)]
pub struct MotionPresetCatalog {
    entries: [MotionDescriptor; MotionType::COUNT],
}

fn pair(initial: PropertyDelta, hover: PropertyDelta) -> Variants {
    Variants::pair(initial, hover)
}

fn at(prop: Property, v: f32) -> PropertyDelta {
    PropertyDelta::new().with(prop, v)
}

fn frames(prop: Property, keys: &[f32]) -> PropertyDelta {
    PropertyDelta::new().with_frames(prop, keys)
}

fn preset(motion: MotionType) -> MotionDescriptor {
    use Property::*;
    match motion {
        MotionType::Scale => {
            MotionDescriptor::new(pair(at(Scale, 1.0), at(Scale, 1.1)), TransitionProfile::bouncy())
        }
        MotionType::Rotate => {
            MotionDescriptor::new(pair(at(Rotate, 0.0), at(Rotate, 15.0)), TransitionProfile::soft())
        }
        MotionType::Translate => MotionDescriptor::new(
            pair(
                PropertyDelta::new().with(X, 0.0).with(Y, 0.0),
                PropertyDelta::new().with(X, 2.0).with(Y, -2.0),
            ),
            TransitionProfile::soft(),
        ),
        MotionType::Shake => MotionDescriptor::new(
            pair(at(X, 0.0), frames(X, &[0.0, -3.0, 3.0, -3.0, 3.0, 0.0])),
            TransitionProfile::tween(0.4, Easing::EaseInOut),
        ),
        MotionType::Pulse => MotionDescriptor::new(
            pair(at(Scale, 1.0), frames(Scale, &[1.0, 1.1, 1.0])),
            TransitionProfile::tween(1.0, Easing::EaseInOut).repeating(Repeat::Infinite),
        ),
        MotionType::Bounce => {
            MotionDescriptor::new(pair(at(Y, 0.0), at(Y, -4.0)), TransitionProfile::bouncy())
        }
        MotionType::Draw => MotionDescriptor::new(
            pair(
                PropertyDelta::new().with(PathLength, 1.0).with(Opacity, 1.0),
                PropertyDelta::new()
                    .with_frames(PathLength, &[0.0, 1.0])
                    .with_frames(Opacity, &[0.0, 1.0]),
            ),
            TransitionProfile::tween(0.6, Easing::EaseInOut),
        ),
        MotionType::Spin => MotionDescriptor::new(
            pair(at(Rotate, 0.0), at(Rotate, 360.0)),
            TransitionProfile::tween(1.0, Easing::Linear).repeating(Repeat::Infinite),
        ),
        MotionType::Ring => MotionDescriptor::new(
            pair(
                at(Rotate, 0.0),
                frames(Rotate, &[0.0, -15.0, 15.0, -10.0, 10.0, -5.0, 5.0, 0.0]),
            ),
            TransitionProfile::tween(0.6, Easing::EaseInOut),
        ),
        MotionType::Wiggle => MotionDescriptor::new(
            pair(at(Rotate, 0.0), frames(Rotate, &[0.0, -5.0, 5.0, -5.0, 5.0, 0.0])),
            TransitionProfile::tween(0.5, Easing::EaseInOut),
        ),
        MotionType::Heartbeat => MotionDescriptor::new(
            pair(at(Scale, 1.0), frames(Scale, &[1.0, 1.2, 1.0, 1.2, 1.0])),
            TransitionProfile::tween(0.8, Easing::EaseInOut),
        ),
        MotionType::Swing => MotionDescriptor::new(
            pair(
                at(Rotate, 0.0),
                frames(Rotate, &[0.0, 20.0, -20.0, 10.0, -10.0, 0.0]),
            ),
            TransitionProfile::tween(0.8, Easing::EaseInOut),
        ),
        MotionType::Float => MotionDescriptor::new(
            pair(at(Y, 0.0), frames(Y, &[0.0, -3.0, 0.0])),
            TransitionProfile::tween(2.0, Easing::EaseInOut).repeating(Repeat::Infinite),
        ),
        MotionType::None => MotionDescriptor::new(Variants::empty(), TransitionProfile::instant()),
    }
}

impl MotionPresetCatalog {
    fn build() -> Self {
        Self {
            entries: MotionType::ALL.map(preset),
        }
    }

    /// Shared, lazily built catalog.
    pub fn global() -> &'static MotionPresetCatalog {
        &PRESETS
    }

    /// Descriptor for a motion type. Constant-time table read.
    #[inline]
    pub fn get(&self, motion: MotionType) -> &MotionDescriptor {
        &self.entries[motion.index()]
    }

    /// Shorthand for `global().get(motion)`.
    #[inline]
    pub fn lookup(motion: MotionType) -> &'static MotionDescriptor {
        Self::global().get(motion)
    }

    /// Total over all text: unknown or empty names resolve to the `scale` entry.
    pub fn lookup_str(raw: &str) -> &'static MotionDescriptor {
        Self::lookup(MotionType::parse_lenient(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MotionType, &MotionDescriptor)> {
        MotionType::ALL.into_iter().zip(self.entries.iter())
    }
}
