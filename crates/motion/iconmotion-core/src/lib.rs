//! iconmotion core (renderer-agnostic)
//!
//! Resolves an icon's animation intent into concrete bindings. Inputs are the
//! component's own props, the ambient configuration published by the nearest
//! scope, and the system reduced-motion preference. Outputs are plain data a
//! rendering layer wires onto its elements; nothing here renders or ticks time.
//!
//! Resolution order for one call: [`ConfigResolver`] decides whether animation
//! is on, [`MotionPresetCatalog`] supplies the descriptor, [`TriggerBindingGenerator`]
//! binds it to the trigger, and [`DrawPropagationAdapter`] splits the bindings
//! for path-drawing icons. [`IconAnimationFacade`] runs the whole chain.

pub mod binding;
pub mod catalog;
pub mod config;
pub mod draw;
pub mod error;
pub mod facade;
pub mod ids;
pub mod motion;
pub mod observer;
pub mod resolver;
pub mod scope;
pub mod transition;
pub mod trigger;
pub mod value;
pub mod variants;

// Re-exports for consumers (adapters)
pub use binding::{ActivationCondition, ActivationEvent, ActivationPredicate, BindingSet};
pub use catalog::MotionPresetCatalog;
pub use config::{AmbientConfig, AmbientConfigPatch};
pub use draw::DrawPropagationAdapter;
pub use error::MotionError;
pub use facade::{
    Accessibility, IconAnimationFacade, IconProps, ResolvedAnimationState, ResolvedGeometry,
    ResolvedIcon,
};
pub use ids::{ScopeId, SubscriberId};
pub use motion::MotionType;
pub use observer::{
    HostReducedMotionSignal, PreferenceSink, ReducedMotionSource, Subscription,
    SystemPreferenceObserver,
};
pub use resolver::{resolve_animated, ComponentOverride, ConfigResolver, ResolvedConfig};
pub use scope::{ConfigScope, ScopeStack};
pub use transition::{Easing, Repeat, TransitionFeel, TransitionKind, TransitionProfile};
pub use trigger::{TriggerBindingGenerator, TriggerMode};
pub use value::{Value, ValueKind};
pub use variants::{MotionDescriptor, Property, PropertyDelta, StateName, Variants};
