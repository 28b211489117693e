//! Binding sets and activation conditions.
//!
//! A [`BindingSet`] is what a renderer wires onto one element: the state it
//! starts in, the state it activates to, the values behind those state names
//! (absent when they are inherited from a parent), the transition, and the
//! condition deciding when activation happens.
//!
//! The condition is shared behind an `Arc` so a container and its children can
//! observe the very same activation state. The host feeds it
//! [`ActivationEvent`]s; the predicate decides how each event moves it.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::transition::TransitionProfile;
use crate::variants::{PropertyDelta, StateName, Variants};

/// When an element switches from its initial state to its active state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationPredicate {
    /// Never activates. The kill switch and the `none` preset land here.
    Never,
    /// Active while the pointer is over the element; reverts on leave.
    WhileHovered,
    /// Active from mount onwards, continuously.
    WhileMounted,
    /// Activates once on first mount; never reverts.
    OnceMounted,
    /// Activates the first time the element enters the viewport; never reverts.
    OnceInView,
}

/// Host-side events a condition reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationEvent {
    Mounted,
    PointerEnter,
    PointerLeave,
    EnteredViewport,
    LeftViewport,
}

#[derive(Debug)]
pub struct ActivationCondition {
    predicate: ActivationPredicate,
    active: AtomicBool,
    activations: AtomicU32,
}

impl ActivationCondition {
    pub fn new(predicate: ActivationPredicate) -> Self {
        Self {
            predicate,
            active: AtomicBool::new(false),
            activations: AtomicU32::new(0),
        }
    }

    pub fn never() -> Self {
        Self::new(ActivationPredicate::Never)
    }

    #[inline]
    pub fn predicate(&self) -> ActivationPredicate {
        self.predicate
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Inactive-to-active transitions so far.
    #[inline]
    pub fn activations(&self) -> u32 {
        self.activations.load(Ordering::Acquire)
    }

    /// Whether the host still has to deliver viewport intersections. Once an
    /// in-view condition has fired, the host can drop its intersection observer.
    pub fn needs_viewport_events(&self) -> bool {
        self.predicate == ActivationPredicate::OnceInView && self.activations() == 0
    }

    /// Feed one host event; returns whether the condition is active afterwards.
    pub fn notify(&self, event: ActivationEvent) -> bool {
        use ActivationEvent::*;
        use ActivationPredicate::*;

        let fired = self.activations() > 0;
        let next = match (self.predicate, event) {
            (WhileHovered, PointerEnter) => Some(true),
            (WhileHovered, PointerLeave) => Some(false),
            (WhileMounted, Mounted) => Some(true),
            (OnceMounted, Mounted) if !fired => Some(true),
            (OnceInView, EnteredViewport) if !fired => Some(true),
            _ => None,
        };
        if let Some(next) = next {
            let was = self.active.swap(next, Ordering::AcqRel);
            if next && !was {
                self.activations.fetch_add(1, Ordering::AcqRel);
            }
        }
        self.is_active()
    }
}

impl PartialEq for ActivationCondition {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate
            && self.is_active() == other.is_active()
            && self.activations() == other.activations()
    }
}

impl Serialize for ActivationCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ActivationCondition", 3)?;
        st.serialize_field("predicate", &self.predicate)?;
        st.serialize_field("active", &self.is_active())?;
        st.serialize_field("activations", &self.activations())?;
        st.end()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingSet {
    pub initial: Option<StateName>,
    pub activate: Option<StateName>,
    /// Values behind the state names. `None` means the names propagate to
    /// children that carry their own variants.
    pub variants: Option<Variants>,
    pub transition: Option<TransitionProfile>,
    pub condition: Arc<ActivationCondition>,
}

impl BindingSet {
    /// Binds nothing; the element stays as rendered.
    pub fn noop() -> Self {
        Self {
            initial: None,
            activate: None,
            variants: None,
            transition: None,
            condition: Arc::new(ActivationCondition::never()),
        }
    }

    #[inline]
    pub fn is_noop(&self) -> bool {
        self.initial.is_none() && self.activate.is_none()
    }

    fn values_for(&self, state: Option<StateName>) -> Option<&PropertyDelta> {
        self.variants.as_ref()?.get(state?)
    }

    pub fn initial_target(&self) -> Option<&PropertyDelta> {
        self.values_for(self.initial)
    }

    pub fn activate_target(&self) -> Option<&PropertyDelta> {
        self.values_for(self.activate)
    }

    /// What the element should be driven to right now.
    pub fn current_target(&self) -> Option<&PropertyDelta> {
        if self.condition.is_active() {
            self.activate_target()
        } else {
            self.initial_target()
        }
    }

    #[inline]
    pub fn shares_condition_with(&self, other: &BindingSet) -> bool {
        Arc::ptr_eq(&self.condition, &other.condition)
    }
}

impl Default for BindingSet {
    fn default() -> Self {
        Self::noop()
    }
}

impl PartialEq for BindingSet {
    fn eq(&self, other: &Self) -> bool {
        self.initial == other.initial
            && self.activate == other.activate
            && self.variants == other.variants
            && self.transition == other.transition
            && *self.condition == *other.condition
    }
}
