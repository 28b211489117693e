//! Path-drawing propagation.
//!
//! `draw` animates path length on the inner `<path>` elements, not a transform
//! on the wrapper. The wrapper still owns the trigger (hover, in-view...), so it
//! keeps the state names and the condition while the paths get the values. Both
//! sides hold the same `Arc<ActivationCondition>`; paths can never drift from
//! the wrapper's activation state.

use std::sync::Arc;

use crate::binding::BindingSet;

#[derive(Debug, Default, Clone, Copy)]
pub struct DrawPropagationAdapter;

impl DrawPropagationAdapter {
    /// Path-level bindings: the wrapper's values, transition and condition.
    pub fn adapt(wrapper: &BindingSet) -> BindingSet {
        BindingSet {
            initial: wrapper.initial,
            activate: wrapper.activate,
            variants: wrapper.variants.clone(),
            transition: wrapper.transition,
            condition: Arc::clone(&wrapper.condition),
        }
    }

    /// Container-level bindings: state names and condition only, so the
    /// container itself draws nothing and its children pick the names up.
    pub fn container(wrapper: &BindingSet) -> BindingSet {
        BindingSet {
            initial: wrapper.initial,
            activate: wrapper.activate,
            variants: None,
            transition: None,
            condition: Arc::clone(&wrapper.condition),
        }
    }
}
