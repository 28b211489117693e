//! Configuration scopes.
//!
//! A scope publishes one [`AmbientConfig`] to everything resolved under it.
//! Nesting a scope replaces the parent's config outright: keys the child
//! patch leaves out come from the library defaults, not from the parent.
//!
//! [`ConfigScope`] is the value you hand down an ownership tree;
//! [`ScopeStack`] is for hosts that walk their tree and push/pop as they go.

use std::sync::Arc;

use crate::config::{AmbientConfig, AmbientConfigPatch};
use crate::ids::{IdAllocator, ScopeId};

#[derive(Clone, Debug)]
pub struct ConfigScope {
    config: Arc<AmbientConfig>,
    depth: u32,
}

impl ConfigScope {
    /// The implicit outermost scope, publishing library defaults.
    pub fn root() -> Self {
        Self {
            config: Arc::new(AmbientConfig::default()),
            depth: 0,
        }
    }

    /// A top-level provider.
    pub fn provide(patch: &AmbientConfigPatch) -> Self {
        Self {
            config: Arc::new(patch.publish()),
            depth: 1,
        }
    }

    /// A provider nested inside this one. Shadows `self` entirely.
    pub fn nest(&self, patch: &AmbientConfigPatch) -> Self {
        Self {
            config: Arc::new(patch.publish()),
            depth: self.depth + 1,
        }
    }

    #[inline]
    pub fn config(&self) -> &AmbientConfig {
        &self.config
    }

    /// Providers between this scope and the root (0 for the root itself).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for ConfigScope {
    fn default() -> Self {
        Self::root()
    }
}

/// Stack of live scopes for hosts that traverse their tree imperatively.
#[derive(Debug, Default)]
pub struct ScopeStack {
    ids: IdAllocator,
    frames: Vec<(ScopeId, ConfigScope)>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a provider; returns the id to pass back to [`ScopeStack::pop`].
    pub fn push(&mut self, patch: &AmbientConfigPatch) -> ScopeId {
        let id = self.ids.alloc_scope();
        let scope = match self.frames.last() {
            Some((_, parent)) => parent.nest(patch),
            None => ConfigScope::provide(patch),
        };
        log::trace!("scope {:?} pushed at depth {}", id, scope.depth());
        self.frames.push((id, scope));
        id
    }

    /// Leave the innermost provider. Returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<ScopeId> {
        let (id, _) = self.frames.pop()?;
        log::trace!("scope {:?} popped", id);
        Some(id)
    }

    /// Scope in effect right now; the root scope when nothing is pushed.
    pub fn current(&self) -> ConfigScope {
        self.frames
            .last()
            .map(|(_, scope)| scope.clone())
            .unwrap_or_default()
    }

    /// Config in effect right now.
    pub fn current_config(&self) -> AmbientConfig {
        self.frames
            .last()
            .map(|(_, scope)| *scope.config())
            .unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
