//! Identifiers and simple allocators for scopes and preference subscribers.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScopeId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SubscriberId(pub u32);

/// Monotonic allocator for ScopeId and SubscriberId.
/// Ids are never reused within one allocator, so a stale handle can't alias a live one.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_scope: u32,
    next_subscriber: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.next_scope);
        self.next_scope = self.next_scope.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_subscriber(&mut self) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber = self.next_subscriber.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_scope(), ScopeId(0));
        assert_eq!(alloc.alloc_scope(), ScopeId(1));
        assert_eq!(alloc.alloc_subscriber(), SubscriberId(0));
        assert_eq!(alloc.alloc_subscriber(), SubscriberId(1));
        assert_eq!(alloc.alloc_scope(), ScopeId(2));
    }
}
