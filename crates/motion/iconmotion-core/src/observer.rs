//! System reduced-motion observer.
//!
//! One process-wide observer ([`SystemPreferenceObserver::global`]) tracks the
//! host's "reduce motion" signal. The host signal is only listened to while
//! somebody is subscribed: the first subscription attaches the
//! [`ReducedMotionSource`], the last unsubscribe detaches it again.
//!
//! The host is the only writer (through the [`PreferenceSink`] it receives on
//! attach); everything else reads. Subscriber callbacks run after the internal
//! lock is released, so a callback may subscribe, unsubscribe or read freely.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::ids::{IdAllocator, SubscriberId};

static GLOBAL: Lazy<SystemPreferenceObserver> = Lazy::new(SystemPreferenceObserver::new);

type Callback = Arc<dyn Fn(bool) + Send + Sync>;

/// Host-side reduced-motion facility (a media query, an OS setting...).
pub trait ReducedMotionSource: Send {
    /// Current value, or `None` when the host has no such signal.
    fn current(&self) -> Option<bool>;
    /// Start delivering changes into `sink`.
    fn attach(&mut self, sink: PreferenceSink);
    /// Stop delivering changes; drop the sink.
    fn detach(&mut self);
}

/// Write end handed to a source on attach.
#[derive(Clone, Debug)]
pub struct PreferenceSink {
    inner: Weak<ObserverInner>,
}

impl PreferenceSink {
    /// Publish a new value. No-op once the observer is gone.
    pub fn publish(&self, reduced: bool) {
        if let Some(inner) = self.inner.upgrade() {
            inner.publish(reduced);
        }
    }
}

struct ObserverState {
    ids: IdAllocator,
    subscribers: Vec<(SubscriberId, Callback)>,
    source: Option<Box<dyn ReducedMotionSource>>,
    attached: bool,
}

struct ObserverInner {
    reduced: AtomicBool,
    state: Mutex<ObserverState>,
}

impl std::fmt::Debug for ObserverInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut dbg = f.debug_struct("ObserverInner");
        dbg.field("reduced", &self.reduced.load(Ordering::Acquire));
        if let Some(state) = self.state.try_lock() {
            dbg.field("subscribers", &state.subscribers.len())
                .field("has_source", &state.source.is_some())
                .field("attached", &state.attached);
        }
        dbg.finish()
    }
}

impl ObserverInner {
    fn publish(&self, reduced: bool) {
        let previous = self.reduced.swap(reduced, Ordering::AcqRel);
        if previous == reduced {
            return;
        }
        log::debug!("system reduced-motion changed: {previous} -> {reduced}");
        let callbacks: Vec<Callback> = {
            let state = self.state.lock();
            state.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for cb in callbacks {
            cb(reduced);
        }
    }
}

#[derive(Clone, Debug)]
pub struct SystemPreferenceObserver {
    inner: Arc<ObserverInner>,
}

impl Default for SystemPreferenceObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemPreferenceObserver {
    /// A standalone observer. Most callers want [`SystemPreferenceObserver::global`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ObserverInner {
                reduced: AtomicBool::new(false),
                state: Mutex::new(ObserverState {
                    ids: IdAllocator::new(),
                    subscribers: Vec::new(),
                    source: None,
                    attached: false,
                }),
            }),
        }
    }

    pub fn global() -> &'static SystemPreferenceObserver {
        &GLOBAL
    }

    /// Install (or replace) the host source. If subscribers exist, the new
    /// source is attached right away and the old one detached.
    pub fn install_source(&self, source: Box<dyn ReducedMotionSource>) {
        let (old, attach_now) = {
            let mut state = self.inner.state.lock();
            let old = state.source.replace(source);
            let was_attached = std::mem::replace(&mut state.attached, false);
            (old.map(|o| (o, was_attached)), !state.subscribers.is_empty())
        };
        if let Some((mut old, true)) = old {
            old.detach();
        }
        if attach_now {
            self.attach_source();
        }
    }

    /// Reduced motion requested right now. Hosts without the signal read `false`.
    pub fn prefers_reduced_motion(&self) -> bool {
        let state = self.inner.state.lock();
        if state.attached {
            return self.inner.reduced.load(Ordering::Acquire);
        }
        match state.source.as_ref().and_then(|s| s.current()) {
            Some(v) => v,
            None => {
                log::trace!("no reduced-motion signal from host; assuming false");
                false
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.state.lock().subscribers.len()
    }

    /// Whether the host source is currently attached.
    pub fn is_listening(&self) -> bool {
        self.inner.state.lock().attached
    }

    /// Register a callback for changes. The first subscriber attaches the host source.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let (id, first) = {
            let mut state = self.inner.state.lock();
            let id = state.ids.alloc_subscriber();
            state.subscribers.push((id, Arc::new(callback)));
            (id, state.subscribers.len() == 1)
        };
        if first {
            self.attach_source();
        }
        Subscription {
            id,
            observer: Arc::downgrade(&self.inner),
            live: true,
        }
    }

    /// Remove a subscriber. The last one out detaches the host source.
    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        unsubscribe_inner(&self.inner, id)
    }

    fn attach_source(&self) {
        // The source is taken out while attaching so it may publish synchronously.
        let taken = {
            let mut state = self.inner.state.lock();
            if state.attached {
                None
            } else {
                state.source.take()
            }
        };
        let Some(mut source) = taken else {
            return;
        };
        let initial = source.current().unwrap_or(false);
        self.inner.reduced.store(initial, Ordering::Release);
        source.attach(PreferenceSink {
            inner: Arc::downgrade(&self.inner),
        });
        log::debug!("attached reduced-motion source (initial: {initial})");

        let mut state = self.inner.state.lock();
        if state.source.is_some() {
            // replaced while we were attaching; the newer one wins
            drop(state);
            source.detach();
        } else if state.subscribers.is_empty() {
            // everyone left while we were attaching
            drop(state);
            source.detach();
            self.inner.state.lock().source.get_or_insert(source);
        } else {
            state.source = Some(source);
            state.attached = true;
        }
    }
}

fn unsubscribe_inner(inner: &Arc<ObserverInner>, id: SubscriberId) -> bool {
    let detach = {
        let mut state = inner.state.lock();
        let before = state.subscribers.len();
        state.subscribers.retain(|(sid, _)| *sid != id);
        if state.subscribers.len() == before {
            return false;
        }
        if state.subscribers.is_empty() && state.attached {
            state.attached = false;
            state.source.take()
        } else {
            None
        }
    };
    if let Some(mut source) = detach {
        source.detach();
        log::debug!("last subscriber left; detached reduced-motion source");
        let mut state = inner.state.lock();
        if state.source.is_none() {
            state.source = Some(source);
        }
    }
    true
}

/// Handle for one subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    observer: Weak<ObserverInner>,
    live: bool,
}

impl Subscription {
    #[inline]
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Keep the subscription alive for the rest of the process.
    pub fn forget(mut self) -> SubscriberId {
        self.live = false;
        self.id
    }

    fn release(&mut self) {
        if !std::mem::take(&mut self.live) {
            return;
        }
        if let Some(inner) = self.observer.upgrade() {
            unsubscribe_inner(&inner, self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Debug, Default)]
struct HostSignalState {
    supported: bool,
    value: bool,
    sink: Option<PreferenceSink>,
}

/// Push-style source for hosts that forward their own change events
/// (a `matchMedia` listener on the web, a settings callback elsewhere).
#[derive(Clone, Debug)]
pub struct HostReducedMotionSignal {
    shared: Arc<Mutex<HostSignalState>>,
}

impl HostReducedMotionSignal {
    pub fn new(initial: bool) -> Self {
        Self {
            shared: Arc::new(Mutex::new(HostSignalState {
                supported: true,
                value: initial,
                sink: None,
            })),
        }
    }

    /// A host that cannot report the preference at all.
    pub fn unsupported() -> Self {
        Self {
            shared: Arc::new(Mutex::new(HostSignalState::default())),
        }
    }

    /// Record a new host value and forward it if an observer is attached.
    pub fn set(&self, reduced: bool) {
        let sink = {
            let mut state = self.shared.lock();
            state.supported = true;
            state.value = reduced;
            state.sink.clone()
        };
        if let Some(sink) = sink {
            sink.publish(reduced);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.shared.lock().sink.is_some()
    }
}

impl ReducedMotionSource for HostReducedMotionSignal {
    fn current(&self) -> Option<bool> {
        let state = self.shared.lock();
        state.supported.then_some(state.value)
    }

    fn attach(&mut self, sink: PreferenceSink) {
        self.shared.lock().sink = Some(sink);
    }

    fn detach(&mut self) {
        self.shared.lock().sink = None;
    }
}
