use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use iconmotion_core::observer::{
    HostReducedMotionSignal, PreferenceSink, ReducedMotionSource, SystemPreferenceObserver,
};

/// it should attach the host source on the first subscription and detach on the last
#[test]
fn attach_on_first_detach_on_last() {
    let observer = SystemPreferenceObserver::new();
    let signal = HostReducedMotionSignal::new(false);
    observer.install_source(Box::new(signal.clone()));
    assert!(!signal.is_attached());
    assert!(!observer.is_listening());

    let a = observer.subscribe(|_| {});
    assert!(signal.is_attached());
    let b = observer.subscribe(|_| {});
    assert_eq!(observer.subscriber_count(), 2);

    a.unsubscribe();
    assert!(signal.is_attached());
    drop(b);
    assert_eq!(observer.subscriber_count(), 0);
    assert!(!signal.is_attached());
    assert!(!observer.is_listening());

    // a later subscriber re-attaches
    let _c = observer.subscribe(|_| {});
    assert!(signal.is_attached());
}

/// it should deliver changes to every subscriber and expose the latest value
#[test]
fn changes_reach_subscribers() {
    let observer = SystemPreferenceObserver::new();
    let signal = HostReducedMotionSignal::new(false);
    observer.install_source(Box::new(signal.clone()));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_a = Arc::clone(&seen);
    let _a = observer.subscribe(move |v| seen_a.lock().unwrap().push(("a", v)));
    let seen_b = Arc::clone(&seen);
    let _b = observer.subscribe(move |v| seen_b.lock().unwrap().push(("b", v)));

    assert!(!observer.prefers_reduced_motion());
    signal.set(true);
    assert!(observer.prefers_reduced_motion());
    // repeated value is not a change
    signal.set(true);
    signal.set(false);

    let seen = seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![("a", true), ("b", true), ("a", false), ("b", false)]
    );
}

/// it should stop notifying once unsubscribed
#[test]
fn unsubscribed_callbacks_are_silent() {
    let observer = SystemPreferenceObserver::new();
    let signal = HostReducedMotionSignal::new(false);
    observer.install_source(Box::new(signal.clone()));

    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    let sub = observer.subscribe(move |_| {
        h.fetch_add(1, Ordering::SeqCst);
    });
    let keep = observer.subscribe(|_| {});
    let id = sub.id();
    assert!(observer.unsubscribe(id));
    assert!(!observer.unsubscribe(id));
    // the handle's own release is a no-op now
    drop(sub);

    signal.set(true);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(observer.subscriber_count(), 1);
    drop(keep);
}

/// it should read false when the host cannot report the preference
#[test]
fn unsupported_host_reads_false() {
    let observer = SystemPreferenceObserver::new();
    assert!(!observer.prefers_reduced_motion());

    observer.install_source(Box::new(HostReducedMotionSignal::unsupported()));
    assert!(!observer.prefers_reduced_motion());
    let _s = observer.subscribe(|_| {});
    assert!(!observer.prefers_reduced_motion());
}

/// it should poll the source while nobody listens
#[test]
fn polls_without_subscribers() {
    let observer = SystemPreferenceObserver::new();
    let signal = HostReducedMotionSignal::new(true);
    observer.install_source(Box::new(signal.clone()));
    assert!(observer.prefers_reduced_motion());
    signal.set(false);
    assert!(!observer.prefers_reduced_motion());
}

struct CountingSource {
    attaches: Arc<AtomicUsize>,
    detaches: Arc<AtomicUsize>,
    publish_on_attach: bool,
}

impl ReducedMotionSource for CountingSource {
    fn current(&self) -> Option<bool> {
        Some(false)
    }

    fn attach(&mut self, sink: PreferenceSink) {
        self.attaches.fetch_add(1, Ordering::SeqCst);
        if self.publish_on_attach {
            sink.publish(true);
        }
    }

    fn detach(&mut self) {
        self.detaches.fetch_add(1, Ordering::SeqCst);
    }
}

/// it should let a source publish synchronously from attach
#[test]
fn source_may_publish_during_attach() {
    let observer = SystemPreferenceObserver::new();
    let attaches = Arc::new(AtomicUsize::new(0));
    let detaches = Arc::new(AtomicUsize::new(0));
    observer.install_source(Box::new(CountingSource {
        attaches: Arc::clone(&attaches),
        detaches: Arc::clone(&detaches),
        publish_on_attach: true,
    }));

    let fired = Arc::new(AtomicBool::new(false));
    let f = Arc::clone(&fired);
    let sub = observer.subscribe(move |v| f.store(v, Ordering::SeqCst));
    assert!(fired.load(Ordering::SeqCst));
    assert!(observer.prefers_reduced_motion());
    assert_eq!(attaches.load(Ordering::SeqCst), 1);

    sub.unsubscribe();
    assert_eq!(detaches.load(Ordering::SeqCst), 1);
}

/// it should swap an attached source for a new one without losing subscribers
#[test]
fn replacing_an_attached_source() {
    let observer = SystemPreferenceObserver::new();
    let first = HostReducedMotionSignal::new(false);
    let second = HostReducedMotionSignal::new(true);
    observer.install_source(Box::new(first.clone()));
    let _s = observer.subscribe(|_| {});
    assert!(first.is_attached());

    observer.install_source(Box::new(second.clone()));
    assert!(!first.is_attached());
    assert!(second.is_attached());
    assert!(observer.prefers_reduced_motion());
}

/// it should hand out one process-wide observer
#[test]
fn global_is_shared() {
    let a = SystemPreferenceObserver::global();
    let b = SystemPreferenceObserver::global();
    assert!(std::ptr::eq(a, b));
}
