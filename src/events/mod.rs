//! Synchronous state-change fan-out.
//!
//! Observers are invoked in registration order, once immediately on
//! subscribe with the current snapshot, then once per applied command. No
//! coalescing and no backpressure: observers are expected to be cheap
//! (typically a view re-render).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::state::StateSnapshot;

type Observer = Box<dyn FnMut(&StateSnapshot) + Send>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    observers: Mutex<Vec<(u64, Observer)>>,
}

/// Ordered set of state observers. Cloning shares the underlying registry.
#[derive(Clone, Default)]
pub struct SubscriberSet {
    registry: Arc<Registry>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer and immediately invokes it with `current`, so
    /// late subscribers do not need a separate initial fetch.
    pub fn subscribe(
        &self,
        mut observer: Observer,
        current: &StateSnapshot,
    ) -> Subscription {
        observer(current);

        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let mut observers = self
            .registry
            .observers
            .lock()
            .expect("subscriber registry poisoned");
        observers.push((id, observer));
        debug!(subscriber_id = id, total = observers.len(), "observer subscribed");

        Subscription {
            set: self.clone(),
            id,
        }
    }

    /// Invokes every observer with `snapshot`, in registration order.
    pub fn notify(&self, snapshot: &StateSnapshot) {
        let mut observers = self
            .registry
            .observers
            .lock()
            .expect("subscriber registry poisoned");
        for (_, observer) in observers.iter_mut() {
            observer(snapshot);
        }
    }

    fn remove(&self, id: u64) {
        let mut observers = self
            .registry
            .observers
            .lock()
            .expect("subscriber registry poisoned");
        observers.retain(|(observer_id, _)| *observer_id != id);
        debug!(subscriber_id = id, total = observers.len(), "observer unsubscribed");
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.registry
            .observers
            .lock()
            .expect("subscriber registry poisoned")
            .len()
    }
}

/// Handle returned by [`SubscriberSet::subscribe`]. Dropping the handle does
/// not unsubscribe; call [`Subscription::unsubscribe`] explicitly.
pub struct Subscription {
    set: SubscriberSet,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        self.set.remove(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn subscribe_invokes_immediately_with_current_snapshot() {
        let set = SubscriberSet::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let subscription = set.subscribe(
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            &StateSnapshot::default(),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        subscription.unsubscribe();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn notify_runs_in_registration_order() {
        let set = SubscriberSet::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let snapshot = StateSnapshot::default();

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            set.subscribe(
                Box::new(move |_| order.lock().unwrap().push(tag)),
                &snapshot,
            );
        }
        order.lock().unwrap().clear();

        set.notify(&snapshot);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribed_observer_sees_no_further_notifications() {
        let set = SubscriberSet::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let snapshot = StateSnapshot::default();

        let subscription = set.subscribe(
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            &snapshot,
        );
        subscription.unsubscribe();
        set.notify(&snapshot);

        // One call from the initial invocation, none after unsubscribe.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
