//! # Change Listeners
//!
//! Registry of zero-argument callbacks shared by every store.
//!
//! ```text
//!   subscribe(f) ──► Subscription { id, Weak<registry> }
//!
//!   notify():  lock ─► copy listeners ─► unlock ─► call each in order
//!                                                   │
//!                                                   └─ panic? warn! and continue
//! ```
//!
//! Listeners are called with no lock held, so they may read or mutate the
//! store that notified them.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::warn;

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Entries {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Ordered set of listeners for one store.
#[derive(Clone, Default)]
pub(crate) struct ListenerRegistry {
    inner: Arc<Mutex<Entries>>,
}

impl ListenerRegistry {
    pub(crate) fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut entries = self.inner.lock();
        let id = entries.next_id;
        entries.next_id += 1;
        entries.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Calls every listener registered at the time of the call.
    pub(crate) fn notify(&self, kind: &str) {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener())).is_err() {
                warn!(kind, "store listener panicked; continuing with the rest");
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to stop notifications.
#[must_use = "keep the subscription to be able to unsubscribe"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Entries>>,
}

impl Subscription {
    /// Removes exactly this listener. Calling it again is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.lock().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_in_subscription_order() {
        let registry = ListenerRegistry::default();
        let log = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let log = Arc::clone(&log);
            let _sub = registry.subscribe(move || log.lock().push(n));
        }
        registry.notify("test");

        assert_eq!(*log.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent_and_targeted() {
        let registry = ListenerRegistry::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let a = {
            let hits = Arc::clone(&hits);
            registry.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let _b = {
            let hits = Arc::clone(&hits);
            registry.subscribe(move || {
                hits.fetch_add(10, Ordering::SeqCst);
            })
        };

        a.unsubscribe();
        a.unsubscribe();
        registry.notify("test");

        assert_eq!(hits.load(Ordering::SeqCst), 10);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_panicking_listener_does_not_stop_others() {
        let registry = ListenerRegistry::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let _bad = registry.subscribe(|| panic!("listener failure"));
        let _good = {
            let hits = Arc::clone(&hits);
            registry.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        registry.notify("test");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_after_registry_dropped() {
        let registry = ListenerRegistry::default();
        let sub = registry.subscribe(|| {});
        drop(registry);
        sub.unsubscribe();
    }
}
