//! # Record Store
//!
//! Observable singleton value: the signed-in user's profile.
//! Same notification rules as [`crate::CollectionStore`], without ids.

use std::sync::Arc;

use barberhub_core::Patchable;
use parking_lot::RwLock;
use tracing::debug;

use crate::listeners::{ListenerRegistry, Subscription};

/// Observable single record.
pub struct RecordStore<T: Patchable> {
    value: Arc<RwLock<Arc<T>>>,
    listeners: ListenerRegistry,
}

impl<T: Patchable> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        RecordStore {
            value: Arc::clone(&self.value),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: Patchable + std::fmt::Debug> std::fmt::Debug for RecordStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("value", &self.get())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<T: Patchable> RecordStore<T> {
    pub fn new(value: T) -> Self {
        RecordStore {
            value: Arc::new(RwLock::new(Arc::new(value))),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Current value.
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.value.read())
    }

    /// Registers a listener called after every update.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Merges `patch` into a new value and notifies.
    pub fn update(&self, patch: T::Patch) {
        {
            let mut guard = self.value.write();
            let mut next = T::clone(&guard);
            next.apply(patch);
            *guard = Arc::new(next);
        }
        debug!("record updated");
        self.listeners.notify("record");
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::{UserPatch, UserProfile};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn user() -> UserProfile {
        UserProfile {
            name: "User via Google".into(),
            phone: "+44 7911 123456".into(),
            email: "user@google.com".into(),
            photo: None,
        }
    }

    #[test]
    fn test_update_merges_and_notifies() {
        let store = RecordStore::new(user());
        let hits = Arc::new(AtomicUsize::new(0));
        let sub = {
            let hits = Arc::clone(&hits);
            store.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let before = store.get();

        store.update(UserPatch {
            name: Some("Alex".into()),
            ..UserPatch::default()
        });

        let after = store.get();
        assert_eq!(after.name, "Alex");
        assert_eq!(after.email, "user@google.com");
        assert_eq!(before.name, "User via Google");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        sub.unsubscribe();
        store.update(UserPatch::default());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
