//! # Watched Snapshots
//!
//! A screen's local copy of a store snapshot, refreshed by a store listener.
//!
//! ```text
//!   mount ──► copy = store.get() ──► subscribe(|| copy = store.get())
//!   store mutation ──► listener ──► copy replaced ──► screen re-derives
//!   drop ──► unsubscribe
//! ```

use std::sync::Arc;

use barberhub_core::{Entity, Patchable};
use barberhub_store::{CollectionStore, RecordStore, Subscription};
use parking_lot::RwLock;

/// A store a screen can watch.
pub trait Observable: Clone + Send + Sync + 'static {
    type Snapshot: Clone + Send + Sync + 'static;

    fn snapshot(&self) -> Self::Snapshot;

    fn watch<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static;
}

impl<E: Entity> Observable for CollectionStore<E> {
    type Snapshot = Arc<Vec<E>>;

    fn snapshot(&self) -> Self::Snapshot {
        self.get()
    }

    fn watch<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(listener)
    }
}

impl<T: Patchable> Observable for RecordStore<T> {
    type Snapshot = Arc<T>;

    fn snapshot(&self) -> Self::Snapshot {
        self.get()
    }

    fn watch<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(listener)
    }
}

/// Local snapshot kept current while the screen is mounted.
pub struct Watched<S: Observable> {
    current: Arc<RwLock<S::Snapshot>>,
    subscription: Subscription,
}

impl<S: Observable> Watched<S> {
    pub fn mount(store: &S) -> Self {
        let current = Arc::new(RwLock::new(store.snapshot()));
        let slot = Arc::clone(&current);
        let source = store.clone();
        let subscription = store.watch(move || {
            *slot.write() = source.snapshot();
        });
        Watched {
            current,
            subscription,
        }
    }

    /// The copy as of the latest notification.
    pub fn get(&self) -> S::Snapshot {
        self.current.read().clone()
    }
}

impl<S: Observable> std::fmt::Debug for Watched<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watched")
            .field("subscription", &self.subscription)
            .finish()
    }
}

impl<S: Observable> Drop for Watched<S> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::{JobListing, NewJob, UserPatch};
    use barberhub_store::seed;

    #[test]
    fn test_tracks_collection_until_dropped() {
        let store: CollectionStore<JobListing> = CollectionStore::new();
        let watched = Watched::mount(&store);
        assert!(watched.get().is_empty());

        store.add(NewJob {
            shop_name: "Fade Bros".into(),
            location: "Leeds".into(),
            ..NewJob::default()
        });
        assert_eq!(watched.get().len(), 1);
        assert_eq!(store.listener_count(), 1);

        drop(watched);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_tracks_record() {
        let store = RecordStore::new(seed::default_user());
        let watched = Watched::mount(&store);
        store.update(UserPatch {
            name: Some("Alex".into()),
            ..UserPatch::default()
        });
        assert_eq!(watched.get().name, "Alex");
    }
}
