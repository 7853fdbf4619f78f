//! # Collection Store
//!
//! One generic observable store, instantiated for jobs, barbers and shops.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add(draft) / update(id, patch) / remove(id)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write lock ─► build new Vec<E> ─► swap in new Arc ─► unlock           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  listeners, in subscription order (no lock held)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  screens call get() and recompute their views                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Snapshots handed out by [`CollectionStore::get`] are never mutated;
//! every mutation installs a fresh `Arc`, so callers can compare snapshots
//! with `Arc::ptr_eq`.

use std::sync::Arc;

use barberhub_core::Entity;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::listeners::{ListenerRegistry, Subscription};

/// Observable, most-recent-first list of entities.
///
/// Cloning is cheap and yields another handle to the same store.
pub struct CollectionStore<E: Entity> {
    snapshot: Arc<RwLock<Arc<Vec<E>>>>,
    listeners: ListenerRegistry,
}

impl<E: Entity> Clone for CollectionStore<E> {
    fn clone(&self) -> Self {
        CollectionStore {
            snapshot: Arc::clone(&self.snapshot),
            listeners: self.listeners.clone(),
        }
    }
}

impl<E: Entity> Default for CollectionStore<E> {
    fn default() -> Self {
        Self::from_snapshot(Vec::new())
    }
}

impl<E: Entity> std::fmt::Debug for CollectionStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore")
            .field("kind", &E::KIND)
            .field("len", &self.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<E: Entity> CollectionStore<E> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `items`, first item most recent.
    pub fn from_snapshot(items: Vec<E>) -> Self {
        CollectionStore {
            snapshot: Arc::new(RwLock::new(Arc::new(items))),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Current snapshot.
    pub fn get(&self) -> Arc<Vec<E>> {
        Arc::clone(&self.snapshot.read())
    }

    /// Registers a listener called after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Creates an entity from `draft` with a fresh id and puts it first.
    pub fn add(&self, draft: E::Draft) -> E {
        let entity = E::create(Uuid::new_v4().to_string(), draft, Utc::now());
        let len = {
            let mut guard = self.snapshot.write();
            let mut next = Vec::with_capacity(guard.len() + 1);
            next.push(entity.clone());
            next.extend(guard.iter().cloned());
            *guard = Arc::new(next);
            guard.len()
        };
        debug!(kind = E::KIND, id = entity.id(), len, "entity added");
        self.listeners.notify(E::KIND);
        entity
    }

    /// Merges `patch` into the entity with `id`.
    ///
    /// Returns whether an entity matched. The snapshot is replaced and
    /// listeners are notified either way.
    pub fn update(&self, id: &str, patch: E::Patch) -> bool {
        let found = {
            let mut guard = self.snapshot.write();
            let mut next: Vec<E> = (**guard).clone();
            let found = match next.iter_mut().find(|e| e.id() == id) {
                Some(entity) => {
                    entity.apply(patch);
                    true
                }
                None => false,
            };
            *guard = Arc::new(next);
            found
        };
        debug!(kind = E::KIND, id, found, "entity updated");
        self.listeners.notify(E::KIND);
        found
    }

    /// Drops the entity with `id`. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        let (found, len) = {
            let mut guard = self.snapshot.write();
            let next: Vec<E> = guard.iter().filter(|e| e.id() != id).cloned().collect();
            let found = next.len() != guard.len();
            *guard = Arc::new(next);
            (found, guard.len())
        };
        debug!(kind = E::KIND, id, found, len, "entity removed");
        self.listeners.notify(E::KIND);
        found
    }

    /// Looks up one entity by id.
    pub fn find(&self, id: &str) -> Option<E> {
        self.snapshot.read().iter().find(|e| e.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::{
        BarberPatch, BarberProfile, JobListing, JobPatch, JobType, NewBarber, NewJob, Region,
    };
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_cuts() -> NewJob {
        NewJob {
            shop_name: "Test Cuts".into(),
            location: "London, Soho".into(),
            salary_text: "£12/hour".into(),
            phone: "+447000000000".into(),
            ..NewJob::default()
        }
    }

    fn counter(store: &CollectionStore<JobListing>) -> (Arc<AtomicUsize>, Subscription) {
        let hits = Arc::new(AtomicUsize::new(0));
        let sub = {
            let hits = Arc::clone(&hits);
            store.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        (hits, sub)
    }

    #[test]
    fn test_add_prepends_with_fresh_id() {
        let store = CollectionStore::<JobListing>::new();
        let first = store.add(test_cuts());
        let second = store.add(NewJob {
            job_type: Some(JobType::Contract),
            ..test_cuts()
        });

        let snapshot = store.get();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, second.id);
        assert_eq!(snapshot[1].id, first.id);
        assert_ne!(first.id, second.id);
        assert_eq!(snapshot[1].job_type, JobType::FullTime);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = CollectionStore::<JobListing>::new();
        let ids: HashSet<String> = (0..200).map(|_| store.add(test_cuts()).id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_update_overwrites_only_patched_fields() {
        let store = CollectionStore::<JobListing>::new();
        let job = store.add(test_cuts());

        let found = store.update(
            &job.id,
            JobPatch {
                salary_text: Some("£15/hour".into()),
                ..JobPatch::default()
            },
        );

        assert!(found);
        let updated = store.find(&job.id).unwrap();
        assert_eq!(updated.salary_text, "£15/hour");
        assert_eq!(updated.shop_name, job.shop_name);
        assert_eq!(updated.location, job.location);
    }

    #[test]
    fn test_update_unknown_id_replaces_snapshot_without_changes() {
        let store = CollectionStore::<BarberProfile>::new();
        store.add(NewBarber::new("Marcus Johnson", Region::London));
        let (hits, _sub) = {
            let hits = Arc::new(AtomicUsize::new(0));
            let h = Arc::clone(&hits);
            let sub = store.subscribe(move || {
                h.fetch_add(1, Ordering::SeqCst);
            });
            (hits, sub)
        };
        let before = store.get();

        let found = store.update(
            "nonexistent-id",
            BarberPatch {
                name: Some("X".into()),
                ..BarberPatch::default()
            },
        );

        let after = store.get();
        assert!(!found);
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
        assert!(after.iter().all(|b| b.name != "X"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove() {
        let store = CollectionStore::<JobListing>::new();
        let job = store.add(test_cuts());
        store.add(test_cuts());
        let (hits, _sub) = counter(&store);
        let before = store.get();

        assert!(!store.remove("missing"));
        assert_eq!(store.len(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!Arc::ptr_eq(&before, &store.get()));
        assert_eq!(*before, *store.get());

        assert!(store.remove(&job.id));
        assert_eq!(store.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(store.find(&job.id).is_none());
    }

    #[test]
    fn test_every_mutation_notifies_until_unsubscribed() {
        let store = CollectionStore::<JobListing>::new();
        let (hits, sub) = counter(&store);

        let job = store.add(test_cuts());
        store.update(&job.id, JobPatch::default());
        store.remove(&job.id);
        assert_eq!(hits.load(Ordering::SeqCst), 3);

        sub.unsubscribe();
        store.add(test_cuts());
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_read_store_during_notification() {
        let store = CollectionStore::<JobListing>::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let store = store.clone();
            let seen = Arc::clone(&seen);
            store.clone().subscribe(move || {
                seen.store(store.get().len(), Ordering::SeqCst);
            })
        };

        store.add(test_cuts());
        store.add(test_cuts());
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_listener_keeps_mutation() {
        let store = CollectionStore::<JobListing>::new();
        let _bad = store.subscribe(|| panic!("boom"));
        let (hits, _sub) = counter(&store);

        store.add(test_cuts());
        assert_eq!(store.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
