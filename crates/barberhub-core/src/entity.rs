//! # Entity Seam
//!
//! The two traits the observable stores are generic over.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Patchable            Entity: Patchable                               │
//! │   ──────────           ─────────────────                               │
//! │   type Patch           type Draft                                      │
//! │   apply(patch)         KIND, id()                                      │
//! │                        create(id, draft, now)                          │
//! │                                                                         │
//! │   UserProfile          JobListing, BarberProfile, ShopListing          │
//! │   (RecordStore)        (CollectionStore)                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

/// A record that can be shallow-merged with a typed patch.
///
/// A patch lists exactly the fields that may change. Fields left as `None`
/// in the patch are left untouched on the record.
pub trait Patchable: Clone + Send + Sync + 'static {
    /// The typed partial update for this record.
    type Patch: Clone + Send + Sync;

    /// Overwrites every field present in `patch`.
    fn apply(&mut self, patch: Self::Patch);
}

/// A record kept in an id-addressed collection.
pub trait Entity: Patchable {
    /// Raw input accepted by a store's `add`.
    type Draft: Send;

    /// Short name used in log fields ("job", "barber", "shop").
    const KIND: &'static str;

    /// Unique identifier within its store.
    fn id(&self) -> &str;

    /// Builds a normalised entity from a draft.
    ///
    /// Trims strings, fills defaults and derives fields. The id and the
    /// clock are supplied by the store so this stays deterministic.
    fn create(id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;
}
