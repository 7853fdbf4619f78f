//! # barberhub-store: Observable State for BarberHub
//!
//! This crate owns the marketplace's in-memory collections and the
//! persisted session flag.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       BarberHub Data Flow                               │
//! │                                                                         │
//! │  Screen submits a form                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 barberhub-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌───────────────┐   ┌───────────────┐   │   │
//! │  │   │ CollectionStore│   │  RecordStore  │   │ SessionStore  │   │   │
//! │  │   │ jobs/barbers/  │   │  user         │   │ app.hasEntered│   │   │
//! │  │   │ shops          │   │               │   │               │   │   │
//! │  │   └───────┬────────┘   └───────┬───────┘   └───────┬───────┘   │   │
//! │  │           └──── listeners ─────┘                   │           │   │
//! │  └────────────────────────────────────────────────────┼───────────┘   │
//! │       │                                               ▼               │
//! │       ▼                                      SecureStorage backend    │
//! │  Screens re-read get() and recompute views   (memory | file | none)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Generic observable list store
//! - [`record`] - Observable singleton store
//! - [`stores`] - The `Marketplace` bundle handed to screens
//! - [`seed`] - Demo listings
//! - [`session`] - Session flag and storage backends
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use barberhub_core::NewJob;
//! use barberhub_store::Marketplace;
//!
//! let market = Marketplace::seeded();
//! let sub = market.jobs.subscribe(|| println!("jobs changed"));
//!
//! let job = market.jobs.add(NewJob {
//!     shop_name: "Test Cuts".into(),
//!     location: "London, Soho".into(),
//!     ..NewJob::default()
//! });
//! assert_eq!(market.jobs.get()[0].id, job.id);
//!
//! sub.unsubscribe();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
mod listeners;
pub mod record;
pub mod seed;
pub mod session;
pub mod stores;

// =============================================================================
// Re-exports
// =============================================================================

pub use collection::CollectionStore;
pub use error::{StoreError, StoreResult};
pub use listeners::Subscription;
pub use record::RecordStore;
pub use session::{
    FileStorage, MemoryStorage, SecureStorage, SessionStore, StorageBackend, SESSION_KEY,
};
pub use stores::Marketplace;
