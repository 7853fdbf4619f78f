//! # Marketplace Stores
//!
//! The four stores the app constructs once and hands to every screen.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Marketplace                                               │
//! │  ├── jobs:    CollectionStore<JobListing>                  │
//! │  ├── barbers: CollectionStore<BarberProfile>               │
//! │  ├── shops:   CollectionStore<ShopListing>                 │
//! │  └── user:    RecordStore<UserProfile>                     │
//! └────────────────────────────────────────────────────────────┘
//! ```

use barberhub_core::{BarberProfile, JobListing, ShopListing, UserProfile};
use chrono::Utc;
use tracing::info;

use crate::collection::CollectionStore;
use crate::record::RecordStore;
use crate::seed;

/// Handles to every store. Clones share the same stores.
#[derive(Debug, Clone)]
pub struct Marketplace {
    pub jobs: CollectionStore<JobListing>,
    pub barbers: CollectionStore<BarberProfile>,
    pub shops: CollectionStore<ShopListing>,
    pub user: RecordStore<UserProfile>,
}

impl Marketplace {
    /// Empty collections around the given user.
    pub fn new(user: UserProfile) -> Self {
        Marketplace {
            jobs: CollectionStore::new(),
            barbers: CollectionStore::new(),
            shops: CollectionStore::new(),
            user: RecordStore::new(user),
        }
    }

    /// Stores preloaded with the demo listings and default user.
    pub fn seeded() -> Self {
        let marketplace = Marketplace {
            jobs: CollectionStore::from_snapshot(seed::jobs()),
            barbers: CollectionStore::from_snapshot(seed::barbers(Utc::now())),
            shops: CollectionStore::from_snapshot(seed::shops()),
            user: RecordStore::new(seed::default_user()),
        };
        info!(
            jobs = marketplace.jobs.len(),
            barbers = marketplace.barbers.len(),
            shops = marketplace.shops.len(),
            "marketplace seeded"
        );
        marketplace
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new(seed::default_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::NewJob;

    #[test]
    fn test_seeded_marketplace() {
        let m = Marketplace::seeded();
        assert_eq!(m.jobs.len(), 2);
        assert_eq!(m.barbers.len(), 3);
        assert_eq!(m.shops.len(), 2);
        assert_eq!(m.user.get().email, "user@google.com");
    }

    #[test]
    fn test_clones_share_state() {
        let m = Marketplace::default();
        let other = m.clone();
        other.jobs.add(NewJob::default());
        assert_eq!(m.jobs.len(), 1);
        assert!(m.barbers.is_empty());
    }
}
