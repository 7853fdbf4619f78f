//! # Derived Views
//!
//! What the list screens render, computed from a snapshot and the screen's
//! filter state. Every function here is a full scan that keeps snapshot
//! order (most recent first).
//!
//! ```text
//!   snapshot ──► RegionFilter ──► JobTypeFilter ──► visible rows
//!   snapshot ──► owned_by(email) ──► MyListings { jobs, shops, barbers }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{BarberProfile, JobListing, JobType, Region, ShopListing};
use crate::Entity;

// =============================================================================
// Filters
// =============================================================================

/// Region picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// Whether a listing in `city` passes. Comparison is exact.
    pub fn admits(&self, city: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(region) => region.as_str() == city,
        }
    }

    /// Picker options: "All Regions" followed by each region.
    pub fn options() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::All)
            .chain(Region::ALL.into_iter().map(RegionFilter::Only))
            .collect()
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str("All Regions"),
            RegionFilter::Only(region) => write!(f, "{}", region),
        }
    }
}

/// Job type picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum JobTypeFilter {
    #[default]
    All,
    Only(JobType),
}

impl JobTypeFilter {
    pub fn admits(&self, job_type: JobType) -> bool {
        match self {
            JobTypeFilter::All => true,
            JobTypeFilter::Only(t) => *t == job_type,
        }
    }

    pub fn options() -> Vec<JobTypeFilter> {
        std::iter::once(JobTypeFilter::All)
            .chain(JobType::ALL.into_iter().map(JobTypeFilter::Only))
            .collect()
    }
}

impl fmt::Display for JobTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobTypeFilter::All => f.write_str("All Types"),
            JobTypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

/// Combined filter state of the jobs screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobFilter {
    pub region: RegionFilter,
    pub job_type: JobTypeFilter,
}

impl JobFilter {
    /// Jobs passing both filters, in snapshot order.
    ///
    /// ## Example
    /// ```rust
    /// use barberhub_core::views::{JobFilter, RegionFilter};
    /// use barberhub_core::Region;
    ///
    /// let filter = JobFilter {
    ///     region: RegionFilter::Only(Region::London),
    ///     ..JobFilter::default()
    /// };
    /// assert!(filter.apply(&[]).is_empty());
    /// ```
    pub fn apply<'a>(&self, jobs: &'a [JobListing]) -> Vec<&'a JobListing> {
        jobs.iter()
            .filter(|j| self.region.admits(j.region_city()) && self.job_type.admits(j.job_type))
            .collect()
    }
}

/// Barbers whose city matches the region filter.
pub fn filter_barbers<'a>(barbers: &'a [BarberProfile], region: RegionFilter) -> Vec<&'a BarberProfile> {
    barbers
        .iter()
        .filter(|b| region.admits(b.city.as_str()))
        .collect()
}

/// Shops whose effective city matches the region filter.
pub fn filter_shops<'a>(shops: &'a [ShopListing], region: RegionFilter) -> Vec<&'a ShopListing> {
    shops
        .iter()
        .filter(|s| region.admits(s.region_city()))
        .collect()
}

// =============================================================================
// Ownership
// =============================================================================

/// Entities that remember who created them.
pub trait Owned {
    fn owner_email(&self) -> Option<&str>;
}

impl Owned for JobListing {
    fn owner_email(&self) -> Option<&str> {
        self.owner_email.as_deref()
    }
}

impl Owned for ShopListing {
    fn owner_email(&self) -> Option<&str> {
        self.owner_email.as_deref()
    }
}

impl Owned for BarberProfile {
    fn owner_email(&self) -> Option<&str> {
        self.owner_email.as_deref()
    }
}

/// Entities created by `email`. Exact, case-sensitive match.
pub fn owned_by<'a, T: Owned>(items: &'a [T], email: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.owner_email() == Some(email))
        .collect()
}

/// Tabs of the profile's "My Listings" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MyListingsTab {
    #[default]
    Jobs,
    Shops,
    Barbers,
}

/// The signed-in user's own listings, grouped by tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyListings {
    pub jobs: Vec<JobListing>,
    pub shops: Vec<ShopListing>,
    pub barbers: Vec<BarberProfile>,
}

impl MyListings {
    pub fn collect(
        email: &str,
        jobs: &[JobListing],
        shops: &[ShopListing],
        barbers: &[BarberProfile],
    ) -> Self {
        MyListings {
            jobs: owned_by(jobs, email).into_iter().cloned().collect(),
            shops: owned_by(shops, email).into_iter().cloned().collect(),
            barbers: owned_by(barbers, email).into_iter().cloned().collect(),
        }
    }

    /// Number of entries under a tab, shown in the tab label.
    pub fn count(&self, tab: MyListingsTab) -> usize {
        match tab {
            MyListingsTab::Jobs => self.jobs.len(),
            MyListingsTab::Shops => self.shops.len(),
            MyListingsTab::Barbers => self.barbers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.shops.is_empty() && self.barbers.is_empty()
    }
}

// =============================================================================
// Shortcuts
// =============================================================================

/// Id of the most recent entity, used by the featured shortcut and by
/// screens opened with auto-open.
pub fn first_id<E: Entity>(items: &[E]) -> Option<&str> {
    items.first().map(Entity::id)
}

/// Home screen greeting.
pub fn greeting(name: &str) -> String {
    match name.trim() {
        "" => "Hi there".to_string(),
        name => format!("Hi, {}", name),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
