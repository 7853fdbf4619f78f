//! # barberhub-core: Pure Domain Logic for BarberHub
//!
//! This crate is the **heart** of the BarberHub marketplace. It holds every
//! entity shape, the typed drafts and patches that stores accept, the form
//! rules the screens enforce and the derived views they render.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       BarberHub Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Screens (apps/marketplace)                      │   │
//! │  │   Home ──► Jobs ──► Barbers ──► Shops ──► Profile               │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │ subscribe / get             │ filters, forms         │
//! │  ┌───────────────▼──────────────┐              │                        │
//! │  │  barberhub-store             │              │                        │
//! │  │  jobs │ barbers │ shops │ user│              │                        │
//! │  └───────────────┬──────────────┘              │                        │
//! │                  │ Entity / Patchable          │                        │
//! │  ┌───────────────▼─────────────────────────────▼───────────────────┐   │
//! │  │               ★ barberhub-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │  ┌────────┐ ┌────────┐ ┌──────────┐ ┌───────┐ ┌──────────────┐  │   │
//! │  │  │ types  │ │ entity │ │ location │ │ money │ │ forms/views  │  │   │
//! │  │  └────────┘ └────────┘ └──────────┘ └───────┘ └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO SHARED STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (JobListing, BarberProfile, ShopListing, UserProfile)
//! - [`entity`] - The `Entity` / `Patchable` seam the stores are generic over
//! - [`money`] - Whole-pound GBP prices
//! - [`location`] - "City, Area" parsing
//! - [`validation`] - Field rules
//! - [`forms`] - Form state for the post/list/add/profile screens
//! - [`views`] - Region/type filters and "my listings"
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use barberhub_core::{Entity, JobListing, JobType, NewJob};
//! use chrono::Utc;
//!
//! let draft = NewJob {
//!     shop_name: "  Test Cuts ".into(),
//!     location: "London, Soho".into(),
//!     salary_text: "£12/hour".into(),
//!     phone: "+447000000000".into(),
//!     ..NewJob::default()
//! };
//!
//! let job = JobListing::create("job-1".into(), draft, Utc::now());
//! assert_eq!(job.shop_name, "Test Cuts");
//! assert_eq!(job.job_type, JobType::FullTime);
//! assert_eq!(job.city, "London");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entity;
pub mod error;
pub mod forms;
pub mod location;
pub mod money;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use entity::{Entity, Patchable};
pub use error::{CoreError, CoreResult, FormErrors, ValidationError};
pub use money::Gbp;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum photos attached to a job listing.
pub const MAX_JOB_PHOTOS: usize = 3;

/// Maximum photos attached to a shop listing.
pub const MAX_SHOP_PHOTOS: usize = 4;

/// Maximum photos for a barber or user avatar.
pub const MAX_AVATAR_PHOTOS: usize = 1;

/// Title shown on job cards when the poster gives none.
pub const DEFAULT_JOB_TITLE: &str = "Barber";

/// Number of skills a barber card shows.
pub const CARD_SKILL_LIMIT: usize = 3;
