//! # Commands Module
//!
//! Everything a screen can ask the app to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── jobs.rs     ◄─── Post / edit a job
//! ├── shops.rs    ◄─── List / edit a shop
//! ├── barbers.rs  ◄─── Create / edit a barber profile
//! ├── profile.rs  ◄─── Save profile, delete own listings, sign out
//! ├── session.rs  ◄─── Welcome flow and Google sign-in
//! └── contact.rs  ◄─── Dial / email links on detail screens
//! ```
//!
//! ## Command Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  screen form ──► command(state parts it needs, form, editing id)        │
//! │                     │                                                   │
//! │                     ├── invalid ──► Err(AppError::Form) ──► field hints │
//! │                     │                                                   │
//! │                     ├── simulated delay (jobs 800 ms, shops 600 ms)     │
//! │                     │                                                   │
//! │                     └── add / update store ──► Ok(Alert) ──► Route::Back│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes only the state it touches, so tests build just that.

pub mod barbers;
pub mod contact;
pub mod jobs;
pub mod profile;
pub mod session;
pub mod shops;
