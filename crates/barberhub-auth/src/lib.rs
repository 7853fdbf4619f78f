//! # barberhub-auth: Google Sign-In for BarberHub
//!
//! Thin adapter over an external identity provider.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Welcome screen ──► AuthService::request_builder(platform)             │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                   Google account picker (outside the app)              │
//! │                          │ ProviderResponse                             │
//! │                          ▼                                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 barberhub-auth (THIS CRATE)                     │   │
//! │  │   config ─► adapter::AuthService ─► provider::IdentityProvider  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                          │ watch::Receiver<Option<AuthUser>>            │
//! │                          ▼                                              │
//! │                   app gates tabs on the current user                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Google OAuth client ids per platform
//! - [`adapter`] - Request builder, provider responses, `AuthService`
//! - [`provider`] - `IdentityProvider` trait and the in-process provider
//! - [`error`] - Auth error types

pub mod adapter;
pub mod config;
pub mod error;
pub mod provider;

pub use adapter::{
    is_first_session, AuthService, Authentication, Platform, ProviderResponse, ResponseKind,
    SignInRequest, SignInRequestBuilder,
};
pub use config::{GoogleClientIds, OAuthConfig};
pub use error::{AuthError, AuthResult};
pub use provider::{
    AccountProfile, AuthUser, GoogleCredential, IdentityProvider, LocalIdentityProvider,
    UserMetadata,
};
