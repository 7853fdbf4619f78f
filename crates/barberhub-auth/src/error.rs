//! # Auth Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Auth Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Response     │  │       Provider          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │ MissingClientId │  │ MissingIdToken  │  │  InvalidCredential      │ │
//! │  │                 │  │                 │  │  Provider               │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Failures surfaced to the sign-in screen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No OAuth client id configured for the requesting platform.
    #[error("Google sign-in is not configured for {platform}")]
    MissingClientId { platform: String },

    /// Provider response carried no id token.
    #[error("Google sign-in failed: missing idToken")]
    MissingIdToken,

    /// The identity provider rejected the credential.
    #[error("Google sign-in failed: credential rejected")]
    InvalidCredential,

    /// Any other provider failure.
    #[error("Identity provider error: {0}")]
    Provider(String),
}
