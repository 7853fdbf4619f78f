//! # Store Error Types
//!
//! Errors raised by the secure storage backends behind the session flag.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionStore ← logs with warn! and degrades to the safe default       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Collection stores never fail: an unknown id on `update`/`remove` is a
//! no-op reported as `false`.

use thiserror::Error;

/// Secure storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend refused or failed the operation.
    #[error("Storage unavailable: {0}")]
    Storage(String),

    /// Reading or writing the backing file failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file does not contain a JSON string map.
    #[error("Corrupt storage file: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
