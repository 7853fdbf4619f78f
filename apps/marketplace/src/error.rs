//! # App Error Type
//!
//! Unified error type for the marketplace commands, plus the alert a screen
//! shows for it.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  FormErrors ─────────┐                                                  │
//! │  AuthError ──────────┼──► AppError ──► Alert { title, message }         │
//! │  permission denied ──┤                                                  │
//! │  config / I/O ───────┘                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use barberhub_auth::AuthError;
use barberhub_core::FormErrors;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// Submission attempted with invalid fields.
    #[error("{0}")]
    Form(#[from] FormErrors),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Photo library access refused.
    #[error("Please allow photo library access.")]
    PermissionDenied,

    /// A contact action on a listing without that channel.
    #[error("{0}")]
    NoContact(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoad(String),

    #[error("Failed to save config: {0}")]
    ConfigSave(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoad(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::ConfigSave(err.to_string())
    }
}

/// Result type for commands.
pub type AppResult<T> = Result<T, AppError>;

/// Blocking alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&AppError> for Alert {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Form(errors) => Alert::new("Missing information", errors.to_string()),
            AppError::PermissionDenied => Alert::new("Permission needed", err.to_string()),
            AppError::NoContact(message) => Alert::new("Not available", message.clone()),
            AppError::Auth(auth) => Alert::new("Sign-in failed", auth.to_string()),
            other => {
                tracing::error!(error = %other, "unexpected command failure");
                Alert::new("Error", "Something went wrong. Please try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::ValidationError;

    #[test]
    fn test_alerts() {
        let alert = Alert::from(&AppError::PermissionDenied);
        assert_eq!(alert.title, "Permission needed");

        let mut errors = FormErrors::new();
        errors.push(ValidationError::Required {
            field: "location".into(),
        });
        let alert = Alert::from(&AppError::from(errors));
        assert_eq!(alert.message, "location is required");

        let alert = Alert::from(&AppError::from(AuthError::MissingIdToken));
        assert_eq!(alert.message, "Google sign-in failed: missing idToken");

        let alert = Alert::from(&AppError::InvalidConfig("x".into()));
        assert_eq!(alert.title, "Error");
    }

    #[test]
    fn test_config_io_failure_is_a_generic_alert() {
        let err = std::fs::read_to_string("/definitely/not/here/marketplace.toml")
            .map_err(AppError::from)
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));

        let alert = Alert::from(&err);
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Something went wrong. Please try again.");
    }
}
