//! # Error Types
//!
//! Domain-specific error types for barberhub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barberhub-core errors (this file)                                     │
//! │  ├── CoreError        - Domain parsing failures                        │
//! │  ├── ValidationError  - One field failing one rule                     │
//! │  └── FormErrors       - Every failing field of a form                  │
//! │                                                                         │
//! │  barberhub-store      └── StoreError  - Secure storage backends        │
//! │  barberhub-auth       └── AuthError   - Identity provider failures     │
//! │  apps/marketplace     └── AppError    - What a screen sees             │
//! │                                                                         │
//! │  Flow: ValidationError → FormErrors → AppError → inline field message  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form failures are values, not panics. A screen renders
//! [`FormErrors::message`] next to the field and blocks submission.

use std::collections::BTreeMap;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised while parsing enumerations and inputs.
#[derive(Debug, Error)]
pub enum CoreError {
    /// City is not one of the four supported regions.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Job type label is not recognised.
    #[error("Unknown job type: {0}")]
    UnknownJobType(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Invalid format (e.g., malformed email or phone).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// More items than the field allows.
    #[error("{field} allows at most {max} items")]
    TooMany { field: String, max: usize },
}

impl ValidationError {
    /// Name of the field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooMany { field, .. } => field,
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// Per-field validation results for one form.
///
/// At most one error is kept per field; the first failing rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, ValidationError>,
}

impl FormErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error from a validator result, if any.
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Records an error unless the field already has one.
    pub fn push(&mut self, err: ValidationError) {
        self.fields.entry(err.field().to_string()).or_insert(err);
    }

    /// Returns the error for a field.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.fields.get(field)
    }

    /// Returns the message shown next to a field.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Failing field names in alphabetical order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Converts into `Ok(value)` when there are no errors.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.fields.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "location".to_string(),
        };
        assert_eq!(err.to_string(), "location is required");

        let err = ValidationError::TooShort {
            field: "shopName".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "shopName must be at least 3 characters");
    }

    #[test]
    fn test_form_errors_keep_first_error_per_field() {
        let mut errors = FormErrors::new();
        errors.push(ValidationError::Required {
            field: "name".to_string(),
        });
        errors.push(ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        });

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("name").as_deref(), Some("name is required"));
        assert!(errors.get("phone").is_none());
    }

    #[test]
    fn test_form_errors_into_result() {
        assert_eq!(FormErrors::new().into_result(7).unwrap(), 7);

        let mut errors = FormErrors::new();
        let parsed: Option<u32> = errors.check(Err(ValidationError::Required {
            field: "price".to_string(),
        }));
        assert!(parsed.is_none());
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
