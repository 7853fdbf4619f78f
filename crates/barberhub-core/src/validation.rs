//! # Validation Module
//!
//! Field rules shared by every form in the app.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Field validators (THIS MODULE)                               │
//! │  ├── required / min length                                             │
//! │  ├── email and phone shapes                                            │
//! │  └── price input, photo budgets                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Form validators (forms.rs)                                   │
//! │  └── collect every failing field into FormErrors                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Screen                                                       │
//! │  └── message next to the field, submit button disabled                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barberhub_core::validation::{validate_email, validate_phone, PhoneRule};
//!
//! assert!(validate_email("email", "user@google.com").is_ok());
//! assert!(validate_phone("phone", "+44 7000 000000", PhoneRule::LISTING).is_ok());
//! assert!(validate_phone("phone", "12345", PhoneRule::LISTING).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Gbp;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Requires a non-blank value and returns it trimmed.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Requires at least `min` characters after trimming.
///
/// ## Example
/// ```rust
/// use barberhub_core::validation::validate_min_chars;
///
/// assert!(validate_min_chars("shopName", "Fade Bros", 3).is_ok());
/// assert!(validate_min_chars("shopName", " ab ", 3).is_err());
/// ```
pub fn validate_min_chars(field: &str, value: &str, min: usize) -> ValidationResult<String> {
    let value = validate_required(field, value)?;
    if value.chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    Ok(value)
}

/// Validates an email address.
///
/// ## Rules
/// Loose shape check: something, `@`, something, `.`, something.
/// Deliverability is the identity provider's problem, not ours.
pub fn validate_email(field: &str, value: &str) -> ValidationResult<String> {
    let value = validate_required(field, value)?;
    if !looks_like_email(&value) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }
    Ok(value)
}

fn looks_like_email(s: &str) -> bool {
    s.char_indices().any(|(at, c)| {
        if c != '@' || at == 0 {
            return false;
        }
        let domain = &s[at + 1..];
        domain
            .char_indices()
            .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

// =============================================================================
// Phone Validation
// =============================================================================

/// Shape a phone number must have.
///
/// Every rule accepts an optional leading `+` and a leading digit, followed
/// by a tail of `min_tail..=max_tail` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule {
    /// Minimum characters after the first digit.
    pub min_tail: usize,
    /// Maximum characters after the first digit.
    pub max_tail: Option<usize>,
    /// Whether the tail may contain spaces.
    pub allow_spaces: bool,
}

impl PhoneRule {
    /// Job and shop listings: `+447000000000`, `+44 7000 000000`.
    pub const LISTING: PhoneRule = PhoneRule {
        min_tail: 7,
        max_tail: None,
        allow_spaces: true,
    };

    /// The user's own profile is slightly more forgiving.
    pub const PROFILE: PhoneRule = PhoneRule {
        min_tail: 6,
        max_tail: None,
        allow_spaces: true,
    };

    /// Barber profiles: 7 to 15 digits, no spaces.
    pub const BARBER: PhoneRule = PhoneRule {
        min_tail: 6,
        max_tail: Some(14),
        allow_spaces: false,
    };

    fn matches(&self, value: &str) -> bool {
        let digits = value.strip_prefix('+').unwrap_or(value);
        let mut chars = digits.chars();
        if !chars.next().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        let tail: Vec<char> = chars.collect();
        let shape_ok = tail
            .iter()
            .all(|c| c.is_ascii_digit() || (self.allow_spaces && c.is_whitespace()));
        let len_ok = tail.len() >= self.min_tail && self.max_tail.map_or(true, |m| tail.len() <= m);
        shape_ok && len_ok
    }
}

/// Validates a phone number against a [`PhoneRule`].
///
/// The value is checked as typed and returned trimmed.
pub fn validate_phone(field: &str, value: &str, rule: PhoneRule) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if !rule.matches(value) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a valid phone number".to_string(),
        });
    }
    Ok(value.trim().to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the asking price field of the shop form.
///
/// ## Example
/// ```rust
/// use barberhub_core::validation::validate_price_input;
///
/// assert_eq!(validate_price_input("price", "85,000").unwrap().pounds(), 85_000);
/// assert!(validate_price_input("price", "").is_err());
/// ```
pub fn validate_price_input(field: &str, value: &str) -> ValidationResult<Gbp> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Gbp::parse_input(value).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number of pounds".to_string(),
    })
}

/// Parses the first number out of an experience label.
///
/// ## Example
/// ```rust
/// use barberhub_core::validation::parse_years_label;
///
/// assert_eq!(parse_years_label("4-6 years"), 4);
/// assert_eq!(parse_years_label("10+ years"), 10);
/// assert_eq!(parse_years_label(""), 0);
/// ```
pub fn parse_years_label(label: &str) -> u32 {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a photo list against its budget.
pub fn validate_photo_count(field: &str, count: usize, max: usize) -> ValidationResult<()> {
    if count > max {
        return Err(ValidationError::TooMany {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("location", "  Soho ").unwrap(), "Soho");
        assert!(validate_required("location", "   ").is_err());
    }

    #[test]
    fn test_validate_min_chars() {
        assert!(validate_min_chars("name", "Al", 2).is_ok());
        assert!(matches!(
            validate_min_chars("name", "A", 2),
            Err(ValidationError::TooShort { min: 2, .. })
        ));
        assert!(matches!(
            validate_min_chars("name", "", 2),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "user@google.com").is_ok());
        assert!(validate_email("email", "a.b@c.co.uk").is_ok());

        assert!(validate_email("email", "").is_err());
        assert!(validate_email("email", "no-at-symbol.com").is_err());
        assert!(validate_email("email", "@domain.com").is_err());
        assert!(validate_email("email", "user@domain").is_err());
        assert!(validate_email("email", "user@.com").is_err());
        assert!(validate_email("email", "user@domain.").is_err());
    }

    #[test]
    fn test_listing_phone_rule() {
        assert!(validate_phone("phone", "+447000000000", PhoneRule::LISTING).is_ok());
        assert!(validate_phone("phone", "+44 7000 000000", PhoneRule::LISTING).is_ok());
        assert!(validate_phone("phone", "07000 000", PhoneRule::LISTING).is_ok());

        assert!(validate_phone("phone", "0700000", PhoneRule::LISTING).is_err());
        assert!(validate_phone("phone", " 07000000000", PhoneRule::LISTING).is_err());
        assert!(validate_phone("phone", "+44-7000-000000", PhoneRule::LISTING).is_err());
        assert!(validate_phone("phone", "", PhoneRule::LISTING).is_err());
    }

    #[test]
    fn test_profile_phone_rule() {
        assert!(validate_phone("phone", "+44 7911 123456", PhoneRule::PROFILE).is_ok());
        assert!(validate_phone("phone", "1234567", PhoneRule::PROFILE).is_ok());
        assert!(validate_phone("phone", "123456", PhoneRule::PROFILE).is_err());
    }

    #[test]
    fn test_barber_phone_rule() {
        assert!(validate_phone("phone", "+447000000000", PhoneRule::BARBER).is_ok());
        assert!(validate_phone("phone", "1234567", PhoneRule::BARBER).is_ok());
        assert!(validate_phone("phone", "123456789012345", PhoneRule::BARBER).is_ok());

        assert!(validate_phone("phone", "123456", PhoneRule::BARBER).is_err());
        assert!(validate_phone("phone", "1234567890123456", PhoneRule::BARBER).is_err());
        assert!(validate_phone("phone", "+44 7000 000000", PhoneRule::BARBER).is_err());
    }

    #[test]
    fn test_validate_price_input() {
        assert_eq!(validate_price_input("price", "0").unwrap().pounds(), 0);
        assert!(matches!(
            validate_price_input("price", "twelve"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_photo_count() {
        assert!(validate_photo_count("photos", 3, 3).is_ok());
        assert!(validate_photo_count("photos", 4, 3).is_err());
    }
}
