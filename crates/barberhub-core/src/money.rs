//! # Money Module
//!
//! Provides the `Gbp` type for shop asking prices.
//!
//! ## Whole Pounds Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shop prices are typed by sellers as whole pounds:                      │
//! │                                                                         │
//! │    price input   "85000"   ──► grouped  "85,000"  (while typing)        │
//! │    stored value  Gbp(85000)                                             │
//! │    card / alert  "£85,000"                                              │
//! │                                                                         │
//! │  No pence, no floats, no currency conversion.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barberhub_core::money::Gbp;
//!
//! let price = Gbp::parse_input("85,000").unwrap();
//! assert_eq!(price.pounds(), 85_000);
//! assert_eq!(price.to_string(), "£85,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Gbp Type
// =============================================================================

/// An asking price in whole British pounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Gbp(i64);

impl Gbp {
    /// Creates a price from whole pounds.
    #[inline]
    pub const fn from_pounds(pounds: i64) -> Self {
        Gbp(pounds)
    }

    /// Returns the value in whole pounds.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0
    }

    /// Parses what a seller typed into the price field.
    ///
    /// Thousands separators are ignored. Returns `None` for empty input or
    /// anything that is not a plain non-negative number.
    ///
    /// ## Example
    /// ```rust
    /// use barberhub_core::money::Gbp;
    ///
    /// assert_eq!(Gbp::parse_input("45,000").map(|p| p.pounds()), Some(45_000));
    /// assert!(Gbp::parse_input("").is_none());
    /// assert!(Gbp::parse_input("12k").is_none());
    /// ```
    pub fn parse_input(input: &str) -> Option<Self> {
        let digits: String = input.trim().chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse::<i64>().ok().map(Gbp)
    }

    /// Formats the amount with thousands separators and no symbol.
    pub fn grouped(&self) -> String {
        group_thousands(&self.0.unsigned_abs().to_string())
    }
}

/// Reformats a price field as the user types.
///
/// Every non-digit is dropped, then the digits are grouped in thousands.
/// Leading zeros are removed the way a numeric conversion would.
///
/// ## Example
/// ```rust
/// use barberhub_core::money::format_price_input;
///
/// assert_eq!(format_price_input("85000"), "85,000");
/// assert_eq!(format_price_input("£1,2a34"), "1,234");
/// assert_eq!(format_price_input("abc"), "");
/// ```
pub fn format_price_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    group_thousands(trimmed)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount the way listing cards do: `£85,000`.
impl fmt::Display for Gbp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}", sign, self.grouped())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Gbp::from_pounds(85_000).to_string(), "£85,000");
        assert_eq!(Gbp::from_pounds(999).to_string(), "£999");
        assert_eq!(Gbp::from_pounds(1_250_000).to_string(), "£1,250,000");
        assert_eq!(Gbp::from_pounds(0).to_string(), "£0");
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Gbp::parse_input("85,000"), Some(Gbp::from_pounds(85_000)));
        assert_eq!(Gbp::parse_input(" 45000 "), Some(Gbp::from_pounds(45_000)));
        assert_eq!(Gbp::parse_input(""), None);
        assert_eq!(Gbp::parse_input("ten"), None);
        assert_eq!(Gbp::parse_input("-5"), None);
    }

    #[test]
    fn test_format_price_input() {
        assert_eq!(format_price_input("1"), "1");
        assert_eq!(format_price_input("1234"), "1,234");
        assert_eq!(format_price_input("0012"), "12");
        assert_eq!(format_price_input("000"), "0");
        assert_eq!(format_price_input(""), "");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Gbp::from_pounds(45_000)).unwrap();
        assert_eq!(json, "45000");
    }
}
