//! # Location Parsing
//!
//! Listings carry a free-text location typed by the poster, conventionally
//! `"City, Area"`. Region filters need the city part, cards show both.
//!
//! ```text
//!   "London, Soho"            → city "London",     area "Soho"
//!   "Manchester"              → city "Manchester", area ""
//!   " Leeds , Headingley, UK" → city "Leeds",      area "Headingley"
//! ```
//!
//! Only the first two comma-separated segments are used.

/// City and area split out of a free-text location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLocation {
    pub city: String,
    pub area: String,
}

impl ParsedLocation {
    /// Splits `"City, Area"` into trimmed parts.
    pub fn parse(location: &str) -> Self {
        let mut parts = location.split(',');
        let city = parts.next().unwrap_or_default().trim().to_string();
        let area = parts.next().unwrap_or_default().trim().to_string();
        ParsedLocation { city, area }
    }

    /// City as an optional field (empty becomes `None`).
    pub fn city_opt(&self) -> Option<String> {
        non_empty(&self.city)
    }

    /// Area as an optional field (empty becomes `None`).
    pub fn area_opt(&self) -> Option<String> {
        non_empty(&self.area)
    }
}

/// Returns the city a listing should be filtered under.
///
/// The stored `city` wins when it is non-empty; otherwise the first segment
/// of the free-text location is used.
pub fn effective_city<'a>(city: Option<&'a str>, location: &'a str) -> &'a str {
    match city.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => location.split(',').next().unwrap_or_default().trim(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_and_area() {
        let loc = ParsedLocation::parse("London, Soho");
        assert_eq!(loc.city, "London");
        assert_eq!(loc.area, "Soho");
    }

    #[test]
    fn test_parse_without_area() {
        let loc = ParsedLocation::parse("Manchester");
        assert_eq!(loc.city_opt().as_deref(), Some("Manchester"));
        assert_eq!(loc.area_opt(), None);
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let loc = ParsedLocation::parse(" Leeds , Headingley, UK");
        assert_eq!(loc.city, "Leeds");
        assert_eq!(loc.area, "Headingley");
    }

    #[test]
    fn test_effective_city_prefers_stored_city() {
        assert_eq!(effective_city(Some("Birmingham"), "London, Soho"), "Birmingham");
        assert_eq!(effective_city(Some("  "), "London, Soho"), "London");
        assert_eq!(effective_city(None, "Edinburgh, Leith"), "Edinburgh");
        assert_eq!(effective_city(None, ""), "");
    }
}
