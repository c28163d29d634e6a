//! In-process hostel search
//!
//! The backend has no search endpoint, so search results are computed from
//! the full approved list. A hostel matches when the query term appears in its
//! name, description, city or area, and the location term appears in its city,
//! area or landmark. Matching is case-insensitive substring; an empty term
//! matches everything.

use crate::models::Hostel;

/// Trimmed search terms, as used for both matching and the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    pub query: String,
    pub location: String,
}

impl SearchTerms {
    pub fn new(query: &str, location: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            location: location.trim().to_string(),
        }
    }

    pub fn matches(&self, hostel: &Hostel) -> bool {
        matches(hostel, &self.query, &self.location)
    }

    /// Keeps the hostels matching both terms, preserving order.
    pub fn filter(&self, hostels: Vec<Hostel>) -> Vec<Hostel> {
        hostels.into_iter().filter(|h| self.matches(h)).collect()
    }
}

/// True when `hostel` satisfies both the query and the location predicate.
pub fn matches(hostel: &Hostel, query: &str, location: &str) -> bool {
    let query = query.trim().to_lowercase();
    let location = location.trim().to_lowercase();

    let query_hit = query.is_empty()
        || [&hostel.name, &hostel.description, &hostel.city, &hostel.area]
            .iter()
            .any(|field| contains_ci(field, &query));

    let location_hit = location.is_empty()
        || [&hostel.city, &hostel.area, &hostel.landmark]
            .iter()
            .any(|field| contains_ci(field, &location));

    query_hit && location_hit
}

/// `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hostel(name: &str, description: &str, city: &str, area: &str, landmark: &str) -> Hostel {
        let mut h = Hostel::new(name.to_lowercase(), name);
        h.description = description.to_string();
        h.city = city.to_string();
        h.area = area.to_string();
        h.landmark = landmark.to_string();
        h
    }

    #[test]
    fn test_empty_terms_match_everything() {
        let h = hostel("Lakeview", "", "", "", "");
        assert!(matches(&h, "", ""));
        assert!(matches(&h, "   ", "\t"));
    }

    #[test]
    fn test_query_fields() {
        let h = hostel("Lakeview", "Quiet rooms near campus", "Pune", "Kothrud", "MIT gate");
        assert!(matches(&h, "LAKE", ""));
        assert!(matches(&h, "campus", ""));
        assert!(matches(&h, "pune", ""));
        assert!(matches(&h, "kothrud", ""));
        // Landmark is a location field only
        assert!(!matches(&h, "mit gate", ""));
    }

    #[test]
    fn test_location_fields() {
        let h = hostel("Lakeview", "Quiet rooms near Delhi road", "Pune", "Kothrud", "MIT gate");
        assert!(matches(&h, "", "mit"));
        assert!(matches(&h, "", "PUNE"));
        // Description is a query field only
        assert!(!matches(&h, "", "delhi"));
    }

    #[test]
    fn test_predicates_are_anded() {
        let h = hostel("Lakeview", "", "Pune", "", "");
        assert!(matches(&h, "lake", "pune"));
        assert!(!matches(&h, "lake", "mumbai"));
        assert!(!matches(&h, "river", "pune"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let terms = SearchTerms::new(" a ", "");
        let result = terms.filter(vec![
            hostel("Alpha", "", "", "", ""),
            hostel("Echo", "", "", "", ""),
            hostel("Gamma", "", "", "", ""),
        ]);
        let names: Vec<_> = result.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
        assert_eq!(terms.query, "a");
    }
}
