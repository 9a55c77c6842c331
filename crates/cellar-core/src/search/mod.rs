//! Keyword search with platform filters
//!
//! An entry matches when the query is too short to constrain anything or is a
//! substring of the entry's searchable text, and when the active filter set is
//! empty or shares at least one platform with the entry. Matches keep catalog
//! order and are truncated to the request limit; there is no scoring.

mod filters;

use crate::models::CatalogEntry;
use crate::util::char_len;

pub use filters::FilterSet;

/// Minimum query length (in characters) that constrains the text match
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum number of results shown in the dropdown
pub const MAX_RESULTS: usize = 5;

/// Normalized (lower-cased) search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw input text
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        char_len(&self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the query is below `min_chars` and so matches every entry
    #[must_use]
    pub fn is_short(&self, min_chars: usize) -> bool {
        self.len() < min_chars
    }
}

/// Everything a search source needs to answer one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub filters: FilterSet,
    /// Maximum number of entries to return
    pub limit: usize,
    /// Queries shorter than this skip the text match
    pub min_query_chars: usize,
}

impl SearchRequest {
    /// Request with the default limit and minimum query length
    #[must_use]
    pub fn new(query: SearchQuery, filters: FilterSet) -> Self {
        Self {
            query,
            filters,
            limit: MAX_RESULTS,
            min_query_chars: MIN_QUERY_CHARS,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn with_min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    /// Whether this request would match nothing but the whole catalog.
    ///
    /// The widget hides its panel instead of searching in that case.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.query.is_short(self.min_query_chars) && self.filters.is_empty()
    }

    /// Whether `entry` satisfies both the text and the platform constraint
    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_text(entry) && self.filters.admits(&entry.platforms)
    }

    fn matches_text(&self, entry: &CatalogEntry) -> bool {
        self.query.is_short(self.min_query_chars)
            || entry.searchable_text().contains(self.query.as_str())
    }
}

/// Anything that can answer a search request with catalog entries.
///
/// The in-memory [`crate::Catalog`] is the only implementation today; a remote
/// search service would slot in behind the same contract.
pub trait SearchSource {
    /// Ordered matches, at most `request.limit` of them
    fn search(&self, request: &SearchRequest) -> Vec<CatalogEntry>;
}

/// Filter `entries` in order, keeping the first `request.limit` matches.
#[must_use]
pub fn search_entries(entries: &[CatalogEntry], request: &SearchRequest) -> Vec<CatalogEntry> {
    entries
        .iter()
        .filter(|entry| request.matches(entry))
        .take(request.limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, Platform};
    use pretty_assertions::assert_eq;

    fn entry(id: u32, title: &str, platforms: &[Platform]) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(id),
            title: title.to_string(),
            description: String::new(),
            category: "Experience".to_string(),
            image: String::new(),
            tags: vec!["tour".to_string()],
            platforms: platforms.to_vec(),
        }
    }

    fn ids(entries: &[CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|entry| entry.id.get()).collect()
    }

    #[test]
    fn query_is_lowercased() {
        let query = SearchQuery::new("WiNe");
        assert_eq!(query.as_str(), "wine");
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn short_query_matches_everything() {
        let entries = vec![entry(1, "Alpha", &[]), entry(2, "Beta", &[])];
        let request = SearchRequest::new(SearchQuery::new("z"), FilterSet::new());
        assert!(request.is_suppressed());
        assert_eq!(ids(&search_entries(&entries, &request)), vec![1, 2]);
    }

    #[test]
    fn results_are_truncated_in_catalog_order() {
        let entries: Vec<_> = (1..=8).map(|id| entry(id, "Wine", &[])).collect();
        let request = SearchRequest::new(SearchQuery::new("wine"), FilterSet::new());
        assert_eq!(ids(&search_entries(&entries, &request)), vec![1, 2, 3, 4, 5]);

        let request = request.with_limit(2);
        assert_eq!(ids(&search_entries(&entries, &request)), vec![1, 2]);
    }

    #[test]
    fn filters_require_a_shared_platform() {
        let entries = vec![
            entry(1, "Cellar", &[Platform::Blog]),
            entry(2, "Tasting", &[Platform::YouTube, Platform::Facebook]),
            entry(3, "Vineyard", &[]),
        ];
        let filters: FilterSet = [Platform::Facebook, Platform::Podcast].into_iter().collect();
        let request = SearchRequest::new(SearchQuery::default(), filters);
        assert!(!request.is_suppressed());
        assert_eq!(ids(&search_entries(&entries, &request)), vec![2]);
    }

    #[test]
    fn text_and_filters_combine() {
        let entries = vec![
            entry(1, "Cellar", &[Platform::Blog]),
            entry(2, "Cellar door", &[Platform::Podcast]),
        ];
        let filters: FilterSet = [Platform::Podcast].into_iter().collect();
        let request = SearchRequest::new(SearchQuery::new("cellar"), filters);
        assert_eq!(ids(&search_entries(&entries, &request)), vec![2]);
    }

    #[test]
    fn min_query_chars_is_configurable() {
        let entries = vec![entry(1, "Alpha", &[]), entry(2, "Beta", &[])];
        let request = SearchRequest::new(SearchQuery::new("al"), FilterSet::new())
            .with_min_query_chars(3);
        assert_eq!(ids(&search_entries(&entries, &request)), vec![1, 2]);
    }
}
