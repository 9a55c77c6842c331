//! The searchable catalog
//!
//! `Catalog::builtin` is the table embedded in the site. Alternative tables can
//! be loaded from JSON; both are immutable once built.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{CatalogEntry, EntryId, Platform};
use crate::search::{search_entries, SearchRequest, SearchSource};

const UNSPLASH: &str = "https://images.unsplash.com";

/// Ordered, read-only table of catalog entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated ids
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(Error::DuplicateEntryId(entry.id));
            }
        }
        Ok(Self { entries })
    }

    /// The embedded wine catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    /// Parse a JSON array of entries
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    /// Read and parse a JSON catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries published on each platform, in `Platform::ALL` order
    #[must_use]
    pub fn platform_counts(&self) -> Vec<(Platform, usize)> {
        Platform::ALL
            .into_iter()
            .map(|platform| {
                let count = self
                    .entries
                    .iter()
                    .filter(|entry| entry.is_on(platform))
                    .count();
                (platform, count)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SearchSource for Catalog {
    fn search(&self, request: &SearchRequest) -> Vec<CatalogEntry> {
        search_entries(&self.entries, request)
    }
}

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: EntryId::new(1),
            title: "Wine Cellar Experience".to_string(),
            description:
                "Explore our historic wine cellar and discover the aging process of fine wines."
                    .to_string(),
            category: "Experience".to_string(),
            image: format!("{UNSPLASH}/photo-1543699936-c901ddbf0c05"),
            tags: strings(&["cellar", "aging", "history", "tour"]),
            platforms: vec![Platform::Facebook, Platform::Blog],
        },
        CatalogEntry {
            id: EntryId::new(2),
            title: "Wine Tasting Events".to_string(),
            description: "Join our expert sommeliers for guided tastings of premium wines."
                .to_string(),
            category: "Events".to_string(),
            image: format!("{UNSPLASH}/photo-1510812431401-41d2bd2722f3"),
            tags: strings(&["tasting", "events", "sommelier", "premium"]),
            platforms: vec![Platform::Facebook, Platform::LinkedIn, Platform::YouTube],
        },
        CatalogEntry {
            id: EntryId::new(3),
            title: "Vineyard Tours".to_string(),
            description: "Walk through our scenic vineyards and learn about wine production."
                .to_string(),
            category: "Experience".to_string(),
            image: format!("{UNSPLASH}/photo-1506377247377-2a5b3b417ebb"),
            tags: strings(&["vineyard", "tour", "production", "outdoor"]),
            platforms: vec![Platform::YouTube, Platform::Blog, Platform::Podcast],
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
