//! Catalog entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Platform;

/// A unique identifier for a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Wrap a raw id
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// One searchable record of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier within the catalog
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Image URL shown next to the result
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Distribution channels, in display order
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl CatalogEntry {
    /// Lower-cased text the keyword search runs against.
    ///
    /// Title, description, category and the space-joined tags, separated by
    /// single spaces.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.category,
            self.tags.join(" ")
        )
        .to_lowercase()
    }

    /// Whether the entry is distributed on `platform`
    #[must_use]
    pub fn is_on(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}
