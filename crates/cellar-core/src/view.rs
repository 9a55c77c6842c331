//! View models for the results panel
//!
//! `render` turns search results into plain data; the widget decides how to
//! draw it.

use serde::Serialize;

use crate::config::WidgetConfig;
use crate::models::{BadgeStyle, CatalogEntry, EntryId, Platform};
use crate::util::take_chars;

/// Suffix appended to every summary, truncated or not
pub const ELLIPSIS: &str = "...";

/// What the results panel shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    /// No entry matched
    Empty { message: String },
    /// One row per matching entry, in result order
    Rows { rows: Vec<ResultRow> },
}

impl ResultsView {
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows { rows } => rows,
        }
    }
}

/// A single rendered result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: EntryId,
    pub image: String,
    /// Alt text for the image
    pub image_alt: String,
    pub title: String,
    /// Truncated description, always ending in [`ELLIPSIS`]
    pub summary: String,
    pub badges: Vec<PlatformBadge>,
}

/// Styled label for one platform of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformBadge {
    pub platform: Platform,
    pub label: &'static str,
    #[serde(skip)]
    pub style: BadgeStyle,
}

impl From<Platform> for PlatformBadge {
    fn from(platform: Platform) -> Self {
        Self {
            platform,
            label: platform.name(),
            style: platform.badge_style(),
        }
    }
}

/// Build the panel view for `results` using `config`'s message and limits.
#[must_use]
pub fn render(results: &[CatalogEntry], config: &WidgetConfig) -> ResultsView {
    if results.is_empty() {
        return ResultsView::Empty {
            message: config.empty_message.clone(),
        };
    }

    let rows = results
        .iter()
        .map(|entry| ResultRow {
            id: entry.id,
            image: entry.image.clone(),
            image_alt: entry.title.clone(),
            title: entry.title.clone(),
            summary: summarize(&entry.description, config.summary_chars),
            badges: entry.platforms.iter().copied().map(PlatformBadge::from).collect(),
        })
        .collect();

    ResultsView::Rows { rows }
}

/// First `limit` characters of `description` followed by [`ELLIPSIS`].
#[must_use]
pub fn summarize(description: &str, limit: usize) -> String {
    format!("{}{ELLIPSIS}", take_chars(description, limit))
}
