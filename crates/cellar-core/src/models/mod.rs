//! Data models for Cellar Search

mod entry;
mod platform;

pub use entry::{CatalogEntry, EntryId};
pub use platform::{badge_style_for, BadgeStyle, Platform};
