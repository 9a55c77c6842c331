//! cellar-core - Core library for Cellar Search
//!
//! This crate contains the catalog model, platform filters, search, view
//! models and the widget controller shared by the web widget and the CLI.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod search;
mod util;
pub mod view;

pub use catalog::Catalog;
pub use config::WidgetConfig;
pub use controller::{FilterControl, PanelState, SearchController, WidgetBindings};
pub use error::{Error, Result};
pub use models::{CatalogEntry, EntryId, Platform};
pub use search::{FilterSet, SearchQuery, SearchRequest, SearchSource};
pub use view::{render, ResultRow, ResultsView};
