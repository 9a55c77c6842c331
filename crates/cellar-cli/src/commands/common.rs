use std::env;
use std::path::{Path, PathBuf};

use cellar_core::view::ResultsView;
use cellar_core::{Catalog, CatalogEntry};

use crate::error::CliError;

pub const CATALOG_ENV: &str = "CELLAR_CATALOG";

/// Pick the catalog path: explicit flag first, then the environment.
pub fn resolve_catalog_path(explicit: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
    explicit.or_else(|| {
        env_value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the catalog from `explicit`, `$CELLAR_CATALOG`, or the embedded table.
pub fn load_catalog(explicit: Option<PathBuf>) -> Result<Catalog, CliError> {
    match resolve_catalog_path(explicit, env::var(CATALOG_ENV).ok()) {
        Some(path) => open_catalog(&path),
        None => Ok(Catalog::builtin()),
    }
}

fn open_catalog(path: &Path) -> Result<Catalog, CliError> {
    tracing::info!("Using catalog {}", path.display());
    Ok(Catalog::load(path)?)
}

pub fn format_result_lines(view: &ResultsView) -> Vec<String> {
    match view {
        ResultsView::Empty { message } => vec![message.clone()],
        ResultsView::Rows { rows } => rows
            .iter()
            .flat_map(|row| {
                let badges = row
                    .badges
                    .iter()
                    .map(|badge| badge.label)
                    .collect::<Vec<_>>()
                    .join(", ");
                [
                    format!("{:>3}  {}", row.id.get(), row.title),
                    format!("     {}", row.summary),
                    format!("     {}", row.image),
                    format!("     [{badges}]"),
                ]
            })
            .collect(),
    }
}

pub fn format_entry_line(entry: &CatalogEntry) -> String {
    let platforms = entry
        .platforms
        .iter()
        .map(|platform| platform.name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{:>3}  {} ({})  [{platforms}]",
        entry.id.get(),
        entry.title,
        entry.category
    )
}
