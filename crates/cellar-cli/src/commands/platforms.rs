use std::io::Write;

use cellar_core::{Catalog, Platform};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct PlatformItem {
    pub platform: Platform,
    pub marker: &'static str,
    pub entries: usize,
}

pub fn platform_items(catalog: &Catalog) -> Vec<PlatformItem> {
    catalog
        .platform_counts()
        .into_iter()
        .map(|(platform, entries)| PlatformItem {
            platform,
            marker: platform.marker(),
            entries,
        })
        .collect()
}

pub fn run_platforms<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    as_json: bool,
) -> Result<(), CliError> {
    let items = platform_items(catalog);

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    } else {
        for item in &items {
            writeln!(
                out,
                "{:<9} {:<15} {}",
                item.platform.name(),
                item.marker,
                item.entries
            )?;
        }
    }

    Ok(())
}
