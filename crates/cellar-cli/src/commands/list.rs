use std::io::Write;

use cellar_core::Catalog;

use crate::commands::common::format_entry_line;
use crate::error::CliError;

pub fn run_list<W: Write>(out: &mut W, catalog: &Catalog, as_json: bool) -> Result<(), CliError> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog.entries())?)?;
    } else {
        for entry in catalog.entries() {
            writeln!(out, "{}", format_entry_line(entry))?;
        }
    }

    Ok(())
}
