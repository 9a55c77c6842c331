use std::io::Write;

use cellar_core::search::MIN_QUERY_CHARS;
use cellar_core::{
    render, Catalog, FilterSet, Platform, SearchQuery, SearchRequest, SearchSource, WidgetConfig,
};

use crate::commands::common::format_result_lines;
use crate::error::CliError;

pub fn run_search<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    query: &[String],
    platforms: &[Platform],
    limit: Option<usize>,
    as_json: bool,
) -> Result<(), CliError> {
    let config = WidgetConfig::default();
    let limit = limit.unwrap_or(config.max_results);
    if limit == 0 {
        return Err(CliError::InvalidLimit);
    }

    let filters: FilterSet = platforms.iter().copied().collect();
    let request = SearchRequest::new(SearchQuery::new(&query.join(" ")), filters)
        .with_limit(limit)
        .with_min_query_chars(MIN_QUERY_CHARS);
    if request.is_suppressed() {
        return Err(CliError::QueryTooShort(MIN_QUERY_CHARS));
    }

    let results = catalog.search(&request);
    tracing::debug!("Search matched {} entries", results.len());
    let view = render(&results, &config);

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        for line in format_result_lines(&view) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
