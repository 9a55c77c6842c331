//! Widget configuration embedded at build time.

use cellar_core::WidgetConfig;

const EMBEDDED_CONFIG: &str = include_str!("../assets/widget.json");

/// Loads the embedded widget configuration.
///
/// If parsing or validation fails, this logs a warning and returns the default
/// configuration so the widget still starts.
pub fn load_widget_config() -> WidgetConfig {
    parse_widget_config(EMBEDDED_CONFIG)
}

fn parse_widget_config(raw: &str) -> WidgetConfig {
    WidgetConfig::from_json(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse widget config: {}", error);
        WidgetConfig::default()
    })
}
