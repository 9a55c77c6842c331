//! Theme palettes for the widget

pub use cellar_core::config::ThemeMode;

/// Color palette for the widget
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_page: &'static str,
    pub bg_panel: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub ring: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#f8f9fa",
    bg_panel: "#ffffff",
    text_primary: "#1f2937",
    text_secondary: "#4b5563",
    text_muted: "#6b7280",
    border: "#e5e7eb",
    ring: "#ffffff",
    error: "#dc2626",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#111827",
    bg_panel: "#1f2937",
    text_primary: "#ffffff",
    text_secondary: "#d1d5db",
    text_muted: "#9ca3af",
    border: "#374151",
    ring: "#ffffff",
    error: "#f87171",
};

/// Get the color palette for a theme mode
#[must_use]
pub const fn palette(mode: ThemeMode) -> &'static ColorPalette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}
