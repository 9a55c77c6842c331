//! Shown in place of the widget when it fails to bind

use dioxus::prelude::*;

use crate::theme::{palette, ThemeMode};

/// Startup failure notice
#[component]
pub fn StartupError(message: String, theme: ThemeMode) -> Element {
    let colors = palette(theme);

    rsx! {
        div {
            class: "search-startup-error",
            role: "alert",
            style: "
                max-width: 640px;
                margin: 48px auto;
                padding: 12px 16px;
                border: 1px solid {colors.error};
                border-radius: 8px;
                color: {colors.error};
                font-family: system-ui, -apple-system, sans-serif;
            ",
            "Search is unavailable: {message}"
        }
    }
}
