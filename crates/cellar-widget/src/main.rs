//! Cellar Search widget
//!
//! Keyword search with platform filters for the cellar marketing site.

mod app;
mod components;
mod state;
mod theme;
mod widget_config;

fn main() {
    if let Err(error) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {error}");
    }

    tracing::info!("Starting Cellar Search widget...");

    dioxus::launch(app::App);
}
