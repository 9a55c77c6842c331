//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use cellar_core::{Catalog, SearchController, WidgetBindings, WidgetConfig};

use crate::components::{filter_icon_classes, SearchWidget, StartupError};
use crate::state::WidgetState;
use crate::widget_config::load_widget_config;

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(load_widget_config);
    let theme = config.theme;
    let startup = use_hook(|| {
        start_controller(config.clone())
            .map(Signal::new)
            .map_err(|error| {
                tracing::error!("Failed to start search widget: {}", error);
                error.to_string()
            })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }

        {
            match startup {
                Ok(controller) => rsx! { SearchPage { controller } },
                Err(message) => rsx! { StartupError { message, theme } },
            }
        }
    }
}

/// Page area around the widget; clicks that reach it happened outside the
/// search wrapper.
#[component]
fn SearchPage(mut controller: Signal<SearchController>) -> Element {
    let state = use_context_provider(|| WidgetState { controller });
    let colors = state.palette();

    rsx! {
        div {
            class: "search-page",
            style: "
                min-height: 100vh;
                padding: 48px 16px;
                background: {colors.bg_page};
                font-family: system-ui, -apple-system, sans-serif;
            ",
            onclick: move |_| {
                controller.write().on_outside_click();
            },

            SearchWidget {}
        }
    }
}

/// Bind a controller over the embedded catalog to the widget's markup.
pub fn start_controller(config: WidgetConfig) -> cellar_core::Result<SearchController> {
    let bindings = WidgetBindings::from_config(&config, filter_icon_classes());
    let catalog = Catalog::builtin();
    tracing::info!(
        "Search widget using {} catalog entries ({:?} theme)",
        catalog.len(),
        config.theme
    );
    SearchController::initialize(Arc::new(catalog), config, bindings)
}
