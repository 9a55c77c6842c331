//! Search input and dropdown wrapper

use dioxus::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::results_panel::ResultsPanel;
use crate::state::WidgetState;

/// The search wrapper: filters, text input and results dropdown.
///
/// Clicks inside stop here so the page's outside-click handler never sees them.
#[component]
pub fn SearchWidget() -> Element {
    let state = use_context::<WidgetState>();
    let mut controller = state.controller;
    let colors = state.palette();

    let (input_id, wrapper_id, input) = {
        let current = controller.read();
        (
            current.bindings().input_id.clone(),
            current.bindings().wrapper_id.clone(),
            current.input().to_string(),
        )
    };

    rsx! {
        div {
            id: "{wrapper_id}",
            class: "search-wrapper",
            style: "
                max-width: 640px;
                margin: 0 auto;
                position: relative;
            ",
            onclick: move |evt| evt.stop_propagation(),

            FilterBar {}

            input {
                id: "{input_id}",
                r#type: "text",
                placeholder: "Search experiences, events, tours...",
                autocomplete: "off",
                value: "{input}",
                oninput: move |evt| {
                    controller.write().on_input(&evt.value());
                },
                onfocus: move |_| {
                    controller.write().on_focus();
                },
                style: "
                    width: 100%;
                    padding: 12px 16px;
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    font-size: 16px;
                    background: {colors.bg_panel};
                    color: {colors.text_primary};
                    outline: none;
                    box-sizing: border-box;
                ",
            }

            ResultsPanel {}
        }
    }
}
