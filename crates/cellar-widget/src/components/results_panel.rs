//! Results dropdown

use dioxus::prelude::*;

use cellar_core::{ResultRow, ResultsView};

use crate::state::WidgetState;

/// Dropdown listing the rendered results
#[component]
pub fn ResultsPanel() -> Element {
    let state = use_context::<WidgetState>();
    let colors = state.palette();

    let (results_id, panel) = {
        let controller = state.controller.read();
        (
            controller.bindings().results_id.clone(),
            controller.panel().clone(),
        )
    };
    let display = if panel.visible { "block" } else { "none" };

    rsx! {
        div {
            id: "{results_id}",
            class: "search-results",
            style: "
                display: {display};
                position: absolute;
                left: 0;
                right: 0;
                margin-top: 8px;
                background: {colors.bg_panel};
                border: 1px solid {colors.border};
                border-radius: 8px;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                overflow: hidden;
                z-index: 10;
            ",
            onclick: move |evt| evt.stop_propagation(),

            {
                match panel.view {
                    None => rsx! {},
                    Some(ResultsView::Empty { message }) => rsx! {
                        div {
                            style: "padding: 16px; color: {colors.text_muted};",
                            "{message}"
                        }
                    },
                    Some(ResultsView::Rows { rows }) => rsx! {
                        for row in rows {
                            ResultItem { key: "{row.id}", row }
                        }
                    },
                }
            }
        }
    }
}

/// One result: image, title, summary and platform badges
#[component]
fn ResultItem(row: ResultRow) -> Element {
    let state = use_context::<WidgetState>();
    let colors = state.palette();
    let dark = state.is_dark();
    let badges: Vec<_> = row
        .badges
        .iter()
        .map(|badge| (badge.label, badge.style.background_for(dark), badge.style.text))
        .collect();

    rsx! {
        div {
            class: "search-result",
            style: "
                display: flex;
                align-items: center;
                padding: 16px;
                cursor: pointer;
                border-bottom: 1px solid {colors.border};
            ",

            img {
                src: "{row.image}",
                alt: "{row.image_alt}",
                style: "width: 64px; height: 64px; object-fit: cover; border-radius: 8px;",
            }

            div {
                style: "margin-left: 16px; flex: 1;",

                h3 {
                    style: "
                        margin: 0;
                        font-size: 18px;
                        font-weight: 600;
                        color: {colors.text_primary};
                    ",
                    "{row.title}"
                }
                p {
                    style: "margin: 4px 0 0; font-size: 14px; color: {colors.text_secondary};",
                    "{row.summary}"
                }
                div {
                    style: "margin-top: 8px; display: flex; flex-wrap: wrap; gap: 8px;",
                    for (label, background, text) in badges {
                        span {
                            key: "{label}",
                            style: "
                                padding: 4px 8px;
                                font-size: 12px;
                                border-radius: 9999px;
                                background: {background};
                                color: {text};
                            ",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
