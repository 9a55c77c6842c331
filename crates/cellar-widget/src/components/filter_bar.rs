//! Platform filter toggles

use dioxus::prelude::*;

use cellar_core::{FilterControl, Platform};

use crate::state::WidgetState;

/// Font Awesome family for each filter icon, in button order
const FILTER_ICONS: [(Platform, &str); 7] = [
    (Platform::Facebook, "fab"),
    (Platform::LinkedIn, "fab"),
    (Platform::YouTube, "fab"),
    (Platform::Blog, "fas"),
    (Platform::GitHub, "fab"),
    (Platform::Podcast, "fas"),
    (Platform::Other, "fas"),
];

/// Icon classes of the filter buttons, used both to render them and to bind
/// the controller.
pub fn filter_icon_classes() -> Vec<String> {
    FILTER_ICONS
        .iter()
        .map(|(platform, family)| format!("{family} {}", platform.marker()))
        .collect()
}

/// Row of platform filter buttons
#[component]
pub fn FilterBar() -> Element {
    let mut controller = use_context::<WidgetState>().controller;
    let controls = controller.read().controls().to_vec();

    rsx! {
        div {
            class: "filter-bar",
            style: "
                width: 100%;
                display: flex;
                justify-content: center;
                gap: 8px;
                margin-bottom: 32px;
            ",

            for (index, control) in controls.into_iter().enumerate() {
                FilterButton {
                    key: "{index}",
                    control,
                    onclick: move |_| {
                        controller.write().on_filter_toggle(index);
                    },
                }
            }
        }
    }
}

/// One filter toggle; a ring marks it as selected
#[component]
fn FilterButton(control: FilterControl, onclick: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<WidgetState>();
    let colors = state.palette();
    let style = control.platform.unwrap_or(Platform::Other).badge_style();
    let background = style.background_for(state.is_dark());
    let ring = if control.selected {
        format!("0 0 0 2px {}, 0 0 0 4px {}", colors.bg_page, colors.ring)
    } else {
        "none".to_string()
    };
    let title = control.platform.map_or("unknown", Platform::name);

    rsx! {
        button {
            r#type: "button",
            title: "{title}",
            style: "
                width: 40px;
                height: 40px;
                border: none;
                border-radius: 9999px;
                cursor: pointer;
                background: {background};
                color: {style.text};
                box-shadow: {ring};
                transition: box-shadow 0.15s;
            ",
            onclick: move |evt| onclick.call(evt),
            i { class: "{control.marker}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_classes_carry_platform_markers() {
        let classes = filter_icon_classes();
        assert_eq!(classes.len(), Platform::ALL.len());
        assert_eq!(classes[0], "fab fa-facebook-f");
        assert_eq!(classes[6], "fas fa-ellipsis");
        for (class, platform) in classes.iter().zip(Platform::ALL) {
            assert_eq!(Platform::from_marker(class), Some(platform));
        }
    }
}
