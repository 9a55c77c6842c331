//! Widget state shared through Dioxus context.

use dioxus::prelude::*;

use cellar_core::SearchController;

use crate::theme::{palette, ColorPalette};

/// State provided to every widget component
#[derive(Clone, Copy)]
pub struct WidgetState {
    /// The bound search controller; every event handler writes through it
    pub controller: Signal<SearchController>,
}

impl WidgetState {
    /// Colors for the configured theme
    #[must_use]
    pub fn palette(&self) -> &'static ColorPalette {
        palette(self.controller.read().config().theme)
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.controller.read().config().theme.is_dark()
    }
}
