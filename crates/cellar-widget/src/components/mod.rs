//! UI Components
//!
//! Pieces of the search widget.

mod filter_bar;
mod results_panel;
mod search_widget;
mod startup_error;

pub use filter_bar::filter_icon_classes;
pub use search_widget::SearchWidget;
pub use startup_error::StartupError;
