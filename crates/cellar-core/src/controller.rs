//! Search widget controller
//!
//! Owns the widget's bindings, the active filter set and the results panel
//! state. Every event handler runs synchronously to completion and leaves the
//! panel ready to draw.

use std::fmt;
use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::error::{Error, Result};
use crate::models::{CatalogEntry, Platform};
use crate::search::{FilterSet, SearchQuery, SearchRequest, SearchSource};
use crate::util::is_blank;
use crate::view::{render, ResultsView};

/// The handles the widget needs from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBindings {
    pub input_id: String,
    pub results_id: String,
    pub wrapper_id: String,
    /// Icon classes of each filter toggle, in page order
    pub filter_markers: Vec<String>,
}

impl WidgetBindings {
    /// Bindings for the configured element ids and the given filter markers
    #[must_use]
    pub fn from_config<I, S>(config: &WidgetConfig, filter_markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input_id: config.elements.search_input.clone(),
            results_id: config.elements.search_results.clone(),
            wrapper_id: config.elements.search_wrapper.clone(),
            filter_markers: filter_markers.into_iter().map(Into::into).collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        if is_blank(&self.input_id) {
            return Err(Error::MissingBinding("search input"));
        }
        if is_blank(&self.results_id) {
            return Err(Error::MissingBinding("results container"));
        }
        if is_blank(&self.wrapper_id) {
            return Err(Error::MissingBinding("search wrapper"));
        }
        if self.filter_markers.is_empty() {
            return Err(Error::MissingBinding("filter controls"));
        }
        Ok(())
    }
}

/// A filter toggle on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub marker: String,
    /// `None` when the marker is not recognized; toggling it does nothing
    pub platform: Option<Platform>,
    pub selected: bool,
}

impl FilterControl {
    fn new(marker: String) -> Self {
        let platform = Platform::from_marker(&marker);
        if platform.is_none() {
            tracing::warn!("Filter control marker {:?} maps to no platform", marker);
        }
        Self {
            marker,
            platform,
            selected: false,
        }
    }
}

/// Results container state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
    /// `None` when the container has been cleared
    pub view: Option<ResultsView>,
}

impl PanelState {
    fn clear(&mut self) {
        self.visible = false;
        self.view = None;
    }

    fn show(&mut self, view: ResultsView) {
        self.view = Some(view);
        self.visible = true;
    }
}

/// Controller behind one search widget instance
#[derive(Clone)]
pub struct SearchController {
    source: Arc<dyn SearchSource>,
    config: WidgetConfig,
    bindings: WidgetBindings,
    controls: Vec<FilterControl>,
    filters: FilterSet,
    input: String,
    panel: PanelState,
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("bindings", &self.bindings)
            .field("filters", &self.filters)
            .field("input", &self.input)
            .field("panel", &self.panel)
            .finish_non_exhaustive()
    }
}

impl SearchController {
    /// Bind a controller to the page.
    ///
    /// Fails with [`Error::MissingBinding`] when any required handle is absent.
    pub fn initialize(
        source: Arc<dyn SearchSource>,
        config: WidgetConfig,
        bindings: WidgetBindings,
    ) -> Result<Self> {
        bindings.validate()?;
        config.validate()?;

        let controls = bindings
            .filter_markers
            .iter()
            .cloned()
            .map(FilterControl::new)
            .collect();

        tracing::debug!(
            "Search widget bound: input=#{} results=#{} wrapper=#{} ({} filter controls)",
            bindings.input_id,
            bindings.results_id,
            bindings.wrapper_id,
            bindings.filter_markers.len()
        );

        Ok(Self {
            source,
            config,
            bindings,
            controls,
            filters: FilterSet::new(),
            input: String::new(),
            panel: PanelState::default(),
        })
    }

    /// End the widget's lifecycle.
    pub fn dispose(self) {
        tracing::debug!(
            "Search widget on #{} disposed with {} active filters",
            self.bindings.input_id,
            self.filters.len()
        );
    }

    /// Handle a keystroke with the input's full current value.
    pub fn on_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
        self.refresh();
    }

    /// Toggle the filter control at `index`.
    ///
    /// Returns the platform that was toggled, or `None` when the control is
    /// unknown or carries an unrecognized marker. In that case nothing changes.
    pub fn on_filter_toggle(&mut self, index: usize) -> Option<Platform> {
        let Some(control) = self.controls.get_mut(index) else {
            tracing::warn!("Ignoring toggle for unknown filter control {}", index);
            return None;
        };
        let Some(platform) = control.platform else {
            tracing::debug!("Ignoring toggle for unmapped marker {:?}", control.marker);
            return None;
        };

        control.selected = !control.selected;
        self.filters.set_active(platform, control.selected);
        tracing::debug!(
            "Filter {} {}",
            platform,
            if control.selected { "on" } else { "off" }
        );

        self.refresh();
        Some(platform)
    }

    /// Re-show the last rendered panel when the input regains focus.
    ///
    /// Results are not recomputed.
    pub fn on_focus(&mut self) {
        if !self.query().is_short(self.config.min_query_chars) {
            self.panel.visible = true;
        }
    }

    /// Hide the panel after a pointer interaction outside the wrapper.
    pub fn on_outside_click(&mut self) {
        self.panel.visible = false;
    }

    /// Up to `max_results` entries matching `query` under the active filters.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<CatalogEntry> {
        self.source.search(&self.request(query.clone()))
    }

    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(&self.input)
    }

    /// Raw text last seen in the input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn panel(&self) -> &PanelState {
        &self.panel
    }

    #[must_use]
    pub const fn active_filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    #[must_use]
    pub const fn bindings(&self) -> &WidgetBindings {
        &self.bindings
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn request(&self, query: SearchQuery) -> SearchRequest {
        SearchRequest::new(query, self.filters.clone())
            .with_limit(self.config.max_results)
            .with_min_query_chars(self.config.min_query_chars)
    }

    fn refresh(&mut self) {
        let request = self.request(self.query());
        if request.is_suppressed() {
            self.panel.clear();
            return;
        }

        let results = self.source.search(&request);
        tracing::debug!(
            "Search {:?} with {} filters matched {} entries",
            request.query.as_str(),
            request.filters.len(),
            results.len()
        );
        self.panel.show(render(&results, &self.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::EntryId;
    use pretty_assertions::assert_eq;

    fn markers() -> Vec<&'static str> {
        Platform::ALL.iter().map(|platform| platform.marker()).collect()
    }

    fn controller() -> SearchController {
        let config = WidgetConfig::default();
        let bindings = WidgetBindings::from_config(&config, markers());
        SearchController::initialize(Arc::new(Catalog::builtin()), config, bindings).unwrap()
    }

    fn control_index(platform: Platform) -> usize {
        Platform::ALL
            .iter()
            .position(|candidate| *candidate == platform)
            .unwrap()
    }

    fn shown_ids(controller: &SearchController) -> Vec<u32> {
        controller
            .panel()
            .view
            .as_ref()
            .map(|view| view.rows().iter().map(|row| row.id.get()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn initialize_rejects_missing_bindings() {
        let config = WidgetConfig::default();
        let source: Arc<dyn SearchSource> = Arc::new(Catalog::builtin());

        let mut bindings = WidgetBindings::from_config(&config, markers());
        bindings.results_id = "  ".to_string();
        assert!(matches!(
            SearchController::initialize(source.clone(), config.clone(), bindings),
            Err(Error::MissingBinding("results container"))
        ));

        let bindings = WidgetBindings::from_config(&config, Vec::<String>::new());
        assert!(matches!(
            SearchController::initialize(source, config, bindings),
            Err(Error::MissingBinding("filter controls"))
        ));
    }

    #[test]
    fn controls_resolve_markers() {
        let config = WidgetConfig::default();
        let bindings = WidgetBindings::from_config(&config, ["fab fa-youtube", "fa-rss"]);
        let controller =
            SearchController::initialize(Arc::new(Catalog::builtin()), config, bindings).unwrap();
        let platforms: Vec<_> = controller.controls().iter().map(|c| c.platform).collect();
        assert_eq!(platforms, vec![Some(Platform::YouTube), None]);
    }

    #[test]
    fn short_query_without_filters_hides_panel() {
        let mut controller = controller();
        controller.on_input("wine");
        assert!(controller.panel().visible);

        controller.on_input("w");
        assert_eq!(controller.panel(), &PanelState::default());

        controller.on_input("");
        assert!(!controller.panel().visible);
        assert!(controller.panel().view.is_none());
    }

    #[test]
    fn wine_query_shows_all_three() {
        let mut controller = controller();
        controller.on_input("Wine");
        assert!(controller.panel().visible);
        assert_eq!(shown_ids(&controller), vec![1, 2, 3]);
    }

    #[test]
    fn filter_toggle_searches_with_empty_query() {
        let mut controller = controller();
        let toggled = controller.on_filter_toggle(control_index(Platform::YouTube));

        assert_eq!(toggled, Some(Platform::YouTube));
        assert!(controller.controls()[control_index(Platform::YouTube)].selected);
        assert!(controller.panel().visible);
        assert_eq!(shown_ids(&controller), vec![2, 3]);
    }

    #[test]
    fn unmatched_filtered_query_renders_no_results() {
        let mut controller = controller();
        controller.on_input("cellar");
        controller.on_filter_toggle(control_index(Platform::Podcast));

        assert!(controller.panel().visible);
        assert_eq!(
            controller.panel().view,
            Some(ResultsView::Empty {
                message: "No results found".to_string()
            })
        );
    }

    #[test]
    fn toggle_on_then_off_restores_results() {
        let mut controller = controller();
        controller.on_input("tour");
        let filters_before = controller.active_filters().clone();
        let results_before = shown_ids(&controller);

        controller.on_filter_toggle(control_index(Platform::Facebook));
        assert_eq!(shown_ids(&controller), vec![1]);
        controller.on_filter_toggle(control_index(Platform::Facebook));

        assert_eq!(controller.active_filters(), &filters_before);
        assert_eq!(shown_ids(&controller), results_before);
        assert!(!controller.controls()[control_index(Platform::Facebook)].selected);
    }

    #[test]
    fn turning_last_filter_off_with_short_query_hides_panel() {
        let mut controller = controller();
        controller.on_filter_toggle(control_index(Platform::Blog));
        assert!(controller.panel().visible);

        controller.on_filter_toggle(control_index(Platform::Blog));
        assert!(!controller.panel().visible);
        assert!(controller.panel().view.is_none());
    }

    #[test]
    fn controls_sharing_a_platform_keep_their_own_selection() {
        let config = WidgetConfig::default();
        let bindings = WidgetBindings::from_config(&config, ["fab fa-youtube", "fas fa-youtube"]);
        let mut controller =
            SearchController::initialize(Arc::new(Catalog::builtin()), config, bindings).unwrap();

        controller.on_filter_toggle(0);
        controller.on_filter_toggle(1);
        let selected: Vec<_> = controller.controls().iter().map(|c| c.selected).collect();
        assert_eq!(selected, vec![true, true]);
        assert!(controller.active_filters().contains(Platform::YouTube));
        assert!(controller.panel().visible);
        assert_eq!(shown_ids(&controller), vec![2, 3]);

        controller.on_filter_toggle(0);
        let selected: Vec<_> = controller.controls().iter().map(|c| c.selected).collect();
        assert_eq!(selected, vec![false, true]);
        assert!(controller.active_filters().is_empty());
        assert!(!controller.panel().visible);
    }

    #[test]
    fn unrecognized_marker_is_a_no_op() {
        let config = WidgetConfig::default();
        let bindings = WidgetBindings::from_config(&config, ["fab fa-twitter"]);
        let mut controller =
            SearchController::initialize(Arc::new(Catalog::builtin()), config, bindings).unwrap();

        assert_eq!(controller.on_filter_toggle(0), None);
        assert_eq!(controller.on_filter_toggle(5), None);
        assert!(controller.active_filters().is_empty());
        assert!(!controller.controls()[0].selected);
        assert_eq!(controller.panel(), &PanelState::default());
    }

    #[test]
    fn outside_click_hides_and_focus_restores_stale_panel() {
        let mut controller = controller();
        controller.on_input("tasting");
        let rendered = controller.panel().view.clone();

        controller.on_outside_click();
        assert!(!controller.panel().visible);
        assert_eq!(controller.panel().view, rendered);

        controller.on_focus();
        assert!(controller.panel().visible);
        assert_eq!(controller.panel().view, rendered);
    }

    #[test]
    fn focus_with_short_query_keeps_panel_hidden() {
        let mut controller = controller();
        controller.on_filter_toggle(control_index(Platform::Blog));
        controller.on_outside_click();

        controller.on_focus();
        assert!(!controller.panel().visible);
    }

    #[test]
    fn search_respects_limit_and_active_filters() {
        let mut controller = controller();
        controller.on_filter_toggle(control_index(Platform::Blog));
        let found: Vec<EntryId> = controller
            .search(&SearchQuery::new("experience"))
            .into_iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(found, vec![EntryId::new(1), EntryId::new(3)]);
    }

    #[test]
    fn dispose_consumes_controller() {
        let mut controller = controller();
        controller.on_input("vineyard");
        controller.dispose();
    }
}
