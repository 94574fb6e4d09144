//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tg_core::config::ExplorerConfig;
use tg_core::overlay::{MapFeature, ResultsOverlay};
use tg_core::query::{NetworkFilterSet, StationQueryClient};
use tg_core::selection::SelectionController;
use tg_core::selector::GeoCircleSelector;

use crate::transport::WebTransport;

/// Shared application state for the explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Runtime settings (defaults merged with any page override)
    pub config: Signal<ExplorerConfig>,
    /// Active station and its load lifecycle
    pub selection: Signal<SelectionController>,
    /// Circle drawing gesture on the map
    pub selector: Signal<GeoCircleSelector>,
    /// Region search results
    pub overlay: Signal<ResultsOverlay>,
    /// Network checkboxes
    pub filters: Signal<NetworkFilterSet>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        let filters = config.default_filters;
        Self {
            config: Signal::new(config),
            selection: Signal::new(SelectionController::new()),
            selector: Signal::new(GeoCircleSelector::new()),
            overlay: Signal::new(ResultsOverlay::new()),
            filters: Signal::new(filters),
        }
    }

    /// Query client pointed at the configured API root.
    pub fn client(&self) -> StationQueryClient<WebTransport> {
        StationQueryClient::new(self.config.peek().api_base.clone(), WebTransport)
    }

    /// Everything the map should currently draw. Subscribes the caller to
    /// the selector, overlay and selection signals.
    pub fn map_features(&self) -> Vec<MapFeature> {
        let selection = self.selection.read();
        self.overlay
            .read()
            .features(&self.selector.read(), selection.active_station())
    }
}
