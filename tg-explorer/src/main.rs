//! Tempgami Explorer
//!
//! Shows, for one GHCN-Daily weather station, how many days each (low, high)
//! temperature pair has been observed, plus its most recent readings. Other
//! stations are found by typing a station code or by drawing a circle on the
//! map and picking one of the stations found inside it.
//!
//! Data flow:
//! 1. The page path `/{station}` is the single source of truth for which
//!    station is shown; `/` redirects to the configured default.
//! 2. Each path change is handed to `SelectionController::set_identity`,
//!    which returns a ticket when a fetch is needed.
//! 3. `GET {api_base}/{station}` is decoded into a `StationPayload` and
//!    applied with the ticket, so a late response for a station the user
//!    has already left is discarded.
//! 4. Picking a station (text field or map) only navigates; step 2 does
//!    the rest.

use dioxus::prelude::*;
use tg_chart_ui::components::{
    CandidateList, ErrorDisplay, LoadingSpinner, NetworkFilters, RecentTable, StationControls,
    StationMap, StationSummary, TemperatureMatrix,
};
use tg_chart_ui::js_bridge;
use tg_chart_ui::state::AppState;
use tg_core::config::ExplorerConfig;
use tg_core::selection::SelectionState;
use tg_core::station::StationId;

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:station")]
    Station { station: String },
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tempgami-root"))
        .launch(App);
}

/// Defaults, overridden by `window.TEMPGAMI_CONFIG` when the page sets it.
fn load_config() -> ExplorerConfig {
    let Some(json) = js_bridge::read_config_override() else {
        return ExplorerConfig::default();
    };
    match ExplorerConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Using page config (api_base {})", config.api_base);
            config
        }
        Err(e) => {
            log::error!("Ignoring malformed TEMPGAMI_CONFIG: {}", e);
            ExplorerConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppState::new(load_config()));

    // Initialize D3.js/Leaflet chart scripts
    use_effect(js_bridge::init_charts);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            Router::<Route> {}
        }
    }
}

/// `/` goes to the default station.
#[component]
fn Home() -> Element {
    let state = use_context::<AppState>();
    let nav = navigator();

    use_effect(move || {
        let station = state.config.peek().default_station.to_string();
        nav.replace(Route::Station { station });
    });

    rsx! {
        LoadingSpinner {}
    }
}

#[component]
fn Station(station: String) -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();

    // The path changed: point the controller at it and fetch if needed
    use_effect({
    let station = station.clone();
    use_reactive!(|(station,)| {
        let id = StationId::new(station);
        let Some(ticket) = state.selection.with_mut(|s| s.set_identity(id)) else {
            return;
        };
        let client = state.client();
        spawn(async move {
            let outcome = client.fetch_station(&ticket.station).await;
            if let SelectionState::Error(message) = &outcome {
                log::error!("Failed to load station {}: {}", ticket.station, message);
            }
            state.selection.with_mut(|s| s.complete(&ticket, outcome));
        });
    })
    });

    let go_to = move |id: StationId| {
        nav.push(Route::Station {
            station: id.to_string(),
        });
    };

    let (error, ready) = {
        let selection = state.selection.read();
        let error = match selection.state() {
            SelectionState::Error(message) => Some(message.clone()),
            _ => None,
        };
        (error, selection.payload().is_some())
    };

    rsx! {
        StationControls {
            key: "{station}",
            current: station.clone(),
            on_submit: go_to,
        }
        if let Some(message) = error {
            ErrorDisplay {
                station: station.clone(),
                message,
            }
        } else {
            NetworkFilters {}
            StationMap { on_pick: go_to }
            CandidateList { on_pick: go_to }
            if ready {
                StationSummary {}
                TemperatureMatrix {}
                RecentTable {}
            } else {
                LoadingSpinner {}
            }
        }
    }
}
