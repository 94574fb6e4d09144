//! Leaflet map: circle drawing, region search and candidate picking.
//!
//! Leaflet events arrive on JS callbacks outside the Dioxus runtime, so they
//! are forwarded into a coroutine and all signal writes happen there.

use crate::components::{ChartContainer, ChartHeader};
use crate::js_bridge::{self, MapEvent};
use crate::state::AppState;
use dioxus::prelude::*;
use futures::StreamExt;
use tg_core::selector::{GestureEvent, GestureOutcome};
use tg_core::station::StationId;

/// Map container DOM element ID used by Leaflet.
const MAP_ID: &str = "station-map";

#[derive(Props, Clone, PartialEq)]
pub struct StationMapProps {
    /// Called with a picked candidate's station
    pub on_pick: EventHandler<StationId>,
}

#[component]
pub fn StationMap(props: StationMapProps) -> Element {
    let mut state = use_context::<AppState>();
    let on_pick = props.on_pick;

    let events = use_coroutine(move |mut rx: UnboundedReceiver<MapEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                MapEvent::Click(point) => handle_gesture(state, GestureEvent::Click(point)),
                MapEvent::PointerMove(point) => {
                    // Moves are constant; only an active gesture cares
                    if state.selector.peek().is_drawing() {
                        handle_gesture(state, GestureEvent::PointerMove(point));
                    }
                }
                MapEvent::Pick(id) => {
                    let picked = state.overlay.with_mut(|overlay| overlay.pick(&id));
                    match picked {
                        Some(id) => on_pick.call(id),
                        None => log::warn!("Picked {} which is not a current candidate", id),
                    }
                }
            }
        }
    });

    // Create the map and hook up its events once the container is mounted
    use_effect(move || {
        let (center, zoom) = {
            let config = state.config.peek();
            (config.map_center, config.map_zoom)
        };
        js_bridge::init_station_map(MAP_ID, center, zoom);
        let tx = events.tx();
        js_bridge::register_map_handlers(move |event| {
            if tx.unbounded_send(event).is_err() {
                log::warn!("Map event dropped; handler is gone");
            }
        });
    });

    // Redraw whenever the circle, the results or the active station change
    use_effect(move || {
        let features = state.map_features();
        match serde_json::to_string(&features) {
            Ok(json) => js_bridge::set_map_features(&json),
            Err(e) => log::error!("Failed to serialize map features: {}", e),
        }
    });

    rsx! {
        ChartHeader {
            title: "Find Nearby Stations".to_string(),
            caption: "Click to place a center, move to size the circle, click again to search.".to_string(),
        }
        ChartContainer {
            id: MAP_ID.to_string(),
            min_height: 450,
            fixed_height: true,
        }
    }
}

/// Feed one gesture event to the selector and act on the outcome.
fn handle_gesture(mut state: AppState, event: GestureEvent) {
    let outcome = state.selector.with_mut(|selector| selector.handle(event));
    match outcome {
        GestureOutcome::Started => state.overlay.with_mut(|overlay| overlay.begin_gesture()),
        GestureOutcome::Finalized(region) => {
            let ticket = state.overlay.with_mut(|overlay| overlay.search_started());
            let filters = *state.filters.peek();
            let client = state.client();
            log::info!(
                "Searching {:.0} m around {:.4}, {:.4}",
                region.radius_m,
                region.center.lat,
                region.center.lon
            );
            spawn(async move {
                let results = client.search_region(&region, &filters).await;
                state.overlay.with_mut(|overlay| overlay.show(ticket, results));
            });
        }
        GestureOutcome::Resized(_) | GestureOutcome::Ignored => {}
    }
}
