//! Search results as a list of buttons, mirroring the map's candidate markers.

use crate::state::AppState;
use dioxus::prelude::*;
use tg_core::station::StationId;

#[derive(Props, Clone, PartialEq)]
pub struct CandidateListProps {
    /// Called with the station to navigate to
    pub on_pick: EventHandler<StationId>,
}

#[component]
pub fn CandidateList(props: CandidateListProps) -> Element {
    let mut state = use_context::<AppState>();
    let on_pick = props.on_pick;

    // Hidden while a circle is being drawn, like the markers
    if state.selector.read().is_drawing() {
        return rsx! {};
    }
    let candidates: Vec<(StationId, String, String)> = state
        .overlay
        .read()
        .candidates()
        .iter()
        .map(|c| {
            (
                c.id.clone(),
                format!("{} ({})", c.name, c.id),
                format!("{:.3}, {:.3}", c.lat, c.lon),
            )
        })
        .collect();
    if candidates.is_empty() {
        return rsx! {};
    }
    let found = format!("{} stations found:", candidates.len());

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 6px; align-items: center;",
            span { style: "font-weight: bold;", "{found}" }
            for (id, label, position) in candidates {
                button {
                    key: "{id}",
                    title: "{position}",
                    onclick: {
                        let id = id.clone();
                        move |_| {
                            let picked = state.overlay.with_mut(|overlay| overlay.pick(&id));
                            if let Some(picked) = picked {
                                on_pick.call(picked);
                            }
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
