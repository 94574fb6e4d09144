//! Station code entry.

use dioxus::prelude::*;
use tg_core::station::StationId;

/// Where users can look up GHCN-Daily station codes.
const STATION_LIST_URL: &str = "https://www1.ncdc.noaa.gov/pub/data/ghcn/daily/ghcnd-stations.txt";

#[derive(Props, Clone, PartialEq)]
pub struct StationControlsProps {
    /// Station the page is currently showing; seeds the text field
    pub current: String,
    /// Called with the trimmed code when the user asks for a station
    pub on_submit: EventHandler<StationId>,
}

/// Text field plus "Update Requested Station" button.
///
/// The field keeps its own draft, so render this keyed by the current
/// station to reset the draft after navigation.
#[component]
pub fn StationControls(props: StationControlsProps) -> Element {
    let mut draft = use_signal(|| props.current.clone());
    let on_submit = props.on_submit;

    let submit = move || {
        let code = draft.peek().trim().to_string();
        if code.is_empty() {
            return;
        }
        on_submit.call(StationId::new(code));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
            span {
                "Station from "
                a {
                    href: STATION_LIST_URL,
                    target: "_blank",
                    "Station List"
                }
                ":"
            }
            input {
                r#type: "text",
                value: "{draft}",
                placeholder: "Enter station here",
                oninput: move |evt: Event<FormData>| draft.set(evt.value()),
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                onclick: move |_| submit(),
                "Update Requested Station"
            }
        }
    }
}
