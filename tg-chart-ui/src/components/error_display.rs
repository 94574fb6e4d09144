//! Error display for a failed station load.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Station that failed to load
    pub station: String,
    /// Failure description, shown verbatim
    pub message: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load {props.station}: " }
            "{props.message}"
        }
    }
}
