//! Container for D3/Leaflet-owned DOM.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS side renders into
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
    /// Fixed height instead of growing with content (Leaflet needs one)
    #[props(default = false)]
    pub fixed_height: bool,
}

/// An empty div handed over to JS. Dioxus never renders children into it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let height = if props.fixed_height {
        format!("height: {}px;", props.min_height)
    } else {
        format!("min-height: {}px;", props.min_height)
    };

    rsx! {
        div {
            id: "{props.id}",
            style: "{height} width: 100%; position: relative; border: 1px solid #E0E0E0; border-radius: 4px;",
        }
    }
}
