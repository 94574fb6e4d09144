//! Section header with title and optional caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Short explanation under the title (e.g., how to use the map)
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.caption}"
                }
            }
        }
    }
}
