//! The station's most recent observations.

use crate::state::AppState;
use dioxus::prelude::*;
use tg_utils::dates::format_date;

/// Rows are shown in the order the API returned them.
#[component]
pub fn RecentTable() -> Element {
    let state = use_context::<AppState>();
    let rows: Vec<(String, f64, f64)> = match state.selection.read().payload() {
        Some(payload) => payload
            .recent
            .iter()
            .map(|r| (format_date(&r.date), r.low, r.high))
            .collect(),
        None => return rsx! {},
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            h2 {
                style: "margin: 4px 0; font-size: 18px;",
                "10 most recent"
            }
            table {
                style: "border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 4px 12px 4px 0;", "Date" }
                        th { style: "text-align: right; padding: 4px 12px;", "Low" }
                        th { style: "text-align: right; padding: 4px 12px;", "High" }
                    }
                }
                tbody {
                    for (i, (date, low, high)) in rows.into_iter().enumerate() {
                        tr {
                            key: "{i}",
                            td { style: "padding: 2px 12px 2px 0;", "{date}" }
                            td { style: "text-align: right; padding: 2px 12px;", "{low}" }
                            td { style: "text-align: right; padding: 2px 12px;", "{high}" }
                        }
                    }
                }
            }
        }
    }
}
