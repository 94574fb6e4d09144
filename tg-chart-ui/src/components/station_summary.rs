//! Headline facts about the active station.

use crate::state::AppState;
use dioxus::prelude::*;
use tg_utils::dates::format_date;

#[component]
pub fn StationSummary() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.selection.read().payload().cloned() else {
        return rsx! {};
    };
    let info = &payload.info;

    let mut details = vec![
        info.id.to_string(),
        format!("{:.4}, {:.4}", info.lat, info.lon),
    ];
    details.extend(info.state.clone());
    details.extend(
        info.elevation
            .filter(|e| *e > -999.0)
            .map(|e| format!("{:.1} m", e)),
    );
    let networks: Vec<String> = [
        info.wmo.as_ref().map(|wmo| format!("WMO {}", wmo)),
        info.gsn.as_ref().map(|_| "GSN".to_string()),
        info.hcn_crn.as_ref().map(|_| "HCN/CRN".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !networks.is_empty() {
        details.push(networks.join(", "));
    }
    let details = details.join(" · ");

    let unique = payload.unique_combinations;
    let total_days = payload.total_days;
    let years = format!("{:.1}", payload.years_of_data());
    let range = payload
        .date_range
        .map(|(start, end)| format!(", {} to {}", format_date(&start), format_date(&end)))
        .unwrap_or_default();

    rsx! {
        div {
            style: "margin: 12px 0;",
            h1 {
                style: "margin: 0; font-size: 24px;",
                "{info.name}"
            }
            div {
                style: "color: #666; font-size: 13px; margin-bottom: 8px;",
                "{details}"
            }
            h2 {
                style: "margin: 4px 0; font-size: 18px;",
                "{unique} temperature combinations"
            }
            p {
                style: "margin: 4px 0;",
                "{total_days} days of data ({years} years){range}"
            }
        }
    }
}
