//! Heatmap of how often each (low, high) pair has been observed.

use crate::components::{ChartContainer, ChartHeader};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use serde::Serialize;
use tg_core::heatmap::{heatmap_cells, tooltip_lines, HeatmapCell, HeatmapConfig};

/// Chart container DOM element ID used by D3.js to render into.
const MATRIX_ID: &str = "temperature-matrix";

/// A cell as the heatmap script expects it.
#[derive(Serialize)]
struct DrawnCell<'a> {
    #[serde(flatten)]
    cell: &'a HeatmapCell,
    tooltip: [String; 5],
}

#[component]
pub fn TemperatureMatrix() -> Element {
    let state = use_context::<AppState>();

    // Re-render whenever the loaded payload changes
    use_effect(move || {
        let selection = state.selection.read();
        let Some(payload) = selection.payload() else {
            js_bridge::destroy_chart(MATRIX_ID);
            return;
        };

        let cells = heatmap_cells(&payload.matrix);
        let drawn: Vec<DrawnCell> = cells
            .iter()
            .map(|cell| DrawnCell {
                cell,
                tooltip: tooltip_lines(cell),
            })
            .collect();
        let title = format!("{} ({})", payload.info.name, payload.info.id);
        let config = HeatmapConfig::for_matrix(title, &payload.matrix);

        match (serde_json::to_string(&drawn), serde_json::to_string(&config)) {
            (Ok(data_json), Ok(config_json)) => {
                log::debug!("Rendering {} matrix cells", drawn.len());
                js_bridge::render_heatmap(MATRIX_ID, &data_json, &config_json);
            }
            (Err(e), _) | (_, Err(e)) => log::error!("Failed to serialize heatmap: {}", e),
        }
    });

    rsx! {
        ChartHeader {
            title: "Low/High Combinations".to_string(),
            caption: "Days observed for each pair of daily low and high temperature. Hover a cell for first and last occurrence.".to_string(),
        }
        ChartContainer {
            id: MATRIX_ID.to_string(),
            min_height: 800,
        }
    }
}
