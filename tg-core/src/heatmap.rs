//! Render model for the temperature matrix chart.
//!
//! Serialized to JSON and handed to the D3 heatmap in `tg-chart-ui`.

use serde::Serialize;

use crate::color_scale::{color_for_count, BREAKPOINTS};
use crate::matrix::TemperatureMatrix;

/// One drawable cell with its hover metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub low: f64,
    pub high: f64,
    pub count: u32,
    /// "YYYY-MM-DD"
    pub first: String,
    /// "YYYY-MM-DD"
    pub last: String,
    /// CSS color
    pub color: String,
}

/// Chart-level settings passed alongside the cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Shared axis domain for lows (x) and highs (y)
    pub axis: Vec<f64>,
    pub max_count: u32,
    /// Legend stops as (fraction, CSS color)
    pub legend: Vec<(f64, String)>,
}

impl HeatmapConfig {
    pub fn for_matrix(title: impl Into<String>, matrix: &TemperatureMatrix) -> Self {
        Self {
            title: title.into(),
            x_axis_label: "Low".to_string(),
            y_axis_label: "High".to_string(),
            axis: matrix.axis().to_vec(),
            max_count: matrix.max_count(),
            legend: BREAKPOINTS
                .iter()
                .map(|(fraction, color)| (*fraction, color.to_string()))
                .collect(),
        }
    }
}

/// Cells to draw. Zero-count cells are transparent and therefore omitted.
pub fn heatmap_cells(matrix: &TemperatureMatrix) -> Vec<HeatmapCell> {
    let max = matrix.max_count();
    matrix
        .occupied_cells()
        .map(|cell| HeatmapCell {
            low: cell.low,
            high: cell.high,
            count: cell.count,
            first: tg_utils::dates::format_date(&cell.meta.first),
            last: tg_utils::dates::format_date(&cell.meta.last),
            color: color_for_count(cell.count, max).to_string(),
        })
        .collect()
}

/// Hover text for a cell, one line per field.
pub fn tooltip_lines(cell: &HeatmapCell) -> [String; 5] {
    [
        format!("Low: {}", cell.low),
        format!("High: {}", cell.high),
        format!("Count: {}", cell.count),
        format!("First: {}", cell.first),
        format!("Last: {}", cell.last),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CellMeta;
    use chrono::NaiveDate;

    fn matrix() -> TemperatureMatrix {
        let d = |y| NaiveDate::from_ymd_opt(y, 6, 1).unwrap();
        let m = Some(CellMeta {
            first: d(1990),
            last: d(2020),
        });
        TemperatureMatrix::new(
            vec![50.0, 60.0],
            vec![vec![4, 8], vec![0, 0]],
            vec![vec![m, m], vec![None, None]],
        )
        .unwrap()
    }

    #[test]
    fn test_only_occupied_cells_are_drawn() {
        let cells = heatmap_cells(&matrix());
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|c| c.count > 0));
    }

    #[test]
    fn test_max_cell_uses_top_color() {
        let cells = heatmap_cells(&matrix());
        let top = cells.iter().find(|c| c.count == 8).unwrap();
        assert_eq!(top.color, "rgba(227,26,28,1)");
        assert_eq!((top.low, top.high), (50.0, 60.0));
    }

    #[test]
    fn test_tooltip_has_all_metadata() {
        let cells = heatmap_cells(&matrix());
        let lines = tooltip_lines(&cells[0]);
        assert_eq!(lines[0], "Low: 50");
        assert_eq!(lines[1], "High: 50");
        assert_eq!(lines[2], "Count: 4");
        assert_eq!(lines[3], "First: 1990-06-01");
        assert_eq!(lines[4], "Last: 2020-06-01");
    }

    #[test]
    fn test_config_tracks_matrix() {
        let config = HeatmapConfig::for_matrix("Station", &matrix());
        assert_eq!(config.max_count, 8);
        assert_eq!(config.axis, vec![50.0, 60.0]);
        assert_eq!(config.legend.len(), 7);
        assert_eq!(config.legend[0].1, "rgba(0,0,0,0)");
    }
}
