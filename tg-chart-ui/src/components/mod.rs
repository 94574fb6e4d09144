//! Reusable Dioxus RSX components for the tempgami explorer.

mod candidate_list;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod network_filters;
mod recent_table;
mod station_controls;
mod station_map;
mod station_summary;
mod temperature_matrix;

pub use candidate_list::CandidateList;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use network_filters::NetworkFilters;
pub use recent_table::RecentTable;
pub use station_controls::StationControls;
pub use station_map::StationMap;
pub use station_summary::StationSummary;
pub use temperature_matrix::TemperatureMatrix;
