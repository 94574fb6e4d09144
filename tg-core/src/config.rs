use serde::{Deserialize, Serialize};

use crate::geodesic::LatLon;
use crate::query::NetworkFilterSet;
use crate::station::StationId;

/// Runtime settings for the explorer.
///
/// Every field has a default, so a deployment only needs to override what
/// differs (usually `api_base`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Root of the tempgami API, without trailing slash
    pub api_base: String,
    /// Station shown when the page is opened at `/`
    pub default_station: StationId,
    /// Initial map view
    pub map_center: LatLon,
    pub map_zoom: u8,
    /// Network checkboxes as first shown
    pub default_filters: NetworkFilterSet,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/tempgami".to_string(),
            default_station: StationId::new("USW00014942"),
            map_center: LatLon::new(40.7, -73.9),
            map_zoom: 4,
            default_filters: NetworkFilterSet::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
