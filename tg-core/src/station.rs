use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geodesic::LatLon;

/// External station code (e.g. a GHCN-Daily id such as "USW00014942").
///
/// Opaque to the client: it is only ever compared, put into request URLs and
/// mirrored into the page path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Metadata for the station currently being viewed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StationInfo {
    pub id: StationId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Elevation in meters, -999.9 in the station list means unknown
    #[serde(default)]
    pub elevation: Option<f64>,
    /// US state or Canadian province code
    #[serde(default)]
    pub state: Option<String>,
    /// GCOS Surface Network flag
    #[serde(default)]
    pub gsn: Option<String>,
    /// US Historical / Climate Reference Network flag
    #[serde(default)]
    pub hcn_crn: Option<String>,
    /// World Meteorological Organization number
    #[serde(default)]
    pub wmo: Option<String>,
}

impl StationInfo {
    pub fn location(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

/// A station returned by a region search.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CandidateStation {
    pub id: StationId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl CandidateStation {
    pub fn location(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

/// One daily (low, high) observation, in the backend's temperature unit.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RecentRecord {
    pub date: NaiveDate,
    pub low: f64,
    pub high: f64,
}
