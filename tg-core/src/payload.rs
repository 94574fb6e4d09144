//! Wire formats of the tempgami API and their conversion into domain types.
//!
//! A response is accepted only when it converts completely; any shape or
//! invariant violation rejects the whole body.

use chrono::NaiveDate;
use serde::Deserialize;
use tg_utils::dates::{parse_api_date, parse_optional_api_date};

use crate::error::{QueryError, Result};
use crate::matrix::{CellMeta, MatrixError, TemperatureMatrix};
use crate::station::{CandidateStation, RecentRecord, StationId, StationInfo};

/// Days per year used for the "years of data" figure.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Everything shown for one station after a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct StationPayload {
    pub info: StationInfo,
    pub matrix: TemperatureMatrix,
    /// Most recent first, exactly as the backend ordered them
    pub recent: Vec<RecentRecord>,
    /// Distinct (low, high) combinations on record
    pub unique_combinations: u64,
    /// Days with both a low and a high reading
    pub total_days: u64,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl StationPayload {
    pub fn years_of_data(&self) -> f64 {
        years_of_data(self.total_days)
    }
}

pub fn years_of_data(total_days: u64) -> f64 {
    total_days as f64 / DAYS_PER_YEAR
}

/// `GET /api/tempgami/{station}` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationResponse {
    /// Indexed `[high][low]`
    grid: Vec<Vec<f64>>,
    temps: Vec<f64>,
    /// Parallel to `grid`; empty strings for cells never seen
    firstlast: Vec<Vec<(String, String)>>,
    unique: u64,
    last10: Vec<(String, f64, f64)>,
    count: u64,
    station_info: Option<StationInfo>,
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Decode a station response body.
pub fn decode_station(body: &str) -> Result<StationPayload> {
    let raw: StationResponse = serde_json::from_str(body)?;

    let info = raw
        .station_info
        .ok_or_else(|| QueryError::Invalid("missing stationInfo".to_string()))?;

    let n = raw.temps.len();
    let counts = transpose(&raw.grid, n)?
        .into_iter()
        .map(|row| row.into_iter().map(to_count).collect::<Result<Vec<u32>>>())
        .collect::<Result<Vec<_>>>()?;
    let meta = transpose(&raw.firstlast, n)?
        .into_iter()
        .map(|row| row.into_iter().map(to_meta).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    let matrix = TemperatureMatrix::new(raw.temps, counts, meta)?;

    let recent = raw
        .last10
        .into_iter()
        .map(|(date, low, high)| {
            Ok(RecentRecord {
                date: parse_api_date(&date)?,
                low,
                high,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let start = raw.start_date.as_deref().map(parse_optional_api_date).transpose()?.flatten();
    let end = raw.end_date.as_deref().map(parse_optional_api_date).transpose()?.flatten();
    let date_range = match (start, end) {
        (Some(s), Some(e)) if s <= e => Some((s, e)),
        (None, None) => None,
        (s, e) => {
            return Err(QueryError::Invalid(format!(
                "bad date range {:?} - {:?}",
                s, e
            )))
        }
    };

    Ok(StationPayload {
        info,
        matrix,
        recent,
        unique_combinations: raw.unique,
        total_days: raw.count,
        date_range,
    })
}

/// Swap the backend's `[high][low]` layout into `[low][high]`.
fn transpose<T: Clone>(rows: &[Vec<T>], n: usize) -> Result<Vec<Vec<T>>> {
    if rows.len() != n {
        return Err(MatrixError::RowCount {
            rows: rows.len(),
            expected: n,
        }
        .into());
    }
    if let Some((row, cols)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(MatrixError::ColumnCount {
            row,
            cols: cols.len(),
            expected: n,
        }
        .into());
    }
    Ok((0..n)
        .map(|low| (0..n).map(|high| rows[high][low].clone()).collect())
        .collect())
}

fn to_count(value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(QueryError::Invalid(format!("bad cell count {}", value)))
    }
}

fn to_meta((first, last): (String, String)) -> Result<Option<CellMeta>> {
    match (parse_optional_api_date(&first)?, parse_optional_api_date(&last)?) {
        (Some(first), Some(last)) => Ok(Some(CellMeta { first, last })),
        _ => Ok(None),
    }
}

impl From<MatrixError> for QueryError {
    fn from(err: MatrixError) -> Self {
        QueryError::Invalid(err.to_string())
    }
}

/// `GET /api/tempgami/search` body: a GeoJSON FeatureCollection.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: PointGeometry,
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    /// `[lon, lat]`
    coordinates: (f64, f64),
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    id: String,
    name: String,
}

/// Decode a region search body into candidates, in response order.
pub fn decode_candidates(body: &str) -> Result<Vec<CandidateStation>> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    if collection.kind != "FeatureCollection" {
        return Err(QueryError::Invalid(format!(
            "expected FeatureCollection, got {}",
            collection.kind
        )));
    }
    Ok(collection
        .features
        .into_iter()
        .map(|f| {
            let (lon, lat) = f.geometry.coordinates;
            CandidateStation {
                id: StationId::new(f.properties.id),
                name: f.properties.name,
                lat,
                lon,
            }
        })
        .collect())
}
