//! Client for the two tempgami API queries.
//!
//! The client only builds URLs and interprets bodies; moving bytes is left to
//! an [`HttpGet`] implementation (browser `fetch` in the web app, a canned
//! table in tests).

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::error::Result;
use crate::payload::{decode_candidates, decode_station, StationPayload};
use crate::selection::SelectionState;
use crate::selector::SearchRegion;
use crate::station::{CandidateStation, StationId};

/// A transport able to perform a GET and hand back the body of a 2xx response.
///
/// Non-success statuses must be reported as [`crate::error::QueryError::Status`] and
/// connection failures as [`crate::error::QueryError::Transport`].
pub trait HttpGet {
    fn get(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// Station-network categories used to narrow a region search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkFilterSet {
    /// Stations with a WMO number
    pub wmo: bool,
    /// GCOS Surface Network stations
    pub gsn: bool,
    /// US Historical / Climate Reference Network stations
    pub hcn_crn: bool,
    /// Any station, regardless of network
    pub others: bool,
}

impl Default for NetworkFilterSet {
    fn default() -> Self {
        Self {
            wmo: true,
            gsn: true,
            hcn_crn: true,
            others: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StationQueryClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpGet> StationQueryClient<T> {
    /// `base_url` is the API root, e.g. "/api/tempgami". A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            transport,
        }
    }

    pub fn station_url(&self, id: &StationId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub fn search_url(&self, region: &SearchRegion, filters: &NetworkFilterSet) -> String {
        format!(
            "{}/search?lon={}&lat={}&dist={}&wmo={}&gsn={}&hcncrn={}&others={}",
            self.base_url,
            region.center.lon,
            region.center.lat,
            region.radius_m,
            filters.wmo,
            filters.gsn,
            filters.hcn_crn,
            filters.others,
        )
    }

    /// Fetch and decode a station, keeping the failure typed.
    pub async fn load_station(&self, id: &StationId) -> Result<StationPayload> {
        let url = self.station_url(id);
        info!("Fetching station {} from {}", id, url);
        let body = self.transport.get(&url).await?;
        decode_station(&body)
    }

    /// Fetch a station as the state the UI should show.
    ///
    /// Every failure becomes `Error` carrying the failure's own description.
    pub async fn fetch_station(&self, id: &StationId) -> SelectionState {
        match self.load_station(id).await {
            Ok(payload) => SelectionState::Ready(Box::new(payload)),
            Err(e) => SelectionState::Error(e.to_string()),
        }
    }

    /// Search for stations inside `region`.
    ///
    /// Failures are logged and reported as `None`; they are never shown to the
    /// user, unlike station fetch failures.
    pub async fn search_region(
        &self,
        region: &SearchRegion,
        filters: &NetworkFilterSet,
    ) -> Option<Vec<CandidateStation>> {
        let url = self.search_url(region, filters);
        let result = match self.transport.get(&url).await {
            Ok(body) => decode_candidates(&body),
            Err(e) => Err(e),
        };
        match result {
            Ok(candidates) => {
                info!("Region search returned {} stations", candidates.len());
                Some(candidates)
            }
            Err(e) => {
                warn!("Region search failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::geodesic::LatLon;
    use crate::payload::tests::STATION_BODY;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned responses keyed by URL; unknown URLs fail like a dropped connection.
    #[derive(Default)]
    struct MockTransport {
        responses: HashMap<String, Result<String>>,
        requested: RefCell<Vec<String>>,
    }

    impl MockTransport {
        fn with(mut self, url: &str, response: Result<String>) -> Self {
            self.responses.insert(url.to_string(), response);
            self
        }
    }

    impl HttpGet for MockTransport {
        async fn get(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(QueryError::Transport("Network Error".to_string())))
        }
    }

    const SEARCH_URL: &str = "/api/tempgami/search?lon=-73.9&lat=40.7&dist=50000&wmo=true&gsn=false&hcncrn=false&others=false";

    const TWO_FEATURES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-73.96, 40.78]},
         "properties": {"id": "USW00094728", "name": "NY CITY CNTRL PARK"}},
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-73.88, 40.77]},
         "properties": {"id": "USW00014732", "name": "LAGUARDIA AP"}}
    ]}"#;

    fn region() -> SearchRegion {
        SearchRegion {
            center: LatLon::new(40.7, -73.9),
            radius_m: 50000.0,
        }
    }

    fn wmo_only() -> NetworkFilterSet {
        NetworkFilterSet {
            wmo: true,
            gsn: false,
            hcn_crn: false,
            others: false,
        }
    }

    #[test]
    fn test_urls() {
        let client = StationQueryClient::new("/api/tempgami/", MockTransport::default());
        assert_eq!(
            client.station_url(&StationId::new("USW00014942")),
            "/api/tempgami/USW00014942"
        );
        assert_eq!(client.search_url(&region(), &wmo_only()), SEARCH_URL);
    }

    #[tokio::test]
    async fn test_fetch_station_ready() {
        let transport = MockTransport::default()
            .with("/api/tempgami/USW00014942", Ok(STATION_BODY.to_string()));
        let client = StationQueryClient::new("/api/tempgami", transport);

        match client.fetch_station(&StationId::new("USW00014942")).await {
            SelectionState::Ready(payload) => {
                assert_eq!(payload.total_days, 3650);
                assert_eq!(format!("{:.1}", payload.years_of_data()), "10.0");
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_station_network_error() {
        let client = StationQueryClient::new("/api/tempgami", MockTransport::default());
        let state = client.fetch_station(&StationId::new("NOPE")).await;
        assert_eq!(state, SelectionState::Error("Network Error".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_station_status_error() {
        let transport = MockTransport::default().with(
            "/api/tempgami/BAD",
            Err(QueryError::Status {
                status: 500,
                text: "Internal Server Error".to_string(),
            }),
        );
        let client = StationQueryClient::new("/api/tempgami", transport);
        let state = client.fetch_station(&StationId::new("BAD")).await;
        assert_eq!(
            state,
            SelectionState::Error(
                "Request failed with status code 500 (Internal Server Error)".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_search_region_two_candidates() {
        let transport = MockTransport::default().with(SEARCH_URL, Ok(TWO_FEATURES.to_string()));
        let client = StationQueryClient::new("/api/tempgami", transport);

        let candidates = client.search_region(&region(), &wmo_only()).await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].id, StationId::new("USW00014732"));
        assert_eq!(client.transport.requested.borrow().as_slice(), &[SEARCH_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_search_region_failure_is_none() {
        let client = StationQueryClient::new("/api/tempgami", MockTransport::default());
        assert_eq!(client.search_region(&region(), &wmo_only()).await, None);

        let garbled = MockTransport::default().with(SEARCH_URL, Ok("not json".to_string()));
        let client = StationQueryClient::new("/api/tempgami", garbled);
        assert_eq!(client.search_region(&region(), &wmo_only()).await, None);
    }
}
