//! Search results and what the map should draw for them.
//!
//! The map never holds state of its own: [`ResultsOverlay::features`] is
//! recomputed from the selector, the candidate set and the active station
//! whenever any of them changes, and the host draws whatever comes back.

use serde::Serialize;

use crate::geodesic::LatLon;
use crate::selector::GeoCircleSelector;
use crate::station::{CandidateStation, StationId, StationInfo};

/// Identifies which search a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// What activating a feature does.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "station")]
pub enum FeatureAction {
    /// Make this station the active one
    Pick(StationId),
}

/// A single thing to draw on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapFeature {
    /// The circle currently being dragged out
    SearchCircle { center: LatLon, radius_m: f64 },
    /// A search result the user can pick
    Candidate {
        position: LatLon,
        label: String,
        action: FeatureAction,
    },
    /// The station whose data is being viewed; display only
    ActiveStation { position: LatLon, label: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsOverlay {
    candidates: Vec<CandidateStation>,
    generation: u64,
}

impl ResultsOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[CandidateStation] {
        &self.candidates
    }

    /// A new circle was anchored: drop results and ignore pending searches.
    pub fn begin_gesture(&mut self) {
        self.clear();
    }

    /// Register an outgoing search and get the ticket its response must present.
    pub fn search_started(&mut self) -> SearchTicket {
        self.generation += 1;
        SearchTicket(self.generation)
    }

    /// Replace the candidate set with a search response.
    ///
    /// A failed search (`None`) shows as no candidates. Responses for a search
    /// that has since been superseded are dropped and `false` is returned.
    pub fn show(&mut self, ticket: SearchTicket, results: Option<Vec<CandidateStation>>) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Dropping stale search response {:?}", ticket);
            return false;
        }
        self.candidates = results.unwrap_or_default();
        true
    }

    /// Activate a candidate: clears the set and returns the station to select.
    pub fn pick(&mut self, id: &StationId) -> Option<StationId> {
        let picked = self.candidates.iter().find(|c| &c.id == id)?.id.clone();
        self.clear();
        Some(picked)
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
        self.generation += 1;
    }

    /// Features to draw for the current state.
    ///
    /// While a circle is being drawn only the circle is shown, never the
    /// candidates. The active station marker is shown whenever there is one.
    pub fn features(
        &self,
        selector: &GeoCircleSelector,
        active: Option<&StationInfo>,
    ) -> Vec<MapFeature> {
        let mut features = Vec::new();
        if let Some(region) = selector.in_progress() {
            features.push(MapFeature::SearchCircle {
                center: region.center,
                radius_m: region.radius_m,
            });
        } else {
            features.extend(self.candidates.iter().map(|c| MapFeature::Candidate {
                position: c.location(),
                label: c.name.clone(),
                action: FeatureAction::Pick(c.id.clone()),
            }));
        }
        if let Some(info) = active {
            features.push(MapFeature::ActiveStation {
                position: info.location(),
                label: info.name.clone(),
            });
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str) -> CandidateStation {
        CandidateStation {
            id: StationId::new(id),
            name: name.to_string(),
            lat: 40.7,
            lon: -73.9,
        }
    }

    fn two_results() -> Vec<CandidateStation> {
        vec![
            candidate("USW00094728", "NY CITY CNTRL PARK"),
            candidate("USW00014732", "LAGUARDIA AP"),
        ]
    }

    fn active() -> StationInfo {
        StationInfo {
            id: StationId::new("USW00014942"),
            name: "OMAHA EPPLEY AIRFIELD".to_string(),
            lat: 41.31,
            lon: -95.9,
            elevation: None,
            state: None,
            gsn: None,
            hcn_crn: None,
            wmo: None,
        }
    }

    #[test]
    fn test_pick_second_candidate() {
        let mut overlay = ResultsOverlay::new();
        let ticket = overlay.search_started();
        assert!(overlay.show(ticket, Some(two_results())));

        let features = overlay.features(&GeoCircleSelector::new(), None);
        assert_eq!(features.len(), 2);

        let picked = overlay.pick(&StationId::new("USW00014732"));
        assert_eq!(picked, Some(StationId::new("USW00014732")));
        assert!(overlay.candidates().is_empty());
    }

    #[test]
    fn test_pick_unknown_is_ignored() {
        let mut overlay = ResultsOverlay::new();
        let ticket = overlay.search_started();
        overlay.show(ticket, Some(two_results()));
        assert_eq!(overlay.pick(&StationId::new("ELSEWHERE")), None);
        assert_eq!(overlay.candidates().len(), 2);
    }

    #[test]
    fn test_failed_search_shows_nothing() {
        let mut overlay = ResultsOverlay::new();
        let ticket = overlay.search_started();
        overlay.show(ticket, Some(two_results()));
        let ticket = overlay.search_started();
        assert!(overlay.show(ticket, None));
        assert!(overlay.candidates().is_empty());
    }

    #[test]
    fn test_late_results_after_new_gesture_are_dropped() {
        let mut overlay = ResultsOverlay::new();
        let ticket = overlay.search_started();
        overlay.begin_gesture();
        assert!(!overlay.show(ticket, Some(two_results())));
        assert!(overlay.candidates().is_empty());
    }

    #[test]
    fn test_circle_and_candidates_are_exclusive() {
        let mut overlay = ResultsOverlay::new();
        let ticket = overlay.search_started();
        overlay.show(ticket, Some(two_results()));

        let mut selector = GeoCircleSelector::new();
        selector.click(LatLon::new(40.0, -74.0));
        let features = overlay.features(&selector, Some(&active()));
        assert_eq!(features.len(), 2);
        assert!(matches!(features[0], MapFeature::SearchCircle { .. }));
        assert!(matches!(features[1], MapFeature::ActiveStation { .. }));
    }

    #[test]
    fn test_candidate_feature_carries_pick_action() {
        let mut overlay = ResultsOverlay::new();
        let ticket = overlay.search_started();
        overlay.show(ticket, Some(two_results()));
        let features = overlay.features(&GeoCircleSelector::new(), Some(&active()));
        assert_eq!(features.len(), 3);
        assert_eq!(
            features[1],
            MapFeature::Candidate {
                position: LatLon::new(40.7, -73.9),
                label: "LAGUARDIA AP".to_string(),
                action: FeatureAction::Pick(StationId::new("USW00014732")),
            }
        );
    }

    #[test]
    fn test_feature_json_shape() {
        let feature = MapFeature::Candidate {
            position: LatLon::new(1.0, 2.0),
            label: "X".to_string(),
            action: FeatureAction::Pick(StationId::new("ID1")),
        };
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["kind"], "candidate");
        assert_eq!(json["action"]["type"], "Pick");
        assert_eq!(json["action"]["station"], "ID1");
        assert_eq!(json["position"]["lat"], 1.0);
    }
}
