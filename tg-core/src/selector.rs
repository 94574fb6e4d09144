//! Two-click circle drawing on the map.
//!
//! The first click anchors the circle, pointer moves stretch it, and the
//! second click finalizes it into a [`SearchRegion`]. There is no cancel:
//! once started, a circle can only be finished.

use serde::Serialize;

use crate::geodesic::{distance, LatLon};

/// A circular area to search for stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchRegion {
    pub center: LatLon,
    pub radius_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectorState {
    #[default]
    Idle,
    Drawing { origin: LatLon, radius_m: f64 },
}

/// Map input relevant to the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Click(LatLon),
    PointerMove(LatLon),
}

/// What a handled event means for the rest of the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// A new circle was anchored; previous results should be cleared
    Started,
    /// The in-progress circle changed size
    Resized(f64),
    /// The circle is complete and should be searched
    Finalized(SearchRegion),
    /// Nothing changed
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCircleSelector {
    state: SelectorState,
}

impl GeoCircleSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, SelectorState::Drawing { .. })
    }

    /// The circle being drawn, if any.
    pub fn in_progress(&self) -> Option<SearchRegion> {
        match self.state {
            SelectorState::Idle => None,
            SelectorState::Drawing { origin, radius_m } => Some(SearchRegion {
                center: origin,
                radius_m,
            }),
        }
    }

    pub fn handle(&mut self, event: GestureEvent) -> GestureOutcome {
        match event {
            GestureEvent::Click(point) => self.click(point),
            GestureEvent::PointerMove(point) => self.pointer_move(point),
        }
    }

    pub fn click(&mut self, point: LatLon) -> GestureOutcome {
        match self.state {
            SelectorState::Idle => {
                self.state = SelectorState::Drawing {
                    origin: point,
                    radius_m: 0.0,
                };
                GestureOutcome::Started
            }
            SelectorState::Drawing { origin, .. } => {
                self.state = SelectorState::Idle;
                GestureOutcome::Finalized(SearchRegion {
                    center: origin,
                    radius_m: distance(origin, point),
                })
            }
        }
    }

    pub fn pointer_move(&mut self, point: LatLon) -> GestureOutcome {
        match &mut self.state {
            SelectorState::Idle => GestureOutcome::Ignored,
            SelectorState::Drawing { origin, radius_m } => {
                *radius_m = distance(*origin, point);
                GestureOutcome::Resized(*radius_m)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: LatLon = LatLon { lat: 40.7, lon: -73.9 };

    #[test]
    fn test_first_click_starts_with_zero_radius() {
        let mut selector = GeoCircleSelector::new();
        assert_eq!(selector.click(ORIGIN), GestureOutcome::Started);
        assert_eq!(
            selector.state(),
            SelectorState::Drawing {
                origin: ORIGIN,
                radius_m: 0.0
            }
        );
    }

    #[test]
    fn test_moves_resize_without_leaving_drawing() {
        let mut selector = GeoCircleSelector::new();
        selector.click(ORIGIN);
        for step in 1..=5 {
            let point = LatLon::new(ORIGIN.lat + f64::from(step) * 0.1, ORIGIN.lon);
            let outcome = selector.pointer_move(point);
            assert_eq!(outcome, GestureOutcome::Resized(distance(ORIGIN, point)));
            assert!(selector.is_drawing());
        }
        // shrinking is allowed, no clamp
        assert_eq!(selector.pointer_move(ORIGIN), GestureOutcome::Resized(0.0));
    }

    #[test]
    fn test_second_click_finalizes_once() {
        let mut selector = GeoCircleSelector::new();
        let edge = LatLon::new(41.0, -73.9);
        selector.handle(GestureEvent::Click(ORIGIN));
        selector.handle(GestureEvent::PointerMove(LatLon::new(45.0, -70.0)));

        let outcome = selector.handle(GestureEvent::Click(edge));
        assert_eq!(
            outcome,
            GestureOutcome::Finalized(SearchRegion {
                center: ORIGIN,
                radius_m: distance(ORIGIN, edge),
            })
        );
        assert_eq!(selector.state(), SelectorState::Idle);
        assert_eq!(selector.in_progress(), None);
    }

    #[test]
    fn test_idle_never_finalizes() {
        let mut selector = GeoCircleSelector::new();
        assert_eq!(selector.pointer_move(ORIGIN), GestureOutcome::Ignored);
        assert_eq!(selector.state(), SelectorState::Idle);

        let mut finalized = 0;
        for i in 0..6 {
            let outcome = selector.click(LatLon::new(f64::from(i), 0.0));
            if matches!(outcome, GestureOutcome::Finalized(_)) {
                finalized += 1;
            }
        }
        // clicks alternate start/finalize
        assert_eq!(finalized, 3);
    }

    #[test]
    fn test_in_progress_exposes_circle() {
        let mut selector = GeoCircleSelector::new();
        selector.click(ORIGIN);
        selector.pointer_move(LatLon::new(40.8, -73.9));
        let region = selector.in_progress().unwrap();
        assert_eq!(region.center, ORIGIN);
        assert!(region.radius_m > 10_000.0);
    }
}
