//! Great-circle distance between map coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A (latitude, longitude) pair in decimal degrees, as reported by the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine distance in meters between two points on a spherical Earth.
pub fn distance(p1: LatLon, p2: LatLon) -> f64 {
    let d_lat = (p2.lat - p1.lat).to_radians();
    let d_lon = (p2.lon - p1.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + p1.lat.to_radians().cos() * p2.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let nyc = LatLon::new(40.7, -73.9);
        assert_eq!(distance(nyc, nyc), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (LatLon::new(40.7, -73.9), LatLon::new(42.36, -71.06)),
            (LatLon::new(-33.87, 151.21), LatLon::new(51.5, -0.12)),
            (LatLon::new(0.0, 179.9), LatLon::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance(LatLon::new(0.0, 0.0), LatLon::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0, "got {}", d);
    }

    #[test]
    fn test_new_york_to_boston() {
        let d = distance(LatLon::new(40.7128, -74.0060), LatLon::new(42.3601, -71.0589));
        assert!((d - 306_000.0).abs() < 2_000.0, "got {}", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = distance(LatLon::new(0.0, 0.0), LatLon::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }
}
