//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DistanceError {
    #[error("{name} must be a finite number of degrees, got {value}")]
    NonFiniteCoordinate { name: &'static str, value: f64 },
    #[error("radius must be a finite, non-negative number of kilometers, got {0}")]
    InvalidRadius(f64),
}

/// A point on the Earth's surface in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Distance to `other` in kilometers. See [`distance_km`].
    pub fn distance_km(&self, other: &Coordinate) -> Result<f64, DistanceError> {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// True when both components lie inside the valid latitude/longitude ranges.
    pub fn is_in_range(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, DistanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DistanceError::NonFiniteCoordinate { name, value })
    }
}

/// Calculate the great-circle distance between two points with the haversine
/// formula, treating the Earth as a sphere of radius [`EARTH_RADIUS_KM`].
///
/// All arguments are in degrees. Values outside the usual latitude/longitude
/// ranges are evaluated as-is; only non-finite input is rejected.
///
/// # Example
///
/// ```
/// use address_service::domain::geo::distance_km;
///
/// // One degree of longitude on the equator
/// let dist = distance_km(0.0, 0.0, 0.0, 1.0).unwrap();
/// assert!((dist - 111.19).abs() < 0.01);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, DistanceError> {
    let lat1 = ensure_finite("lat1", lat1)?.to_radians();
    let lon1 = ensure_finite("lon1", lon1)?.to_radians();
    let lat2 = ensure_finite("lat2", lat2)?.to_radians();
    let lon2 = ensure_finite("lon2", lon2)?.to_radians();

    let delta_lon = lon2 - lon1;
    let delta_lat = lat2 - lat1;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points, where asin is undefined.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    Ok(c * EARTH_RADIUS_KM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const MAX_DISTANCE_KM: f64 = PI * EARTH_RADIUS_KM;

    fn fixtures() -> Vec<Coordinate> {
        vec![
            Coordinate::new(28.6139, 77.2090),  // New Delhi
            Coordinate::new(19.0760, 72.8777),  // Mumbai
            Coordinate::new(51.5074, -0.1278),  // London
            Coordinate::new(-33.8688, 151.2093), // Sydney
            Coordinate::new(90.0, 0.0),
            Coordinate::new(-90.0, 180.0),
            Coordinate::new(0.0, -180.0),
            Coordinate::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_identical_points_are_zero_apart() {
        for point in fixtures() {
            let dist = point.distance_km(&point).unwrap();
            assert_eq!(dist, 0.0, "{point:?} should be zero km from itself");
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = fixtures();
        for a in &points {
            for b in &points {
                let ab = a.distance_km(b).unwrap();
                let ba = b.distance_km(a).unwrap();
                assert!((ab - ba).abs() < 1e-9, "{a:?} <-> {b:?}: {ab} vs {ba}");
            }
        }
    }

    #[test]
    fn test_distance_is_bounded() {
        let points = fixtures();
        for a in &points {
            for b in &points {
                let dist = a.distance_km(b).unwrap();
                assert!(dist >= 0.0);
                assert!(dist <= MAX_DISTANCE_KM + 1e-9);
            }
        }
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let dist = distance_km(0.0, 0.0, 0.0, 1.0).unwrap();
        assert!((dist - 111.19).abs() < 0.01, "got {dist}");
    }

    #[test]
    fn test_new_delhi_to_mumbai() {
        let dist = distance_km(28.6139, 77.2090, 19.0760, 72.8777).unwrap();
        assert!((dist - 1148.09).abs() < 0.1, "got {dist}");
    }

    #[test]
    fn test_antipodal_points_are_half_the_circumference() {
        let dist = distance_km(0.0, 0.0, 0.0, 180.0).unwrap();
        assert!((dist - MAX_DISTANCE_KM).abs() < 1e-6, "got {dist}");
        assert!((dist - 20015.087).abs() < 0.001);

        let poles = distance_km(90.0, 0.0, -90.0, 0.0).unwrap();
        assert!((poles - MAX_DISTANCE_KM).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_points_never_produce_nan() {
        // (45.14, 0) and its antipode round the haversine term above 1 when unclamped.
        let dist = distance_km(45.14, 0.0, -45.14, 180.0).unwrap();
        assert!(dist.is_finite());
        assert!((dist - MAX_DISTANCE_KM).abs() < 1e-6);

        for i in -240..=240 {
            let lat = i as f64 * 0.37;
            for offset in [0.0, 1e-10, -1e-10, 5e-10] {
                let dist = distance_km(lat, 10.0, -lat + offset, -170.0 - offset).unwrap();
                assert!(dist.is_finite(), "NaN for latitude {lat} offset {offset}");
                assert!(dist <= MAX_DISTANCE_KM + 1e-9);
            }
        }
    }

    #[test]
    fn test_out_of_range_input_is_still_evaluated() {
        let dist = distance_km(200.0, 0.0, 0.0, 0.0).unwrap();
        assert!(dist.is_finite());
        assert!(dist >= 0.0);

        let wrapped = distance_km(0.0, 0.0, 0.0, 361.0).unwrap();
        assert!((wrapped - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let err = distance_km(f64::NAN, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, DistanceError::NonFiniteCoordinate { name: "lat1", .. }));
        assert!(err.to_string().contains("lat1 must be a finite number"));

        assert!(matches!(
            distance_km(0.0, 0.0, 0.0, f64::INFINITY),
            Err(DistanceError::NonFiniteCoordinate { name: "lon2", .. })
        ));
        assert!(matches!(
            distance_km(0.0, f64::NEG_INFINITY, 0.0, 0.0),
            Err(DistanceError::NonFiniteCoordinate { name: "lon1", .. })
        ));
    }

    #[test]
    fn test_coordinate_range_check() {
        assert!(Coordinate::new(90.0, -180.0).is_in_range());
        assert!(!Coordinate::new(90.1, 0.0).is_in_range());
        assert!(!Coordinate::new(0.0, 180.5).is_in_range());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_in_range());
    }
}
