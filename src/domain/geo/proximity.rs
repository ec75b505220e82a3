//! Scan-and-filter proximity query built on [`distance_km`].

use super::distance::{distance_km, ensure_finite, Coordinate, DistanceError};

/// Anything that sits at a single point on the map.
pub trait Locatable {
    fn coordinate(&self) -> Coordinate;
}

impl Locatable for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// Keep every item whose great-circle distance to the query point is at most
/// `radius_km`, preserving input order.
///
/// This is a full linear scan. A non-finite coordinate anywhere aborts the
/// whole query rather than silently dropping or keeping that item.
pub fn find_within_radius<T, I>(
    addresses: I,
    query_lat: f64,
    query_lon: f64,
    radius_km: f64,
) -> Result<Vec<T>, DistanceError>
where
    T: Locatable,
    I: IntoIterator<Item = T>,
{
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(DistanceError::InvalidRadius(radius_km));
    }
    ensure_finite("query latitude", query_lat)?;
    ensure_finite("query longitude", query_lon)?;

    let mut within = Vec::new();
    for address in addresses {
        let point = address.coordinate();
        if distance_km(query_lat, query_lon, point.latitude, point.longitude)? <= radius_km {
            within.push(address);
        }
    }
    Ok(within)
}
