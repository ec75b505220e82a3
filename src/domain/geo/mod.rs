pub mod distance;
pub mod proximity;

pub use distance::{distance_km, Coordinate, DistanceError, EARTH_RADIUS_KM};
pub use proximity::{find_within_radius, Locatable};
