mod latitude_must_be_in_range;
mod longitude_must_be_in_range;
mod radius_must_be_non_negative;

pub use latitude_must_be_in_range::LatitudeMustBeInRange;
pub use longitude_must_be_in_range::LongitudeMustBeInRange;
pub use radius_must_be_non_negative::RadiusMustBeNonNegative;
