use crate::domain::address::address::Model as AddressModel;
use crate::infrastructure::constant::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MAX_PAGE_OFFSET};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct AddressSerializer {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AddressModel> for AddressSerializer {
    fn from(value: AddressModel) -> Self {
        AddressSerializer {
            id: value.id,
            street: value.street,
            city: value.city,
            state: value.state,
            country: value.country,
            pin_code: value.pin_code,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Body of both create and update; an update replaces every field.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct AddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: i64,
    /// Degrees, -90 to 90
    pub latitude: f64,
    /// Degrees, -180 to 180
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, Validate, IntoParams, Clone)]
#[into_params(parameter_in = Query)]
pub struct ListAddressesQuery {
    /// Page size, 1 to 100 (default: 10)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_PAGE_LIMIT))]
    pub limit: u64,
    /// Number of addresses to skip (default: 0)
    #[serde(default)]
    #[validate(range(max = MAX_PAGE_OFFSET))]
    pub offset: u64,
}

impl Default for ListAddressesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize, Serialize, IntoParams, Clone)]
#[into_params(parameter_in = Query)]
pub struct WithinDistanceQuery {
    /// Latitude of the query point in degrees
    pub latitude: f64,
    /// Longitude of the query point in degrees
    pub longitude: f64,
    /// Radius in kilometers
    pub distance: f64,
}
