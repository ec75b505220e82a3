use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::address::rules::{LatitudeMustBeInRange, LongitudeMustBeInRange};
use crate::domain::geo::{Coordinate, Locatable};
use crate::infrastructure::error::AppResult;
use crate::presentation::address::address::AddressRequest;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: i64,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Locatable for Model {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

// Domain Business Rules - Create and validate Models
impl Model {
    /// Business Rule: Create a new address model with validation
    pub fn create_new_address(request: &AddressRequest) -> AppResult<Self> {
        LatitudeMustBeInRange { latitude: request.latitude }.check_broken()?;
        LongitudeMustBeInRange { longitude: request.longitude }.check_broken()?;

        Ok(Self {
            id: 0, // Will be set by the database
            street: request.street.clone(),
            city: request.city.clone(),
            state: request.state.clone(),
            country: request.country.clone(),
            pin_code: request.pin_code,
            latitude: request.latitude,
            longitude: request.longitude,
        })
    }

    /// Business Rule: Replace every field except the id
    pub fn replace_with(self, request: &AddressRequest) -> AppResult<Self> {
        let replacement = Self::create_new_address(request)?;
        Ok(Self { id: self.id, ..replacement })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::error::AppError;

    fn request(latitude: f64, longitude: f64) -> AddressRequest {
        AddressRequest {
            street: "Rajpath".to_string(),
            city: "New Delhi".to_string(),
            state: "Delhi".to_string(),
            country: "India".to_string(),
            pin_code: 110001,
            latitude,
            longitude,
        }
    }

    #[test]
    fn create_leaves_id_for_the_database() {
        let model = Model::create_new_address(&request(28.6139, 77.2090)).unwrap();
        assert_eq!(model.id, 0);
        assert_eq!(model.city, "New Delhi");
        assert_eq!(model.coordinate(), Coordinate::new(28.6139, 77.2090));
    }

    #[test]
    fn create_rejects_out_of_range_coordinates() {
        let err = Model::create_new_address(&request(200.0, 0.0)).unwrap_err();
        assert!(matches!(err, AppError::BadRequestError(ref msg) if msg.contains("Latitude")));

        let err = Model::create_new_address(&request(0.0, -180.5)).unwrap_err();
        assert!(matches!(err, AppError::BadRequestError(ref msg) if msg.contains("Longitude")));
    }

    #[test]
    fn replace_keeps_id_and_overwrites_everything_else() {
        let mut existing = Model::create_new_address(&request(28.6139, 77.2090)).unwrap();
        existing.id = 42;

        let mut replacement = request(19.0760, 72.8777);
        replacement.street = "Marine Drive".to_string();
        replacement.city = "Mumbai".to_string();
        replacement.state = "Maharashtra".to_string();
        replacement.pin_code = 400020;

        let updated = existing.replace_with(&replacement).unwrap();
        assert_eq!(
            updated,
            Model {
                id: 42,
                street: "Marine Drive".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                country: "India".to_string(),
                pin_code: 400020,
                latitude: 19.0760,
                longitude: 72.8777,
            }
        );
    }
}
