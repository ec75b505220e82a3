use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::application::address::address_service_interface::AddressServiceInterface;
use crate::domain::address::address::{Entity, Model};
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::address::rules::{LatitudeMustBeInRange, LongitudeMustBeInRange, RadiusMustBeNonNegative};
use crate::domain::geo::find_within_radius;
use crate::infrastructure::error::{AppError, AppResult};
use crate::presentation::address::address::{AddressRequest, AddressSerializer, ListAddressesQuery, WithinDistanceQuery};
use sea_orm::DatabaseTransaction;
use validator::Validate;

/// Application service - orchestrates domain logic and persistence
#[derive(Debug, Default)]
pub struct AddressService;

impl AddressService {
    pub fn new() -> Self {
        Self
    }
}

fn not_found(id: i64) -> AppError {
    AppError::EntityNotFoundError {
        detail: format!("Address with id {} not found", id),
    }
}

impl AddressServiceInterface for AddressService {
    async fn create_address(
        &self,
        conn: &DatabaseTransaction,
        request: AddressRequest,
    ) -> AppResult<AddressSerializer> {
        // Domain: Create model with validation
        let address = Model::create_new_address(&request)?;

        // Infrastructure: Persist address, the database assigns the id
        let created = Entity::create_address(conn, address).await?;
        log::info!("Created address with id: {}", created.id);

        Ok(AddressSerializer::from(created))
    }

    async fn update_address(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
        request: AddressRequest,
    ) -> AppResult<AddressSerializer> {
        // Database: Get existing address
        let existing = Entity::find_address_by_id(conn, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        // Domain: Replace every field but the id
        let replaced = existing.replace_with(&request)?;

        let updated = Entity::update_address(conn, replaced).await?;
        Ok(AddressSerializer::from(updated))
    }

    async fn get_address_by_id(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<AddressSerializer> {
        let address = Entity::find_address_by_id(conn, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(AddressSerializer::from(address))
    }

    async fn delete_address(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<bool> {
        Entity::delete_address(conn, id).await?;
        Ok(true)
    }

    async fn list_addresses(
        &self,
        conn: &DatabaseTransaction,
        query: ListAddressesQuery,
    ) -> AppResult<Vec<AddressSerializer>> {
        query.validate()?;

        let addresses = Entity::list_addresses(conn, query.offset, query.limit).await?;
        Ok(addresses.into_iter().map(AddressSerializer::from).collect())
    }

    async fn find_addresses_within_distance(
        &self,
        conn: &DatabaseTransaction,
        query: WithinDistanceQuery,
    ) -> AppResult<Vec<AddressSerializer>> {
        // Business Rule: Query point must be a real coordinate
        LatitudeMustBeInRange { latitude: query.latitude }.check_broken()?;
        LongitudeMustBeInRange { longitude: query.longitude }.check_broken()?;

        // Business Rule: Radius must be non-negative
        RadiusMustBeNonNegative { radius_km: query.distance }.check_broken()?;

        // Full scan in id order, filtered by great-circle distance
        let addresses = Entity::find_all_addresses(conn).await?;
        let scanned = addresses.len();
        let nearby = find_within_radius(addresses, query.latitude, query.longitude, query.distance)?;
        log::debug!("Proximity scan kept {} of {} addresses", nearby.len(), scanned);

        Ok(nearby.into_iter().map(AddressSerializer::from).collect())
    }
}
