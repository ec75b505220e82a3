use crate::infrastructure::error::AppResult;
use crate::presentation::address::address::{AddressRequest, AddressSerializer, ListAddressesQuery, WithinDistanceQuery};
use sea_orm::DatabaseTransaction;

pub trait AddressServiceInterface: Send + Sync + 'static {
    async fn create_address(
        &self,
        conn: &DatabaseTransaction,
        request: AddressRequest,
    ) -> AppResult<AddressSerializer>;

    async fn update_address(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
        request: AddressRequest,
    ) -> AppResult<AddressSerializer>;

    async fn get_address_by_id(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<AddressSerializer>;

    async fn delete_address(
        &self,
        conn: &DatabaseTransaction,
        id: i64,
    ) -> AppResult<bool>;

    async fn list_addresses(
        &self,
        conn: &DatabaseTransaction,
        query: ListAddressesQuery,
    ) -> AppResult<Vec<AddressSerializer>>;

    async fn find_addresses_within_distance(
        &self,
        conn: &DatabaseTransaction,
        query: WithinDistanceQuery,
    ) -> AppResult<Vec<AddressSerializer>>;
}
