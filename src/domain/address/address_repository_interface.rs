use super::address;
use crate::infrastructure::error::AppResult;
use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

#[async_trait]
pub trait AddressRepositoryInterface: Send + Sync {
    async fn create_address(conn: &DatabaseTransaction, model: address::Model) -> AppResult<address::Model>;
    async fn update_address(conn: &DatabaseTransaction, model: address::Model) -> AppResult<address::Model>;
    async fn find_address_by_id(conn: &DatabaseTransaction, id: i64) -> AppResult<Option<address::Model>>;
    async fn delete_address(conn: &DatabaseTransaction, id: i64) -> AppResult<()>;
    async fn list_addresses(conn: &DatabaseTransaction, offset: u64, limit: u64) -> AppResult<Vec<address::Model>>;
    async fn find_all_addresses(conn: &DatabaseTransaction) -> AppResult<Vec<address::Model>>;
}
