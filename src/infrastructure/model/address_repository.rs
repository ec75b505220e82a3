use crate::domain::address::address::{ActiveModel, Column, Entity, Model};
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::infrastructure::error::{AppError, AppResult};
use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, QueryOrder, QuerySelect};

/// Every column except the primary key, taken from the model.
fn writable_columns(model: Model) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        street: Set(model.street),
        city: Set(model.city),
        state: Set(model.state),
        country: Set(model.country),
        pin_code: Set(model.pin_code),
        latitude: Set(model.latitude),
        longitude: Set(model.longitude),
    }
}

#[async_trait]
impl AddressRepositoryInterface for Entity {
    async fn create_address(conn: &DatabaseTransaction, model: Model) -> AppResult<Model> {
        let address = writable_columns(model).insert(conn).await?;
        Ok(address)
    }

    async fn update_address(conn: &DatabaseTransaction, model: Model) -> AppResult<Model> {
        let id = model.id;
        let mut address = writable_columns(model);
        address.id = Unchanged(id);
        let address = address.update(conn).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            },
            e => AppError::DatabaseError(e),
        })?;
        Ok(address)
    }

    async fn find_address_by_id(conn: &DatabaseTransaction, id: i64) -> AppResult<Option<Model>> {
        let address = Entity::find_by_id(id).one(conn).await?;
        Ok(address)
    }

    async fn delete_address(conn: &DatabaseTransaction, id: i64) -> AppResult<()> {
        let result = Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            });
        }
        Ok(())
    }

    async fn list_addresses(
        conn: &DatabaseTransaction,
        offset: u64,
        limit: u64,
    ) -> AppResult<Vec<Model>> {
        let addresses = Entity::find()
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(conn)
            .await?;
        Ok(addresses)
    }

    async fn find_all_addresses(conn: &DatabaseTransaction) -> AppResult<Vec<Model>> {
        let addresses = Entity::find().order_by_asc(Column::Id).all(conn).await?;
        Ok(addresses)
    }
}
