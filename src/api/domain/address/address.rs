use crate::application::address::address_service_interface::AddressServiceInterface;
use crate::core::app_state::AppState;
use crate::core::response::{ClientResponseError, EntityResponse};
use crate::infrastructure::error::AppResult;
use crate::presentation::address::address::{AddressRequest, AddressSerializer, ListAddressesQuery, WithinDistanceQuery};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::TransactionTrait;

#[utoipa::path(
    post,
    path = "/v1/addresses",
    tags = ["address_service"],
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Address created successfully", body = EntityResponse<AddressSerializer>),
        (status = 400, description = "Bad request", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_create_address(
    State(state): State<AppState>,
    Json(request): Json<AddressRequest>,
) -> AppResult<(StatusCode, Json<EntityResponse<AddressSerializer>>)> {
    log::info!("Creating new address: {request:?}");
    let tx = state.db.begin().await?;

    match state.address_service.create_address(&tx, request).await {
        Ok(result) => {
            tx.commit().await?;
            Ok((
                StatusCode::CREATED,
                Json(EntityResponse {
                    message: "Address created successfully.".to_string(),
                    data: Some(result),
                    total: 1,
                }),
            ))
        }
        Err(err) => {
            tx.rollback().await?;
            log::error!("Failed to create address: {err:?}");
            Err(err)
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/addresses/{id}",
    tags = ["address_service"],
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address retrieved successfully", body = EntityResponse<AddressSerializer>),
        (status = 404, description = "Address not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_get_address_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EntityResponse<AddressSerializer>>> {
    log::info!("Reading address with id: {}", id);
    let tx = state.db.begin().await?;

    match state.address_service.get_address_by_id(&tx, id).await {
        Ok(result) => Ok(Json(EntityResponse {
            message: "Address retrieved successfully.".to_string(),
            data: Some(result),
            total: 1,
        })),
        Err(err) => {
            log::error!("Failed to get address: {err:?}");
            Err(err)
        }
    }
}

#[utoipa::path(
    put,
    path = "/v1/addresses/{id}",
    tags = ["address_service"],
    request_body = AddressRequest,
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address updated successfully", body = EntityResponse<AddressSerializer>),
        (status = 400, description = "Bad request", body = ClientResponseError),
        (status = 404, description = "Address not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_update_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<AddressRequest>,
) -> AppResult<Json<EntityResponse<AddressSerializer>>> {
    log::info!("Updating address with id: {}", id);
    let tx = state.db.begin().await?;

    match state.address_service.update_address(&tx, id, request).await {
        Ok(result) => {
            tx.commit().await?;
            Ok(Json(EntityResponse {
                message: "Address updated successfully.".to_string(),
                data: Some(result),
                total: 1,
            }))
        }
        Err(err) => {
            tx.rollback().await?;
            log::error!("Failed to update address: {err:?}");
            Err(err)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/v1/addresses/{id}",
    tags = ["address_service"],
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address deleted successfully", body = EntityResponse<String>),
        (status = 404, description = "Address not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_delete_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EntityResponse<String>>> {
    log::info!("Deleting address with id: {}", id);
    let tx = state.db.begin().await?;

    match state.address_service.delete_address(&tx, id).await {
        Ok(_) => {
            tx.commit().await?;
            Ok(Json(EntityResponse {
                message: "Address deleted successfully.".to_string(),
                data: Some("Address deleted successfully.".to_string()),
                total: 1,
            }))
        }
        Err(err) => {
            tx.rollback().await?;
            log::error!("Failed to delete address: {err:?}");
            Err(err)
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/addresses",
    tags = ["address_service"],
    params(ListAddressesQuery),
    responses(
        (status = 200, description = "Addresses retrieved successfully", body = EntityResponse<Vec<AddressSerializer>>),
        (status = 400, description = "Limit or offset out of range", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_list_addresses(
    State(state): State<AppState>,
    Query(params): Query<ListAddressesQuery>,
) -> AppResult<Json<EntityResponse<Vec<AddressSerializer>>>> {
    log::info!("Reading addresses with limit: {} and offset: {}", params.limit, params.offset);
    let tx = state.db.begin().await?;

    match state.address_service.list_addresses(&tx, params).await {
        Ok(result) => {
            let total = result.len();
            Ok(Json(EntityResponse {
                message: "Addresses retrieved successfully.".to_string(),
                data: Some(result),
                total: total as i64,
            }))
        }
        Err(err) => {
            log::error!("Failed to list addresses: {err:?}");
            Err(err)
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/addresses/within-distance",
    tags = ["address_service"],
    params(WithinDistanceQuery),
    responses(
        (status = 200, description = "Addresses within the given distance of the coordinates", body = EntityResponse<Vec<AddressSerializer>>),
        (status = 400, description = "Invalid coordinates or distance", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_get_addresses_within_distance(
    State(state): State<AppState>,
    Query(params): Query<WithinDistanceQuery>,
) -> AppResult<Json<EntityResponse<Vec<AddressSerializer>>>> {
    log::info!(
        "Reading addresses within distance. Latitude: {}, Longitude: {}, Distance: {}",
        params.latitude,
        params.longitude,
        params.distance
    );
    let tx = state.db.begin().await?;

    match state.address_service.find_addresses_within_distance(&tx, params).await {
        Ok(result) => {
            let total = result.len();
            Ok(Json(EntityResponse {
                message: "Addresses retrieved successfully.".to_string(),
                data: Some(result),
                total: total as i64,
            }))
        }
        Err(err) => {
            log::error!("Failed to find addresses within distance: {err:?}");
            Err(err)
        }
    }
}
