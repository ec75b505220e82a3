use crate::core::app_state::AppState;
use crate::core::response::{ClientResponseError, MessageResponse};
use crate::infrastructure::error::AppResult;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/health",
    tags = ["server_service"],
    responses(
        (status = 200, description = "Service and database are reachable", body = MessageResponse),
        (status = 500, description = "Database unreachable", body = ClientResponseError)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.db.ping().await?;
    Ok(Json(MessageResponse::new("ok")))
}
