use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::core::response::ClientResponseError;
use crate::domain::geo::DistanceError;

pub type AppResult<T = ()> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequestError(String),
    #[error("{0}")]
    InvalidPayloadError(String),
    #[error("{detail}")]
    EntityNotFoundError { detail: String },
    #[error(transparent)]
    InvalidInputError(#[from] validator::ValidationErrors),
    #[error(transparent)]
    DistanceError(#[from] DistanceError),
    #[error(transparent)]
    DatabaseError(#[from] sea_orm::DbErr),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    TaskError(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn response(&self) -> (StatusCode, ClientResponseError) {
        let (status, message) = match self {
            AppError::BadRequestError(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::InvalidPayloadError(_) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            AppError::InvalidInputError(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::DistanceError(_) => (StatusCode::BAD_REQUEST, "INVALID_COORDINATE"),
            AppError::EntityNotFoundError { .. } => (StatusCode::NOT_FOUND, "ENTITY_NOT_FOUND"),
            AppError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            AppError::TaskError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
        };

        // Internal failures are logged, not echoed back to the client.
        let detail = if status.is_server_error() {
            None
        } else {
            Some(self.to_string())
        };

        (status, ClientResponseError::new(message.to_string(), detail))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.response();
        if status.is_server_error() {
            log::error!("Internal error: {self:?}");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_detail() {
        let err = AppError::EntityNotFoundError {
            detail: "Address with id 7 not found".to_string(),
        };
        let (status, body) = err.response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "ENTITY_NOT_FOUND");
        assert_eq!(body.detail.as_deref(), Some("Address with id 7 not found"));
    }

    #[test]
    fn distance_error_is_a_client_error() {
        let err: AppError = DistanceError::InvalidRadius(-1.0).into();
        let (status, body) = err.response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.unwrap().contains("-1"));
    }

    #[test]
    fn database_error_hides_detail() {
        let err: AppError = sea_orm::DbErr::Custom("connection refused".to_string()).into();
        let (status, body) = err.response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, None);
    }

    #[tokio::test]
    async fn panicked_task_becomes_an_internal_error() {
        let join_err = tokio::spawn(async { panic!("server loop crashed") }).await.unwrap_err();
        let err: AppError = join_err.into();
        assert!(matches!(err, AppError::TaskError(_)));
        let (status, body) = err.response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "TASK_ERROR");
    }
}
