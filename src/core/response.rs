use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EntityResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ClientResponseError {
    pub message: String,
    pub detail: Option<String>,
}

impl ClientResponseError {
    pub fn new(message: String, detail: Option<String>) -> Self {
        Self { message, detail }
    }
}
