use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Pigment not found")]
    PigmentNotFound,

    #[error("Table not loaded: {0}")]
    TableNotLoaded(&'static str),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<lab_match::RecordError> for ApiError {
    fn from(e: lab_match::RecordError) -> Self {
        ApiError::InvalidRecord(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::PigmentNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::TableNotLoaded(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::InvalidRecord(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
