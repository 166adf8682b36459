//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::ml::ModelError;
use crate::store::StoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Validation errors
    MissingCityParameter,

    // Resource errors
    NotFound(String),

    // Database errors
    ConnectionFailed(String),
    DatabaseError(String),

    // Model artifact errors
    ModelError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingCityParameter => {
                (StatusCode::BAD_REQUEST, "City parameter is required".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::ConnectionFailed(msg) => {
                tracing::error!("Database connection error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database connection failed".to_string())
            }
            // The failure text is surfaced to the caller, matching the
            // original service's behavior.
            AppError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::ModelError(msg) => {
                tracing::error!("Model error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => AppError::ConnectionFailed(msg),
            StoreError::Query(e) => AppError::DatabaseError(e.to_string()),
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::ModelError(err.to_string())
    }
}
