//! HTTP response types and utilities
//!
//! Successful query responses are the raw sequences/objects produced by
//! the stores, serialized as-is — no envelope. Every error response shares
//! a single JSON shape carrying a human-readable message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// JSON body returned for every error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health payload returned by `/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub datasets: DatasetHealth,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Sizes of the loaded datasets
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DatasetHealth {
    pub postal_records: usize,
    pub divisions: usize,
}

/// Convert an AppError to the appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let status = match &error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Dataset { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}

/// Convert a store result into a raw HTTP response
pub fn handle_result<T>(result: AppResult<T>) -> Response
where
    T: Serialize,
{
    match result {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(error) => handle_error(error),
    }
}

/// Error response helpers
pub fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(message.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_the_wire_message() {
        let response = handle_error(AppError::not_found("Zila"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_error(AppError::validation("missing input"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
