//! Error types and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clubsync_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a request handler can surface to the client.
///
/// Not-found on update is deliberately absent: the router answers those
/// with `200 null`, matching the documented interface.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body was malformed or missing a required field.
    #[error("{0}")]
    Validation(String),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// The status code this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            warn!(%status, error = %message, "request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation("missing field `name`".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_fault_maps_to_500() {
        let err = ApiError::from(StoreError::Disconnected);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "store is disconnected");
    }
}
