//! HTTP error mapping for the REST API
//!
//! Renders domain errors as HTTP responses with the appropriate status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use item_core::ItemError;
use serde_json::json;
use thiserror::Error;

/// Error returned by the REST handlers.
///
/// Wraps [`ItemError`] and renders it as a response: a missing item becomes
/// a 404 with an empty body, everything else becomes a 500 with a JSON error
/// payload. The status code comes from [`ItemError::status_code`].
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] ItemError);

impl ApiError {
    /// Not-found error for the given item ID
    pub fn not_found(id: i64) -> Self {
        ApiError(ItemError::not_found_id(id))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_not_found() {
            // Not-found responses carry an empty body
            status.into_response()
        } else {
            tracing::error!("Request failed: {}", self.0);
            (status, Json(json!({ "error": self.0.to_string() }))).into_response()
        }
    }
}
