//! Error types for the Data Processor service.
//!
//! [`ApiError`] implements [`axum::response::IntoResponse`] so handlers can
//! return `Result<…, ApiError>` directly. Error bodies use the same
//! [`ProcessResponse`] shape as successful ones.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dataproc_models::{ModelError, ProcessResponse};

/// Errors that can occur while handling a processing request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request data failed validation.
    #[error("{reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: ModelError,
        /// The rejected data, echoed back to the caller.
        data: String,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        };
        let message = format!("Error: {self}");

        tracing::warn!(%status, error = %message, "request rejected");

        let Self::InvalidInput { data, .. } = self;
        (status, Json(ProcessResponse::new(message, data))).into_response()
    }
}
