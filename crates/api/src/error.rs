//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mandap_core::pricing::PricingError;
use mandap_core::scenario::ScenarioError;
use mandap_shared::AppError;
use serde_json::json;

/// Wrapper rendering an [`AppError`] as `{"error": code, "message": msg}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<ScenarioError> for ApiError {
    fn from(err: ScenarioError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
