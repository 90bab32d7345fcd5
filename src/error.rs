use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Application error type, mapped onto the HTTP boundary.
///
/// Input errors fail fast with a 400 before any corpus I/O. Rate-limit
/// rejections get their own status. Internal faults collapse to a generic
/// 500 payload; the underlying cause is logged, never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Discipline is required")]
    MissingDiscipline,

    #[error("Limit cannot be greater than {}", crate::pagination::MAX_LIMIT)]
    LimitTooHigh,

    #[error("Too many requests")]
    RateLimited,

    #[error("Failed to fetch questions")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingDiscipline | AppError::LimitTooHigh => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(cause) = &self {
            tracing::error!("request failed: {cause:#}");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Application result type.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
