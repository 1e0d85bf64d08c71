use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use operator_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `operator_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A merge-patch body that does not deserialize into the patch type.
    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::MovieNotFound { .. } => {
                    (StatusCode::BAD_REQUEST, "MOVIE_NOT_FOUND", core.to_string())
                }
                CoreError::CatalogUnavailable(reason) => {
                    tracing::warn!(reason = %reason, "Rejecting request, catalog unavailable");
                    (
                        StatusCode::BAD_GATEWAY,
                        "CATALOG_UNAVAILABLE",
                        "The movie catalog is currently unavailable".to_string(),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- HTTP-specific errors ---
            AppError::InvalidPatch(msg) => (StatusCode::BAD_REQUEST, "INVALID_PATCH", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
