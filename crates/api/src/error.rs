use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CatalogError;
use serde_json::json;

/// Whether storage failure detail is surfaced in response bodies.
///
/// Set once at startup from `ServerConfig::verbose_errors`. When off (the
/// production default), storage detail goes to the log only and clients see
/// a generic message.
static VERBOSE_ERRORS: AtomicBool = AtomicBool::new(false);

pub fn set_verbose_errors(enabled: bool) {
    VERBOSE_ERRORS.store(enabled, Ordering::Relaxed);
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CatalogError`] and implements [`IntoResponse`] to produce the
/// uniform `{ "error": { "code", "message", "details"? } }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from the store or query pipeline.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Catalog(err) = self;

        let mut details = None;
        let (status, code, message) = match &err {
            CatalogError::Validation(fields) => {
                details = Some(json!(fields));
                (
                    StatusCode::BAD_REQUEST,
                    "ValidationError",
                    "One or more fields are missing or invalid".to_string(),
                )
            }
            CatalogError::InvalidParameter(msg) => {
                (StatusCode::BAD_REQUEST, "InvalidParameter", msg.clone())
            }
            CatalogError::DuplicateKey { isbn } => (
                StatusCode::CONFLICT,
                "DuplicateKey",
                format!("A book with isbn '{isbn}' already exists"),
            ),
            CatalogError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Book with id {id} not found"),
            ),
            CatalogError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage failure");
                let message = if VERBOSE_ERRORS.load(Ordering::Relaxed) {
                    msg.clone()
                } else {
                    "An internal storage error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "StorageFailure", message)
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, axum::Json(json!({ "error": error }))).into_response()
    }
}
