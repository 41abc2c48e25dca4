//! HTTP error mapping for term-keeper handlers.
//!
//! Every failure leaves the server as `{ "error": message, "code": CODE }`:
//!
//! | Source                                   | Status | Code               |
//! |------------------------------------------|--------|--------------------|
//! | `CoreError::Validation` (empty name, bad colour, foreign category) | 400 | `VALIDATION_ERROR` |
//! | `AppError::BadRequest` (bad `checked` flag) | 400 | `BAD_REQUEST`      |
//! | `CoreError::Unauthorized` (login, bearer) | 401   | `UNAUTHORIZED`     |
//! | `CoreError::NotFound`, `RowNotFound`      | 404   | `NOT_FOUND`        |
//! | `CoreError::Conflict`, `23505` on `uq_*`  | 409   | `CONFLICT`         |
//! | anything else                            | 500    | `INTERNAL_ERROR`   |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use termkeeper_core::error::CoreError;
use termkeeper_db::RepoError;

/// Error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure. Unique and not-found cases keep their meaning;
    /// the rest is reported as 500 without driver details.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request input the domain layer never sees, such as query flags.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Hashing or token signing failed. Logged, never echoed to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Core(core) => AppError::Core(core),
            RepoError::Storage(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::Core(CoreError::Conflict(msg)) => (StatusCode::CONFLICT, "CONFLICT", msg),
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                internal()
            }
        };

        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map a storage error onto a response.
///
/// A concurrent signup that slips past the `email_exists` check hits
/// `uq_users_email` and still comes back as 409.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        // 23505: unique_violation
        let constraint = db_err.constraint().unwrap_or_default();
        if db_err.code().as_deref() == Some("23505") && constraint.starts_with("uq_") {
            return (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            );
        }
    }

    tracing::error!(error = %err, "Database error");
    internal()
}
