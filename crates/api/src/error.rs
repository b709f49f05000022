//! HTTP error mapping.
//!
//! Handlers return [`AppError`]; `IntoResponse` turns every variant into
//! the same JSON envelope: `{ "error": <message>, "code": <code> }`.
//! Domain errors arrive as [`CoreError`] and carry their own user-facing
//! wording. Raw sqlx errors funnel through the constraint classifier so
//! a unique-constraint race still surfaces as a clean 409 instead of a
//! 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use smedir_core::error::CoreError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `smedir_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

/// What a caller sees when the real cause must stay server-side.
const SANITIZED: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => database_response(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    SANITIZED.to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            code,
        };
        (status, Json(body)).into_response()
    }
}

fn core_response(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string()),
        CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string()),
        CoreError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT", core.to_string()),
        CoreError::Unauthorized(_) => {
            (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", core.to_string())
        }
        CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN", core.to_string()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                SANITIZED.to_string(),
            )
        }
    }
}

fn database_response(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        // PostgreSQL unique violation: 23505. The repos pre-check these
        // inside their transactions; the constraint is the backstop when
        // two requests race past the check.
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (StatusCode::CONFLICT, "CONFLICT", duplicate_message(constraint))
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                SANITIZED.to_string(),
            )
        }
    }
}

/// User-facing wording for this schema's unique constraints.
fn duplicate_message(constraint: &str) -> String {
    match constraint {
        "uq_nominations_submitted_nominee" => {
            "This employee already has a pending nomination".to_string()
        }
        "uq_expert_profiles_employee" => "You already have an expert profile".to_string(),
        "uq_endorsements_skill_endorser" => "You have already endorsed this skill".to_string(),
        "uq_course_enrollments_course_employee" => {
            "You are already enrolled in this course".to_string()
        }
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}
