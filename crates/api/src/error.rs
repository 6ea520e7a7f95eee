use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use craftadmin_core::error::CoreError;
use craftadmin_db::repositories::LedgerError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as the `{ success: false, message }` envelope.
/// Domain failures keep status 200; only authentication failures and
/// internal errors change the status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be decoded (bad JSON, bad query string).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Core(core) => AppError::Core(core),
            LedgerError::Database(db) => AppError::Database(db),
        }
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. }
                | CoreError::Validation(_)
                | CoreError::Conflict(_)
                | CoreError::InsufficientFunds { .. } => (StatusCode::OK, core.to_string()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::OK, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

/// Unique indexes and the message reported when a write collides with one.
const UNIQUE_MESSAGES: &[(&str, &str)] = &[
    ("players.code", "PlayerCode already exists"),
    ("players.email", "Email already exists"),
    ("regions.name", "Region name already exists"),
    ("game_modes.name", "GameMode name already exists"),
    ("player_quests.player_id", "Quest already recorded for this player"),
];

/// Classify a sqlx error into a status code and envelope message.
///
/// - `RowNotFound` is a not-found failure.
/// - Unique and foreign-key violations are conflicts.
/// - CHECK violations are validation failures.
/// - Everything else is logged and reported generically.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::OK, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            let detail = db_err.message();
            if db_err.is_unique_violation() {
                let message = UNIQUE_MESSAGES
                    .iter()
                    .find(|(column, _)| detail.contains(column))
                    .map(|(_, message)| (*message).to_string())
                    .unwrap_or_else(|| "Duplicate value already exists".to_string());
                return (StatusCode::OK, message);
            }
            if db_err.is_foreign_key_violation() {
                // Inserts check their references first, so this is a delete.
                return (
                    StatusCode::OK,
                    "Record is still referenced by other records".to_string(),
                );
            }
            if db_err.is_check_violation() {
                return (StatusCode::OK, "Value out of allowed range".to_string());
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
