//! The `{ success, message, data }` envelope returned by every API endpoint.
//!
//! Failures are rendered by [`crate::error::AppError`] with `success: false`
//! and a message; handlers only build the success side.

use axum::Json;
use serde::Serialize;

/// Standard response envelope. Absent fields are omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Handler return type for a successful envelope.
pub type Envelope<T> = Json<ApiResponse<T>>;

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Envelope<T> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Envelope<T> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    /// Success with only a message, e.g. after a delete.
    pub fn message(message: impl Into<String>) -> Envelope<()> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: None,
        })
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
