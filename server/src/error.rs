//! Error types for the thought board
//!
//! All errors use thiserror for structured error handling.
//! Every variant maps onto an HTTP status and a JSON `{"error": ...}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Message shown to clients for any internal failure
pub const STORAGE_UNAVAILABLE: &str = "storage unavailable";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid JSON")]
    InvalidJson,

    /// Submission rejected by a spam rule; carries the human-readable reason
    #[error("{0}")]
    Validation(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Storage(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the response envelope. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            STORAGE_UNAVAILABLE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = serde_json::json!({ "error": self.client_message() });
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
