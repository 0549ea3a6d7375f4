//! Thought board handlers
//!
//! Thin wrappers that turn HTTP requests into `ThoughtsService` calls.

use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::models::{SubmittedThought, ThoughtCreated, ThoughtList};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

/// List all stored thoughts
pub async fn list_thoughts(State(state): State<AppState>) -> Json<ThoughtList> {
    let items = state.thoughts_service.list_thoughts().await;
    Json(ThoughtList { items })
}

/// Submit a new thought.
///
/// The body is parsed as JSON whatever `Content-Type` the client sent.
pub async fn create_thought(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ThoughtCreated>)> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            tracing::debug!("Failed to read request body: {}", rejection);
            AppError::InvalidJson
        }
    })?;

    let submitted = SubmittedThought::from_body(&body)?;
    let item = state.thoughts_service.submit_thought(submitted).await?;

    Ok((StatusCode::CREATED, Json(ThoughtCreated { ok: true, item })))
}

/// Any method other than GET/POST on the thoughts route, HEAD included
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
