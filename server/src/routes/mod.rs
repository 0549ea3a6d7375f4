//! HTTP routes
//!
//! Builds the axum router for the thought board:
//! - `OPTIONS` on any path is acknowledged before routing
//! - `GET`/`POST /api/thoughts` list and submit thoughts
//! - everything else gets a JSON 404 or 405
//!
//! Every response carries permissive cross-origin headers.

pub mod thoughts;

use crate::app::AppState;
use crate::config::{MAX_BODY_BYTES, THOUGHTS_PATH};
use crate::error::AppError;
use crate::models::Ack;
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            THOUGHTS_PATH,
            get(thoughts::list_thoughts)
                .post(thoughts::create_thought)
                .head(thoughts::method_not_allowed)
                .fallback(thoughts::method_not_allowed),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer CORS preflight requests for any path
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return (StatusCode::OK, Json(Ack { ok: true })).into_response();
    }

    next.run(request).await
}

async fn not_found() -> AppError {
    AppError::NotFound
}
