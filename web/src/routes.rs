//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints and the middleware
//! stack around them.

use crate::error::AppError;
use crate::handlers::{
    TODO_BASE_PATH, create_todo, delete_todo, health_check, list_todos, readiness_check,
    toggle_todo,
};
use crate::middleware::{correlation_id, cors_layer, handle_panic};
use crate::state::AppState;
use axum::{
    Router,
    http::{Method, StatusCode, Uri},
    routing::{delete, get, patch},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Build the complete Axum router.
///
/// Routes:
/// - `GET /health`, `GET /ready`
/// - `GET|POST /api/todo`
/// - `DELETE /api/todo/:id`
/// - `PATCH /api/todo/:id/toggle`
///
/// Unknown paths answer 404 and unsupported methods on known paths answer
/// 405, both with the error envelope.
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route(TODO_BASE_PATH, get(list_todos).post(create_todo))
        .route(&format!("{TODO_BASE_PATH}/:id"), delete(delete_todo))
        .route(&format!("{TODO_BASE_PATH}/:id/toggle"), patch(toggle_todo))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(unknown_route)
        .with_state(state);

    with_middleware(router, cors_allowed_origins)
}

/// Wrap a router in the standard middleware stack.
///
/// Panics inside handlers are caught innermost so the correlation id and
/// trace span still apply to the 500 response.
pub fn with_middleware(router: Router, cors_allowed_origins: &[String]) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(cors_allowed_origins))
        .layer(axum::middleware::from_fn(correlation_id))
        .layer(TraceLayer::new_for_http())
}

#[allow(clippy::unused_async)]
async fn unknown_route(uri: Uri) -> AppError {
    AppError::not_found("Route", uri.path())
}

#[allow(clippy::unused_async)]
async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "METHOD_NOT_ALLOWED",
        "Method not allowed",
        format!("{method} is not supported on {}", uri.path()),
    )
}
