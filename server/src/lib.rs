//! Todo server
//!
//! Wires the in-memory item store into the HTTP surface and exposes the
//! configuration the `server` binary runs with.

pub mod config;

pub use config::{Config, ServerConfig};

use axum::Router;
use todo_core::{InMemoryTodoRepository, TodoEnvironment};
use todo_web::{AppState, build_router};

/// Build the production application: system clock, random ids, one store.
#[must_use]
pub fn build_app(config: &Config) -> Router {
    let repository = InMemoryTodoRepository::new(TodoEnvironment::production());
    build_router(AppState::new(repository), &config.server.cors_allowed_origins)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn app_serves_health() {
        let app = build_app(&Config::from_lookup(|_| None));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
