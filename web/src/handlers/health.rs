//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Simple health check endpoint (for basic liveness).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Readiness {
    /// Always `"ready"` once the store answers.
    pub status: String,
    /// Number of live items.
    pub items: usize,
}

/// Readiness check that round-trips through the store.
///
/// # Endpoint
///
/// ```text
/// GET /ready
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ready", "items": 3 }
/// ```
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let items = state.repository.len().await;

    (
        StatusCode::OK,
        Json(Readiness {
            status: "ready".to_string(),
            items,
        }),
    )
}
