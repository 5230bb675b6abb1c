//! Middleware for request tracking, cross-origin access, and failure
//! containment.
//!
//! - **Correlation ID**: read `X-Correlation-ID` (or generate one), record it
//!   on the request span, echo it on the response
//! - **CORS**: allow the configured browser origins
//! - **Panic containment**: a panicking handler becomes a 500 envelope
//!
//! # Flow
//!
//! ```text
//! request → trace span → correlation id → cors → catch panic → handler
//! ```

use crate::error::AppError;
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::cors::{AllowOrigin, Any as AnyCors, CorsLayer};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for correlation ID.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Correlation id stored in request extensions by [`correlation_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

/// Middleware function that tags each request with a correlation id.
///
/// A valid UUID in `X-Correlation-ID` is kept; anything else is replaced
/// with a fresh v4 UUID. Install with `axum::middleware::from_fn`.
pub async fn correlation_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    req.extensions_mut().insert(CorrelationId(id));

    let span = tracing::info_span!("request", correlation_id = %id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    response
}

/// CORS layer for the given origins.
///
/// Origins that are not valid header values are skipped with a warning.
/// Any method and header is allowed, matching what the browser client sends.
#[must_use]
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AnyCors)
        .allow_headers(AnyCors)
}

/// Turns a handler panic into the generic 500 envelope.
///
/// The panic payload is logged and never sent to the client. Used with
/// `tower_http::catch_panic::CatchPanicLayer::custom`.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    AppError::internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{Extension, Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/test", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(correlation_id))
    }

    #[tokio::test]
    async fn test_correlation_id_generated_if_missing() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        let correlation_id = response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .expect("Correlation ID header should be present");
        assert!(Uuid::parse_str(correlation_id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_correlation_id_preserved_from_request() {
        let request_uuid = Uuid::new_v4();
        let request = Request::builder()
            .uri("/test")
            .header(CORRELATION_ID_HEADER, request_uuid.to_string())
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let response_id = response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .expect("Correlation ID header should be present")
            .to_str()
            .unwrap();
        assert_eq!(response_id, request_uuid.to_string());
    }

    #[tokio::test]
    async fn test_invalid_uuid_generates_new() {
        let request = Request::builder()
            .uri("/test")
            .header(CORRELATION_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let uuid_str = response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .expect("Correlation ID header should be present")
            .to_str()
            .unwrap();
        assert!(Uuid::parse_str(uuid_str).is_ok());
        assert_ne!(uuid_str, "not-a-uuid");
    }

    #[tokio::test]
    async fn test_correlation_id_in_extensions() {
        let router = Router::new()
            .route(
                "/test",
                get(|Extension(id): Extension<CorrelationId>| async move { id.0.to_string() }),
            )
            .layer(axum::middleware::from_fn(correlation_id));

        let response = router
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[test]
    fn handle_panic_returns_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), 500);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let router = Router::new()
            .route("/test", get(|| async { "ok" }))
            .layer(cors_layer(&["http://localhost:4200".to_string()]));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/test")
                    .header("Origin", "http://localhost:4200")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:4200"
        );
    }

    #[tokio::test]
    async fn cors_ignores_other_origins() {
        let router = Router::new()
            .route("/test", get(|| async { "ok" }))
            .layer(cors_layer(&["http://localhost:4200".to_string()]));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/test")
                    .header("Origin", "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
