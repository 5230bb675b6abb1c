//! HTTP API integration tests.
//!
//! Drives the full router (middleware included) through `axum-test` and
//! checks the status codes, bodies, and headers of every endpoint.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Request, StatusCode},
    routing::get,
};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use todo_core::{InMemoryTodoRepository, TodoItem};
use todo_testing::{stepping_environment, test_environment};
use todo_web::{AppState, CORRELATION_ID_HEADER, ErrorResponse, build_router, with_middleware};
use tower::ServiceExt;

fn origins() -> Vec<String> {
    vec!["http://localhost:4200".to_string()]
}

fn server_with(state: AppState) -> TestServer {
    TestServer::new(build_router(state, &origins())).unwrap()
}

fn server() -> TestServer {
    server_with(AppState::new(InMemoryTodoRepository::new(
        stepping_environment(),
    )))
}

async fn create(server: &TestServer, title: &str) -> TodoItem {
    let response = server.post("/api/todo").json(&json!({ "title": title })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<TodoItem>()
}

#[tokio::test]
async fn list_is_empty_initially() {
    let server = server();

    let response = server.get("/api/todo").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<TodoItem>>(), Vec::<TodoItem>::new());
}

#[tokio::test]
async fn create_returns_created_item_with_location() {
    let server = server();

    let response = server
        .post("/api/todo")
        .json(&json!({ "title": "Buy milk" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["completed"], false);
    assert!(body.get("completedAt").is_none());
    assert!(body["createdAt"].is_string());

    let id = body["id"].as_str().unwrap();
    assert_eq!(response.header("location"), format!("/api/todo/{id}").as_str());
}

#[tokio::test]
async fn create_trims_title() {
    let server = server();
    let item = create(&server, "  padded  ").await;
    assert_eq!(item.title, "padded");
}

#[tokio::test]
async fn invalid_titles_are_bad_requests() {
    let server = server();

    let cases = [
        (json!({ "title": "" }), "TITLE_EMPTY"),
        (json!({ "title": "   " }), "TITLE_EMPTY"),
        (json!({}), "TITLE_REQUIRED"),
        (json!({ "title": null }), "TITLE_REQUIRED"),
        (json!({ "title": 7 }), "INVALID_REQUEST_BODY"),
        (json!({ "title": "x".repeat(501) }), "TITLE_TOO_LONG"),
    ];

    for (payload, code) in cases {
        let response = server.post("/api/todo").json(&payload).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{payload}");

        let error = response.json::<ErrorResponse>();
        assert_eq!(error.status_code, 400);
        assert_eq!(error.code, code, "{payload}");
        assert!(!error.message.is_empty());
    }

    let listed = server.get("/api/todo").await.json::<Vec<TodoItem>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn title_at_limit_is_accepted() {
    let server = server();
    let item = create(&server, &"x".repeat(500)).await;
    assert_eq!(item.title.chars().count(), 500);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = server();

    let response = server
        .post("/api/todo")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"title\":"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().code, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let server = server();
    let a = create(&server, "A").await;
    let b = create(&server, "B").await;

    let listed = server.get("/api/todo").await.json::<Vec<TodoItem>>();

    assert_eq!(listed, vec![b, a]);
}

#[tokio::test]
async fn toggle_and_delete_unknown_ids_are_not_found() {
    let server = server();
    let unknown = "00000000-0000-0000-0000-00000000beef";

    let toggle = server.patch(&format!("/api/todo/{unknown}/toggle")).await;
    assert_eq!(toggle.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(toggle.json::<ErrorResponse>().status_code, 404);

    let delete = server.delete(&format!("/api/todo/{unknown}")).await;
    assert_eq!(delete.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_not_found() {
    let server = server();

    let toggle = server.patch("/api/todo/not-an-id/toggle").await;
    assert_eq!(toggle.status_code(), StatusCode::NOT_FOUND);

    let delete = server.delete("/api/todo/not-an-id").await;
    assert_eq!(delete.status_code(), StatusCode::NOT_FOUND);

    // Segments that do not even percent-decode to UTF-8.
    let delete = server.delete("/api/todo/%FF").await;
    assert_eq!(delete.status_code(), StatusCode::NOT_FOUND);
    let error = delete.json::<ErrorResponse>();
    assert_eq!(error.code, "NOT_FOUND");
    assert_eq!(error.details, "Todo with id %FF not found");

    let toggle = server.patch("/api/todo/%FF/toggle").await;
    assert_eq!(toggle.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(toggle.json::<ErrorResponse>().status_code, 404);
}

#[tokio::test]
async fn end_to_end_workflow() {
    let server = server_with(AppState::new(InMemoryTodoRepository::new(
        test_environment(),
    )));

    // 1. Create
    let created = server
        .post("/api/todo")
        .json(&json!({ "title": "Buy milk" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let item = created.json::<TodoItem>();
    assert_eq!(item.title, "Buy milk");
    assert!(!item.completed);
    assert!(item.completed_at.is_none());

    // 2. Listed
    let listed = server.get("/api/todo").await.json::<Vec<TodoItem>>();
    assert_eq!(listed, vec![item.clone()]);

    // 3. Complete
    let toggled = server.patch(&format!("/api/todo/{}/toggle", item.id)).await;
    assert_eq!(toggled.status_code(), StatusCode::OK);
    let completed = toggled.json::<TodoItem>();
    assert!(completed.completed);
    assert!(completed.completed_at.is_some());

    // 4. Delete
    let deleted = server.delete(&format!("/api/todo/{}", item.id)).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
    assert!(deleted.text().is_empty());

    // 5. Gone
    let listed = server.get("/api/todo").await.json::<Vec<TodoItem>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn toggle_stamps_current_time() {
    let server = server_with(AppState::new(InMemoryTodoRepository::new(
        todo_core::TodoEnvironment::production(),
    )));
    let item = create(&server, "Now-ish").await;

    let completed = server
        .patch(&format!("/api/todo/{}/toggle", item.id))
        .await
        .json::<TodoItem>();

    let completed_at = completed.completed_at.expect("completedAt is set");
    assert!((Utc::now() - completed_at).abs() < Duration::seconds(5));

    let reopened = server
        .patch(&format!("/api/todo/{}/toggle", item.id))
        .await
        .json::<Value>();
    assert_eq!(reopened["completed"], false);
    assert!(reopened.get("completedAt").is_none());
}

#[tokio::test]
async fn health_and_readiness() {
    let server = server();
    create(&server, "one").await;

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.text(), "ok");

    let ready = server.get("/ready").await.json::<Value>();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["items"], 1);
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let server = server();
    let response = server.get("/api/nothing-here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<ErrorResponse>().code, "NOT_FOUND");
}

#[tokio::test]
async fn unsupported_method_uses_error_envelope() {
    let server = server();
    let item = create(&server, "stay").await;

    let put = server.put("/api/todo").await;
    assert_eq!(put.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let error = put.json::<ErrorResponse>();
    assert_eq!(error.status_code, 405);
    assert_eq!(error.code, "METHOD_NOT_ALLOWED");
    assert_eq!(error.details, "PUT is not supported on /api/todo");

    let get_one = server.get(&format!("/api/todo/{}", item.id)).await;
    assert_eq!(get_one.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(get_one.json::<ErrorResponse>().code, "METHOD_NOT_ALLOWED");

    let listed = server.get("/api/todo").await.json::<Vec<TodoItem>>();
    assert_eq!(listed, vec![item]);
}

#[tokio::test]
async fn responses_carry_correlation_id() {
    let server = server();
    let response = server.get("/api/todo").await;
    let header = response.header(CORRELATION_ID_HEADER);
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn panicking_handler_becomes_generic_500() {
    async fn boom() -> &'static str {
        panic!("database password is hunter2")
    }

    let router = with_middleware(Router::new().route("/boom", get(boom)), &origins());

    let response = router
        .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key(CORRELATION_ID_HEADER));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("hunter2"));

    let error: ErrorResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(error.status_code, 500);
    assert_eq!(error.message, "An unexpected error occurred");
    assert_eq!(error.details, "Please try again later");
    assert!(error.timestamp <= Utc::now());
}
