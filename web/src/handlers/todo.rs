//! Todo item endpoints.
//!
//! - `GET    /api/todo`             - list items, newest first
//! - `POST   /api/todo`             - create an item
//! - `DELETE /api/todo/:id`         - delete an item
//! - `PATCH  /api/todo/:id/toggle`  - flip an item's completion state
//!
//! Handlers are thin: the extractors validate input, the store decides,
//! and [`AppError`] maps every failure to the error envelope.

use crate::error::AppError;
use crate::extractors::{CreateTodo, TodoPath};
use crate::state::AppState;
use crate::WebResult;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use todo_core::TodoItem;

/// Base path of the todo resource.
pub const TODO_BASE_PATH: &str = "/api/todo";

/// List all items.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/todo
/// ```
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    Json(state.repository.list().await)
}

/// Create an item.
///
/// [`CreateTodo`] rejects invalid payloads with a 400 before this runs, so
/// the store is handed an already validated title.
///
/// Responds 201 with the item and a `Location` header naming it.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/todo \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Buy milk"}'
/// ```
pub async fn create_todo(
    State(state): State<AppState>,
    CreateTodo { title }: CreateTodo,
) -> impl IntoResponse {
    let item = state.repository.create_titled(title).await;

    tracing::info!(id = %item.id, "Created todo");

    let location = format!("{TODO_BASE_PATH}/{}", item.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(item))
}

/// Delete an item. Responds 204 with no body.
///
/// # Errors
///
/// 404 when no item has the id.
pub async fn delete_todo(
    State(state): State<AppState>,
    path: TodoPath,
) -> WebResult<StatusCode> {
    let deleted = match path.id {
        Some(id) => state.repository.delete(id).await,
        None => false,
    };

    if !deleted {
        return Err(AppError::not_found("Todo", &path.raw));
    }

    tracing::info!(id = %path.raw, "Deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Flip an item's completion state and return the updated item.
///
/// # Errors
///
/// 404 when no item has the id.
pub async fn toggle_todo(
    State(state): State<AppState>,
    path: TodoPath,
) -> WebResult<Json<TodoItem>> {
    let updated = match path.id {
        Some(id) => state.repository.toggle_complete(id).await,
        None => None,
    };

    let item = updated.ok_or_else(|| AppError::not_found("Todo", &path.raw))?;

    tracing::info!(id = %item.id, completed = item.completed, "Toggled todo");
    Ok(Json(item))
}
