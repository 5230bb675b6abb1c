//! Axum HTTP surface for the todo item store.
//!
//! Translates HTTP requests into [`todo_core::TodoRepository`] calls and maps
//! the outcomes to status codes and JSON bodies.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** and validate input ([`extractors`])
//! 3. **Call** the item store held in [`AppState`]
//! 4. **Map** the outcome to a response; failures go through [`AppError`]
//!
//! # Status Mapping
//!
//! | outcome | status |
//! |---|---|
//! | list / toggle succeeded | 200 |
//! | created | 201 + `Location` |
//! | deleted | 204 |
//! | invalid payload | 400 |
//! | unknown id | 404 |
//! | anything else, including panics | 500 |
//!
//! # Example
//!
//! ```no_run
//! use todo_core::{InMemoryTodoRepository, TodoEnvironment};
//! use todo_web::{AppState, build_router};
//!
//! # async fn example() -> std::io::Result<()> {
//! let state = AppState::new(InMemoryTodoRepository::new(TodoEnvironment::production()));
//! let app = build_router(state, &["http://localhost:4200".to_string()]);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use error::{AppError, ErrorResponse};
pub use extractors::{CreateTodo, TodoPath};
pub use middleware::{CORRELATION_ID_HEADER, CorrelationId};
pub use routes::{build_router, with_middleware};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
