//! Custom Axum extractors.
//!
//! - [`CreateTodo`]: the validated creation payload
//! - [`TodoPath`]: the `{id}` path segment, parsed leniently
//!
//! Both reject through [`AppError`], so malformed input is reported with
//! the same envelope as every other failure.

use crate::error::AppError;
use crate::handlers::TODO_BASE_PATH;
use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::Deserialize;
use todo_core::{Title, TodoId};

/// Raw creation body as sent by the client.
#[derive(Debug, Deserialize)]
struct CreateTodoBody {
    title: Option<String>,
}

/// A creation request whose title already passed the item rules.
///
/// Rules, checked in order:
///
/// 1. the body is a JSON object and `title`, if present, is a string
/// 2. `title` is present and not null
/// 3. the trimmed title is not empty
/// 4. the trimmed title is at most 500 characters
///
/// # Example
///
/// ```ignore
/// async fn handler(CreateTodo { title }: CreateTodo) -> String {
///     title.into_inner()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CreateTodo {
    /// The trimmed, validated title.
    pub title: Title,
}

#[async_trait]
impl<S> FromRequest<S> for CreateTodo
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let title = extract_title(req, state).await.inspect_err(|rejection| {
            metrics::counter!("todo_validation_failures_total").increment(1);
            tracing::warn!(code = rejection.code(), "Rejected todo payload");
        })?;

        Ok(Self { title })
    }
}

async fn extract_title<S>(req: Request, state: &S) -> Result<Title, AppError>
where
    S: Send + Sync,
{
    let Json(body) = Json::<CreateTodoBody>::from_request(req, state)
        .await
        .inspect_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable todo payload");
        })?;

    let raw = body
        .title
        .ok_or_else(|| AppError::bad_request("TITLE_REQUIRED", "Title is required"))?;

    Ok(Title::parse(&raw)?)
}

/// Item id taken from the path.
///
/// Ids are opaque to clients, so a segment that is not a well-formed id is
/// not a client error: it simply names no item. Handlers turn `None` into
/// a 404.
#[derive(Debug, Clone)]
pub struct TodoPath {
    /// The segment as received.
    pub raw: String,
    /// The parsed id, if the segment is well-formed.
    pub id: Option<TodoId>,
}

#[async_trait]
impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                // Undecodable segments (e.g. `%FF`) name no item either.
                tracing::debug!(%rejection, "Undecodable todo id segment");
                return Ok(Self {
                    raw: raw_id_segment(parts.uri.path()).to_string(),
                    id: None,
                });
            }
        };

        let id = raw.parse::<TodoId>().ok();
        Ok(Self { raw, id })
    }
}

/// The still percent-encoded id segment following the todo base path.
fn raw_id_segment(path: &str) -> &str {
    path.strip_prefix(TODO_BASE_PATH)
        .unwrap_or(path)
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
}
