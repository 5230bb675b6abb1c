//! # Todo Client
//!
//! Typed HTTP client for the todo service, plus the list views a user
//! interface builds on top of it.
//!
//! ## Example
//!
//! ```no_run
//! use todo_client::{TodoClient, TodoList};
//!
//! # async fn example() -> Result<(), todo_client::ClientError> {
//! let client = TodoClient::new("http://localhost:5000");
//!
//! let item = client.create("Buy milk").await?;
//! client.toggle(&item.id).await?;
//!
//! let list = TodoList::from(client.list().await?);
//! println!("{} pending, {} done", list.pending().len(), list.completed().len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod filter;

pub use client::TodoClient;
pub use error::ClientError;
pub use filter::{TodoFilter, TodoList};
