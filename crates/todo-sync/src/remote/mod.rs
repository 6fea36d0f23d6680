//! Remote Store Layer
//!
//! Abstract interface to the store of record.
//! Implementations: HTTP (the real store) and in-memory.

mod http;
mod memory;

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::model::{NewTodo, Todo};

pub use http::HttpRemote;
pub use memory::MemoryRemote;

/// Operations the remote store exposes
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TodoRemote {
    /// List tasks, optionally narrowed by a filter keyword passed through verbatim
    async fn fetch(&self, filter: Option<&str>) -> SyncResult<Vec<Todo>>;

    async fn create(&self, todo: &NewTodo) -> SyncResult<()>;

    async fn set_completed(&self, id: &str, completed: bool) -> SyncResult<()>;

    async fn delete(&self, id: &str) -> SyncResult<()>;

    /// Delete every completed task
    async fn clear_completed(&self) -> SyncResult<()>;
}
