//! In-Memory Remote
//!
//! Behaves like the HTTP store without a network. Used by tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use tracing::debug;

use super::TodoRemote;
use crate::error::{SyncError, SyncResult};
use crate::filter::Filter;
use crate::model::{NewTodo, Todo};

#[derive(Debug, Default)]
pub struct MemoryRemote {
    records: RefCell<Vec<Todo>>,
    next_id: Cell<u64>,
    offline: Cell<bool>,
    /// Every request that reached the store, as `METHOD /path`
    requests: RefCell<Vec<String>>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `(text, completed)` records, in order
    pub fn seeded<'a>(records: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let remote = Self::new();
        for (text, completed) in records {
            let id = remote.issue_id();
            remote.records.borrow_mut().push(Todo {
                id,
                text: text.to_string(),
                completed,
            });
        }
        remote
    }

    /// While offline every call fails before reaching the store
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    /// Current contents of the store
    pub fn records(&self) -> Vec<Todo> {
        self.records.borrow().clone()
    }

    fn issue_id(&self) -> String {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        format!("{n:024x}")
    }

    fn receive(&self, request: String) -> SyncResult<()> {
        if self.offline.get() {
            return Err(SyncError::Transport(format!("store unreachable: {request}")));
        }
        debug!(%request, "memory store");
        self.requests.borrow_mut().push(request);
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoRemote for MemoryRemote {
    async fn fetch(&self, filter: Option<&str>) -> SyncResult<Vec<Todo>> {
        let request = match filter {
            Some(keyword) => format!("GET /todo?filterKeyword={keyword}"),
            None => "GET /todo".to_string(),
        };
        self.receive(request)?;

        // Unknown keywords fall back to the whole list
        let filter = filter.and_then(|k| k.parse::<Filter>().ok()).unwrap_or_default();
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|todo| filter.admits(todo.completed))
            .cloned()
            .collect())
    }

    async fn create(&self, todo: &NewTodo) -> SyncResult<()> {
        self.receive("POST /todo".to_string())?;
        let id = self.issue_id();
        self.records.borrow_mut().push(Todo {
            id,
            text: todo.todo.clone(),
            completed: todo.completed,
        });
        Ok(())
    }

    async fn set_completed(&self, id: &str, completed: bool) -> SyncResult<()> {
        self.receive(format!("PUT /todo/{id}"))?;
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(SyncError::Status {
                operation: "set_completed",
                status: 404,
            })?;
        record.completed = completed;
        Ok(())
    }

    async fn delete(&self, id: &str) -> SyncResult<()> {
        self.receive(format!("DELETE /todo/{id}"))?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|todo| todo.id != id);
        if records.len() == before {
            return Err(SyncError::Status {
                operation: "delete",
                status: 404,
            });
        }
        Ok(())
    }

    async fn clear_completed(&self) -> SyncResult<()> {
        self.receive("DELETE /todo".to_string())?;
        self.records.borrow_mut().retain(|todo| !todo.completed);
        Ok(())
    }
}
