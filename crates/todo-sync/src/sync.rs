//! View-State Synchronizer
//!
//! Mirrors the remote store into local view state. Mutations go to the store
//! first; on success the whole list is fetched again and handed to the refresh
//! callback. Nothing is applied optimistically, so a failed call leaves the
//! displayed list exactly as it was.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::SyncResult;
use crate::filter::Filter;
use crate::model::{NewTodo, Todo};
use crate::remote::TodoRemote;

/// Result of one successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    /// Filter the fetch was taken under, if it is one we recognise
    pub filter: Option<Filter>,
}

/// What the list currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub todos: Vec<Todo>,
    pub filter: Filter,
}

impl ViewState {
    /// Replace the list wholesale with a fresh snapshot
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.todos = snapshot.todos;
        if let Some(filter) = snapshot.filter {
            self.filter = filter;
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }
}

type RefreshFn = dyn Fn(Snapshot);

/// Issues store calls and reconciles local state after each one
pub struct Synchronizer<R> {
    remote: Rc<R>,
    on_refresh: Rc<RefreshFn>,
}

impl<R> Clone for Synchronizer<R> {
    fn clone(&self) -> Self {
        Self {
            remote: Rc::clone(&self.remote),
            on_refresh: Rc::clone(&self.on_refresh),
        }
    }
}

impl<R> fmt::Debug for Synchronizer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronizer").finish_non_exhaustive()
    }
}

impl<R: TodoRemote> Synchronizer<R> {
    pub fn new(remote: R, on_refresh: impl Fn(Snapshot) + 'static) -> Self {
        Self::with_shared(Rc::new(remote), on_refresh)
    }

    /// Build around a remote the caller keeps a handle to
    pub fn with_shared(remote: Rc<R>, on_refresh: impl Fn(Snapshot) + 'static) -> Self {
        Self {
            remote,
            on_refresh: Rc::new(on_refresh),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Fetch every task and replace local state
    pub async fn load_all(&self) -> SyncResult<()> {
        let todos = self.remote.fetch(None).await.inspect_err(|err| {
            warn!(error = %err, "load_all failed, keeping previous list");
        })?;
        debug!(count = todos.len(), "load_all");
        (self.on_refresh)(Snapshot {
            todos,
            filter: Some(Filter::All),
        });
        Ok(())
    }

    /// Fetch tasks matching `keyword` and replace local state
    ///
    /// The keyword is forwarded to the store as-is.
    pub async fn load_filtered(&self, keyword: &str) -> SyncResult<()> {
        let todos = self.remote.fetch(Some(keyword)).await.inspect_err(|err| {
            warn!(error = %err, keyword, "load_filtered failed, keeping previous list");
        })?;
        debug!(count = todos.len(), keyword, "load_filtered");
        (self.on_refresh)(Snapshot {
            todos,
            filter: keyword.parse().ok(),
        });
        Ok(())
    }

    pub async fn create_task(&self, text: &str) -> SyncResult<()> {
        let outcome = self.remote.create(&NewTodo::new(text)).await;
        self.reconcile("create_task", outcome).await
    }

    pub async fn delete_task(&self, id: &str) -> SyncResult<()> {
        let outcome = self.remote.delete(id).await;
        self.reconcile("delete_task", outcome).await
    }

    /// Flip completion; `current_status` is what the row showed when clicked
    pub async fn toggle_completed(&self, id: &str, current_status: bool) -> SyncResult<()> {
        let outcome = self.remote.set_completed(id, !current_status).await;
        self.reconcile("toggle_completed", outcome).await
    }

    pub async fn clear_completed(&self) -> SyncResult<()> {
        let outcome = self.remote.clear_completed().await;
        self.reconcile("clear_completed", outcome).await
    }

    /// After a successful mutation, re-fetch everything once.
    /// A failed re-fetch is logged but does not undo the mutation's success.
    async fn reconcile(&self, operation: &'static str, outcome: SyncResult<()>) -> SyncResult<()> {
        match outcome {
            Ok(()) => {
                debug!(operation, "mutation accepted, reloading");
                let _ = self.load_all().await;
                Ok(())
            }
            Err(err) => {
                warn!(operation, error = %err, "mutation failed");
                Err(err)
            }
        }
    }
}
