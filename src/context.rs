//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{HttpRemote, Synchronizer};

pub type TodoSync = Synchronizer<HttpRemote>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Synchronizer holds `Rc`s, so it lives in local (non-`Send`) storage
    sync: StoredValue<TodoSync, LocalStorage>,
}

impl AppContext {
    pub fn new(sync: TodoSync) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
        }
    }

    /// Run a store operation on the browser's task queue.
    /// Errors are already logged by the synchronizer.
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(TodoSync) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.sync.get_value()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
