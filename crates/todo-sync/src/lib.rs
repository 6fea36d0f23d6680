//! Todo Sync Core
//!
//! Keeps a local to-do list in step with a remote store.
//! Every mutation is followed by a full re-fetch; local state is only ever
//! replaced by what the store returns.

mod config;
mod display;
mod error;
mod filter;
mod model;
mod remote;
mod sync;

#[cfg(test)]
mod tests;

pub use config::{RemoteConfig, DEFAULT_BASE_URL};
pub use display::{Layout, Theme, MOBILE_BREAKPOINT_PX};
pub use error::{SyncError, SyncResult};
pub use filter::Filter;
pub use model::{NewTodo, RemoteTodo, Todo};
pub use remote::{HttpRemote, MemoryRemote, TodoRemote};
pub use sync::{Snapshot, Synchronizer, ViewState};
