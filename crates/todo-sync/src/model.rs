//! Task Models
//!
//! Local task record plus the shapes the remote store speaks on the wire.

use serde::{Deserialize, Serialize};

/// A task as the client displays it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Store-assigned identifier
    pub id: String,
    pub text: String,
    pub completed: bool,
}

// ========================
// Wire Types
// ========================

/// A task as the remote store returns it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTodo {
    #[serde(rename = "_id")]
    pub id: String,
    pub todo: String,
    #[serde(default)]
    pub completed: bool,
}

impl From<RemoteTodo> for Todo {
    fn from(remote: RemoteTodo) -> Self {
        Self {
            id: remote.id,
            text: remote.todo,
            completed: remote.completed,
        }
    }
}

/// Body for `POST /todo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub todo: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            todo: text.into(),
            completed: false,
        }
    }
}

/// Body for `PUT /todo/{id}`
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct CompletedPatch {
    pub completed: bool,
}
