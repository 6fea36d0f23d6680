//! Sync Errors
//!
//! Failures talking to the remote store. Callers log them and move on.

use thiserror::Error;

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    #[error("{operation} returned status {status}")]
    Status { operation: &'static str, status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}
