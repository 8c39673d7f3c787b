//! Error Types
//!
//! None of these ever reach the user; the controller logs them and carries
//! on with its in-memory state.

use thiserror::Error;

use crate::task::TaskId;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Stored entry could not be parsed
    #[error("malformed persisted state under '{key}': {reason}")]
    MalformedState { key: String, reason: String },

    /// Store refused the read (storage disabled, security error)
    #[error("failed to read '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    /// Writing to the store failed (quota exceeded, storage unavailable)
    #[error("failed to write '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    /// Positional reference outside the current list
    #[error("index {index} out of range for {len} tasks")]
    InvalidIndex { index: usize, len: usize },

    /// Id no longer present in the list
    #[error("unknown task {0}")]
    UnknownTask(TaskId),

    #[error("task text is empty")]
    EmptyText,

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
