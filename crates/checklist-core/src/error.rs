//! Error Types
//!
//! Every failure in the checklist is local and non-fatal. These types let the
//! callers decide whether to log and continue or to surface a no-op.

use thiserror::Error;

/// Result type for checklist operations
pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// Failures of the string-keyed persistent store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage is disabled or not present in this environment
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("failed to read record: {0}")]
    Read(String),
    /// Write rejected by the host (quota exceeded, private mode, ...)
    #[error("failed to write record: {0}")]
    Write(String),
    #[error("failed to encode checklist state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Checklist-level errors
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("unknown checklist item: {0}")]
    UnknownItem(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
