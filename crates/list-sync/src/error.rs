//! Error Types
//!
//! Storage and synchronization failures. User-facing conditions (empty or
//! duplicate input) are not errors; they surface as render effects.

use thiserror::Error;

/// Result type for persistent-store access
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for dispatched events
pub type SyncResult<T> = Result<T, SyncError>;

/// Persistent-store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored list is not a JSON array of strings: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failures while handling an event
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
