use thiserror::Error;

/// Errors surfaced by a [`KvStore`](crate::KvStore) backend.
///
/// "Key absent" is not an error: reads return `Ok(None)` so that the
/// not-found signal stays distinguishable from real failures.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors from the mapping registry's get-or-create path.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("url is empty")]
    EmptyUrl,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("stored mapping is corrupt: {0}")]
    Corrupted(String),
}

/// Errors from resolving a code back to its record.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("code not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("stored record is corrupt: {0}")]
    Corrupted(String),
}
