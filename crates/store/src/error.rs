//! Store-level failures.

use thiserror::Error;

/// Failures surfaced by a document store.
///
/// `DuplicateKey` is the uniqueness signal callers translate into conflict
/// responses. `Poisoned` and `Backend` are infrastructure failures and must
/// reach the caller as such, never be masked as an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("store lock poisoned")]
    Poisoned,
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
