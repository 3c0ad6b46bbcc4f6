//! Engine error taxonomy.

use thiserror::Error;

use souq_core::DomainError;
use souq_store::StoreError;

/// Failures of the read side. `CategoryNotFound` is terminal for a filtered
/// listing: an unresolvable slug never degrades to an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Category not found")]
    CategoryNotFound,
    #[error("Product not found")]
    ProductNotFound,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the write side. Uniqueness collisions arrive as
/// `Domain(Conflict)`; anything under `Store` is an infrastructure failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
