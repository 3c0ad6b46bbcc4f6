//! `souq-store` — document store traits and the in-memory implementation.
//!
//! The traits are the seam between the query/write layers and persistence.
//! Stores own the cross-document invariants (slug and email uniqueness) and
//! the physical ordering of listings; everything above them is pure logic.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryCatalogStore;
pub use traits::{CategoryStore, ProductFilter, ProductStore, UserStore};
