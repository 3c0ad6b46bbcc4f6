//! `souq-engine` — the catalog query engine and write path.
//!
//! The query side turns a bounded set of filter/sort/page parameters into a
//! deterministic page of product views, joining categories and audit actors
//! inline. The write side applies validated creates, partial updates, and
//! deletes over the same stores. Neither side retries or masks store
//! failures.

pub mod error;
pub mod query;
pub mod request;
pub mod view;
pub mod write;

pub use error::{QueryError, WriteError};
pub use query::CatalogQuery;
pub use request::{CategoryFilter, ConsistencyMode, PageRequest, DEFAULT_LIMIT, MAX_LIMIT};
pub use view::{CategoryPage, PageResult, ProductView};
pub use write::CatalogWriter;
