//! `souq-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod lang;
pub mod slug;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, UserId};
pub use lang::{Lang, LocalizedText};
pub use slug::{slugify, slugify_text};
