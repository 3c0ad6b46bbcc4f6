//! Catalog domain module (bilingual categories and products).
//!
//! This crate contains the catalog records and their business rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Uniqueness across records is a store concern; everything a
//! single record can validate about itself lives here.

pub mod actor;
pub mod category;
pub mod product;
pub mod sort;

pub use actor::ActorSummary;
pub use category::{Category, CategoryPatch, NewCategory};
pub use product::{NewProduct, Product, ProductPatch};
pub use sort::ProductSort;
