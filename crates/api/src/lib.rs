//! HTTP surface for the catalog service.
//!
//! Reads are public; catalog writes and user administration sit behind a
//! bearer-token middleware plus per-route capability checks. Handlers speak
//! the `{success, ...}` JSON envelope throughout, including errors.

pub mod app;
pub mod authz;
pub mod context;
pub mod middleware;
