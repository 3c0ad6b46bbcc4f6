//! `souq-auth` — identity, roles, and token verification.
//!
//! Tokens only prove who the caller is. What the caller may do is read from
//! the user record at request time, so deactivating a user or demoting a role
//! takes effect immediately regardless of outstanding tokens.

pub mod claims;
pub mod role;
pub mod token;
pub mod user;

pub use claims::{validate_claims, Claims, TokenValidationError};
pub use role::{authorize, AuthzError, Capability, Role};
pub use token::{Hs256JwtVerifier, JwtVerifier, TokenError};
pub use user::{NewUser, User, UserPatch};
