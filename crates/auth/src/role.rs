//! Roles and the capabilities they grant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of roles. Unknown role strings are rejected at the
/// deserialization boundary, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Capabilities granted by this role.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Admin => &[Capability::ManageCatalog, Capability::ManageUsers],
            Role::Customer => &[],
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a request is trying to do, independent of who is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Create, update, or delete products and categories.
    ManageCatalog,
    /// Manage user accounts and read user listings.
    ManageUsers,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("User role '{role}' is not authorized to access this route")]
    Forbidden { role: Role },
}

/// Check that `role` grants `capability`.
pub fn authorize(role: Role, capability: Capability) -> Result<(), AuthzError> {
    if role.has_capability(capability) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden { role })
    }
}
