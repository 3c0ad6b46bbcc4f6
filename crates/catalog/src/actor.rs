//! Audit projections of the users behind catalog writes.

use serde::{Deserialize, Serialize};

use souq_core::UserId;

/// The slice of a user that product responses expose as `createdBy` and
/// `updatedBy`. Never carries credentials or role information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl ActorSummary {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
