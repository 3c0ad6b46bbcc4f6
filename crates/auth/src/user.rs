//! User accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use souq_core::{DomainError, DomainResult, UserId};

use crate::role::Role;

/// A user account. Deliberately credential-free: password handling lives
/// outside this system, so there is nothing here to leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: Option<bool>,
}

impl NewUser {
    pub fn into_user(self, id: UserId, now: DateTime<Utc>) -> DomainResult<User> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let email = normalize_email(&self.email)?;
        Ok(User {
            id,
            name,
            email,
            role: self.role,
            is_active: self.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update for a user. Absent fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = self.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = normalize_email(&email)?;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        user.updated_at = now;
        Ok(())
    }
}

/// Lowercase and trim an email, rejecting obviously malformed input.
fn normalize_email(email: &str) -> DomainResult<String> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::validation("invalid email format"));
    }
    Ok(email)
}
