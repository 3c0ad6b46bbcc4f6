use souq_auth::{Role, User};
use souq_core::UserId;

/// Authenticated actor for a request.
///
/// Inserted by the auth middleware once the bearer token and the backing
/// user record have both been checked, so handlers can rely on the account
/// existing and being active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    user: User,
}

impl ActorContext {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}
