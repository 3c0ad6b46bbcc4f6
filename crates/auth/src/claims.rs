//! Token claims and their time-window rules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use souq_core::UserId;

/// The claims carried by an access token.
///
/// `sub` is the user id; `iat` and `exp` are unix timestamps in seconds.
/// The token carries no role: authorization always consults the stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: UserId, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub,
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenValidationError {
    #[error("token expiry precedes its issue time")]
    InvalidTimeWindow,
    #[error("token is not yet valid")]
    NotYetValid,
    #[error("token has expired")]
    Expired,
}

/// Validate the claim time window against an injected clock.
///
/// The window is `[iat, exp)`: a token is rejected at the exact second of
/// `exp`. Taking `now` as a parameter keeps every outcome reproducible in
/// tests.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    let now = now.timestamp();
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
