//! Token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, Claims, TokenValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed or has a bad signature")]
    Invalid,
    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verifies a bearer token and returns its claims.
///
/// `now` is injected so callers and tests control the clock.
pub trait JwtVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError>;
}

/// HMAC-SHA256 verifier.
pub struct Hs256JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256JwtVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The library still requires `exp` to be present, but the time
        // comparison itself runs through `validate_claims` with our clock.
        validation.validate_exp = false;
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl JwtVerifier for Hs256JwtVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use jsonwebtoken::{EncodingKey, Header};
    use souq_core::UserId;

    const SECRET: &[u8] = b"test-secret";

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn mint(claims: &Claims, secret: &[u8]) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_round_trips_claims() {
        let verifier = Hs256JwtVerifier::new(SECRET);
        let sub = UserId::new();
        let claims = Claims::new(sub, at(1_000), Duration::seconds(3600));
        let token = mint(&claims, SECRET);

        let verified = verifier.verify(&token, at(2_000)).unwrap();
        assert_eq!(verified.sub, sub);
        assert_eq!(verified.exp, claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected_as_invalid() {
        let verifier = Hs256JwtVerifier::new(SECRET);
        let claims = Claims::new(UserId::new(), at(1_000), Duration::seconds(3600));
        let token = mint(&claims, b"other-secret");

        assert_eq!(verifier.verify(&token, at(2_000)), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_rejected_as_invalid() {
        let verifier = Hs256JwtVerifier::new(SECRET);
        assert_eq!(
            verifier.verify("not.a.token", at(2_000)),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn expired_token_is_rejected_by_our_clock() {
        let verifier = Hs256JwtVerifier::new(SECRET);
        let claims = Claims::new(UserId::new(), at(1_000), Duration::seconds(60));
        let token = mint(&claims, SECRET);

        assert_eq!(
            verifier.verify(&token, at(1_060)),
            Err(TokenError::Claims(TokenValidationError::Expired))
        );
        // One second earlier the same token passes.
        assert!(verifier.verify(&token, at(1_059)).is_ok());
    }
}
