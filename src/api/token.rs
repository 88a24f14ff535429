//! Signed login tokens.
//!
//! Tokens are HS256 JWTs carrying the user identifier in a `uid` claim and
//! a one-hour expiry by default (configurable via
//! [`AuthConfig::token_ttl_secs`](crate::config::AuthConfig)).

use crate::error::{Error, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims embedded in an issued token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub uid: i64,
    /// Expiry as a Unix timestamp (seconds)
    pub exp: i64,
}

/// Sign a token for the given user
///
/// The expiry is `now + ttl_secs`.
pub fn issue_token(secret: &str, uid: i64, ttl_secs: u64) -> Result<String> {
    let claims = Claims {
        uid,
        exp: chrono::Utc::now().timestamp() + ttl_secs as i64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Token(e.to_string()))
}

/// Decode and validate a token, returning its claims
///
/// Fails on a bad signature, a malformed token, or an expired `exp` claim.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| Error::Token(e.to_string()))?;

    Ok(data.claims)
}
