//! Bearer-token minting and validation.
//!
//! Tokens are JWTs signed with a symmetric key (HS256) taken from
//! configuration. Expiry is validated on every decode; issuer and audience
//! validation are disabled because tokens are both minted and consumed by
//! this service alone.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

/// Token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Account email at mint time.
    pub email: String,
    /// Admin flag at mint time. Authorization re-checks the database row, so
    /// a stale claim cannot grant revoked permissions.
    pub admin: bool,
    /// Issued-at timestamp (Unix seconds).
    pub iat: u64,
    /// Expiration timestamp (Unix seconds).
    pub exp: u64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: u64,
}

impl TokenService {
    /// Creates a token service from the configured symmetric signing key.
    ///
    /// # Arguments
    /// - `key` - Symmetric signing key bytes from configuration
    /// - `ttl_seconds` - Lifetime applied to minted tokens
    ///
    /// # Returns
    /// - `TokenService` - New service instance
    pub fn new(key: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(key.as_bytes()),
            decoding: DecodingKey::from_secret(key.as_bytes()),
            ttl_seconds,
        }
    }

    /// Lifetime in seconds applied to minted tokens.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Mints a token for the given user.
    ///
    /// # Arguments
    /// - `user` - The authenticated user row
    ///
    /// # Returns
    /// - `Ok(String)` - Signed compact JWT
    /// - `Err(AppError::InternalError)` - Signing failure
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, AppError> {
        let now = now_unix_secs();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            admin: user.admin,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Validates a token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Compact JWT string as presented by the client
    ///
    /// # Returns
    /// - `Ok(Claims)` - Validated claims
    /// - `Err(AuthError::TokenExpired)` - Expiry claim is in the past
    /// - `Err(AuthError::InvalidToken)` - Bad signature or malformed token
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired.into(),
                _ => AuthError::InvalidToken(e.to_string()).into(),
            })
    }
}

fn now_unix_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
