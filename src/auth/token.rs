use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Roles a principal can hold. Stored in user documents and embedded in
/// token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

impl Role {
    /// Whether this role satisfies `required`. Admin is the only role today,
    /// so this is plain equality; adding roles means extending this method,
    /// not auditing string comparisons across handlers.
    pub fn grants(self, required: Role) -> bool {
        self == required
    }
}

/// Claims carried inside every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username).
    pub sub: String,
    pub role: Role,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
}

/// Issues and verifies HS256 tokens with a fixed lifetime.
///
/// Built once at startup from the configured secret and shared through app
/// state, so handlers never reach for the environment.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Create a signed token for `subject` with the service's lifetime.
    pub fn issue(&self, subject: &str, role: Role) -> Result<String, ApiError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            ApiError::internal(
                "Failed to create token",
                "token lifetime overflows the datetime range",
            )
        })?;
        let claims = Claims {
            sub: subject.to_string(),
            role,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal("Failed to create token", e))
    }

    /// Decode and validate a token. Signature and expiry failures are
    /// indistinguishable to the caller.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        // Default validation allows 60s of clock skew; expired means expired.
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| ApiError::unauthenticated("Invalid or expired token"))
    }
}
