use axum::http::HeaderMap;

use crate::error::ApiError;

use super::token::{Claims, Role, TokenService};

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Route-level access control. Protected handlers call [`authorize`] on the
/// incoming headers before doing any work.
///
/// [`authorize`]: AccessGuard::authorize
#[derive(Clone)]
pub struct AccessGuard {
    tokens: TokenService,
    required: Role,
}

impl AccessGuard {
    pub fn new(tokens: TokenService, required: Role) -> Self {
        Self { tokens, required }
    }

    /// Verify the request carries a valid token for a sufficient role.
    /// Returns the claims so handlers can attribute actions to the subject.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<Claims, ApiError> {
        let token = extract_bearer_token(headers)
            .ok_or_else(|| ApiError::unauthenticated("Authorization required"))?;

        let claims = self.tokens.verify(token)?;

        if !claims.role.grants(self.required) {
            return Err(ApiError::unauthenticated("Insufficient permissions"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Duration;

    fn guard() -> AccessGuard {
        let tokens = TokenService::new("test-secret-key", Duration::hours(1));
        AccessGuard::new(tokens, Role::Admin)
    }

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_authorize_rejects_missing_header() {
        let err = guard().authorize(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "Authorization required");
    }

    #[test]
    fn test_authorize_rejects_non_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));

        assert!(guard().authorize(&headers).is_err());
    }

    #[test]
    fn test_authorize_rejects_garbage_token() {
        let err = guard()
            .authorize(&headers_with_token("not.a.token"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_authorize_accepts_valid_token() {
        let tokens = TokenService::new("test-secret-key", Duration::hours(1));
        let token = tokens.issue("admin", Role::Admin).unwrap();

        let claims = guard().authorize(&headers_with_token(&token)).unwrap();
        assert_eq!(claims.sub, "admin");
    }
}
