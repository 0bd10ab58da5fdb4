use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Hash a password with bcrypt on the blocking pool. Hashing takes tens of
/// milliseconds and must not stall the async runtime.
pub async fn hash_password(password: String) -> Result<String, ApiError> {
    match tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST)).await {
        Ok(Ok(hashed)) => Ok(hashed),
        Ok(Err(e)) => Err(ApiError::internal("Failed to process password", e)),
        Err(e) => Err(ApiError::internal("Failed to process password", e)),
    }
}

/// Check a password against a stored bcrypt hash. A malformed hash counts as
/// a mismatch rather than an error, so callers can treat every failure as
/// bad credentials.
pub async fn verify_password(password: String, hashed: String) -> bool {
    tokio::task::spawn_blocking(move || verify(password, &hashed).unwrap_or(false))
        .await
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hashed = hash_password("hunter2".to_string()).await.unwrap();

        assert_ne!(hashed, "hunter2");
        assert!(verify_password("hunter2".to_string(), hashed).await);
    }

    #[tokio::test]
    async fn test_verify_rejects_wrong_password() {
        let hashed = hash_password("hunter2".to_string()).await.unwrap();

        assert!(!verify_password("hunter3".to_string(), hashed).await);
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("hunter2".to_string(), "not-a-valid-hash".to_string()).await);
    }
}
