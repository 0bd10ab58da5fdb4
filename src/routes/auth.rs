/**
 * Authentication Routes
 * Login against the users collection and token verification
 */
use axum::{extract::State, http::HeaderMap, Json};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

use crate::auth::{password::verify_password, Role};
use crate::db::models::User;
use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub username: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/auth/login - Exchange credentials for a token.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let account = state
        .store
        .users()
        .find_one(doc! { "username": payload.username.clone() })
        .await
        .map_err(|e| ApiError::internal("Internal server error", e))?;

    let user = authenticate(account, &payload.username, payload.password).await?;

    let token = state.tokens.issue(&user.username, user.role)?;

    tracing::info!(username = %user.username, "login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserInfo {
            username: user.username,
            role: user.role,
        },
    }))
}

/// Resolve a login attempt against the account the store returned, if any.
///
/// Unknown usernames and wrong passwords both collapse into the same
/// `Invalid credentials` rejection; the response must not reveal which
/// accounts exist.
async fn authenticate(
    account: Option<User>,
    username: &str,
    password: String,
) -> Result<User, ApiError> {
    let Some(user) = account else {
        tracing::warn!(username = %username, "login failed: unknown username");
        return Err(ApiError::unauthenticated("Invalid credentials"));
    };

    if !verify_password(password, user.password_hash.clone()).await {
        tracing::warn!(username = %username, "login failed: wrong password");
        return Err(ApiError::unauthenticated("Invalid credentials"));
    }

    Ok(user)
}

/// GET /api/auth/verify - Confirm the presented token is still valid and
/// report who it belongs to.
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VerifyResponse>, ApiError> {
    let claims = state.guard.authorize(&headers)?;

    Ok(Json(VerifyResponse {
        success: true,
        username: claims.sub,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::error::ErrorResponse;
    use crate::routes::testing;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn auth_router(state: AppState) -> Router {
        Router::new()
            .route("/api/auth/verify", get(verify))
            .with_state(state)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn rendered(err: ApiError) -> (StatusCode, axum::body::Bytes) {
        let res = err.into_response();
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    fn stored_admin(password_hash: String) -> User {
        User {
            id: None,
            username: "admin".to_string(),
            password_hash,
            role: Role::Admin,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_authenticate_accepts_matching_password() {
        let hash = hash_password("admin123".to_string()).await.unwrap();

        let user = authenticate(Some(stored_admin(hash)), "admin", "admin123".to_string())
            .await
            .unwrap();
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn test_authenticate_rejects_unknown_username() {
        let err = authenticate(None, "ghost", "admin123".to_string())
            .await
            .unwrap_err();

        let (status, body) = rendered(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_failed_logins_share_one_rejection_body() {
        let hash = hash_password("admin123".to_string()).await.unwrap();

        let unknown = authenticate(None, "ghost", "admin123".to_string())
            .await
            .unwrap_err();
        let mismatch = authenticate(Some(stored_admin(hash)), "admin", "wrong-pass".to_string())
            .await
            .unwrap_err();

        let unknown = rendered(unknown).await;
        let mismatch = rendered(mismatch).await;
        assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown, mismatch);
    }

    #[tokio::test]
    async fn test_verify_without_token_is_unauthorized() {
        let app = auth_router(testing::test_state().await);

        let req = Request::get("/api/auth/verify").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let err: ErrorResponse = body_json(res).await;
        assert_eq!(err.error, "Authorization required");
    }

    #[tokio::test]
    async fn test_verify_with_garbage_token_is_unauthorized() {
        let app = auth_router(testing::test_state().await);

        let req = Request::get("/api/auth/verify")
            .header("authorization", "Bearer not.a.token")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let err: ErrorResponse = body_json(res).await;
        assert_eq!(err.error, "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_verify_with_valid_token_returns_subject() {
        let state = testing::test_state().await;
        let token = testing::admin_token(&state);
        let app = auth_router(state);

        let req = Request::get("/api/auth/verify")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: VerifyResponse = body_json(res).await;
        assert!(body.success);
        assert_eq!(body.username, "admin");
    }
}
