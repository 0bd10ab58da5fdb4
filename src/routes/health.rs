/**
 * Health Routes
 * Liveness endpoint at the API root
 */
use axum::{response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Body served at the API root.
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
    pub status: String,
}

/// GET /api/ - Liveness check. Says nothing about the database; it only
/// confirms the process is serving requests.
pub async fn root() -> impl IntoResponse {
    Json(LivenessResponse {
        message: "Portfolio API is running".to_string(),
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: T = serde_json::from_slice(&body).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_root_reports_healthy() {
        let app = Router::new().route("/api/", get(root));

        let (status, body) = get_json::<LivenessResponse>(app, "/api/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Portfolio API is running");
        assert_eq!(body.status, "healthy");
    }
}
