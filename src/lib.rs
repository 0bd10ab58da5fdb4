//! Portfolio API - library for app logic and testing

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use state::AppState;

/// Fully open CORS. The API is consumed by arbitrary frontends and auth
/// rides in the Authorization header rather than cookies, so credentialed
/// CORS is not needed.
pub fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create and configure the application router.
pub fn create_app(state: AppState) -> Router {
    let cors = configure_cors();
    tracing::info!("CORS configured");

    Router::new()
        .route("/api", get(routes::health::root))
        .route("/api/", get(routes::health::root))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/verify", get(routes::auth::verify))
        .route(
            "/api/blog/posts",
            get(routes::blog::list_posts).post(routes::blog::create_post),
        )
        .route(
            "/api/blog/posts/{id}",
            get(routes::blog::get_post)
                .put(routes::blog::update_post)
                .delete(routes::blog::delete_post),
        )
        .route(
            "/api/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(routes::projects::get_project)
                .put(routes::projects::update_project)
                .delete(routes::projects::delete_project),
        )
        .route("/api/contact", post(routes::contact::send_message))
        .route("/api/contact/messages", get(routes::contact::list_messages))
        .route(
            "/api/contact/messages/{id}",
            delete(routes::contact::delete_message),
        )
        .layer(logging::middleware::propagate_request_id_layer())
        .layer(middleware::from_fn(logging::middleware::log_request))
        .layer(logging::middleware::request_id_layer())
        .layer(TraceLayer::new_for_http())
        // Compress responses with gzip/br/zstd automatically
        .layer(CompressionLayer::new())
        // Global 2 MB request body cap prevents unbounded buffering
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
        .layer(cors)
        .with_state(state)
}

/// Run the server (used by main).
pub async fn run() {
    dotenvy::dotenv().ok();

    // Guards MUST be held for the programme's lifetime; dropping them early
    // shuts down background log-writer threads and loses buffered log lines.
    let _log_guards = logging::init();

    let config = config::AppConfig::from_env();

    // Refuse to start in production with the insecure default JWT secret.
    if config.is_production()
        && (config.jwt_secret.is_empty()
            || config.jwt_secret == "default-jwt-secret-change-in-production")
    {
        panic!(
            "FATAL: JWT_SECRET must be set to a secure, unique value in production. \
             Refusing to start with the default secret."
        );
    }

    let store = db::Store::connect(&config)
        .await
        .expect("Failed to initialize MongoDB client");

    match store.ping().await {
        Ok(()) => tracing::info!("MongoDB connection verified"),
        Err(e) => tracing::warn!(
            "MongoDB ping failed: {}. Continuing; requests will fail until the database is reachable.",
            e
        ),
    }

    let state = AppState::new(store.clone(), &config);
    let app = create_app(state);

    // Bind address is configurable via HOST / PORT env vars, defaulting to
    // 127.0.0.1:3001 so existing dev setups keep working unchanged.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST/PORT configuration");
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    store.shutdown().await;
    tracing::info!("Store connection closed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_liveness_through_full_stack() {
        let state = routes::testing::test_state().await;
        let app = create_app(state);

        let req = Request::get("/api/").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        // Request id middleware stamps every response.
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let state = routes::testing::test_state().await;
        let app = create_app(state);

        let req = Request::get("/api/unknown").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
