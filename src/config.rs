//! Application configuration read from the environment at startup.

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub blog_author: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl AppConfig {
    /// Read configuration from environment variables, falling back to
    /// development defaults. Call after dotenvy has loaded `.env`.
    pub fn from_env() -> Self {
        Self {
            mongo_url: std::env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "portfolio".to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "default-jwt-secret-change-in-production".to_string()),
            token_ttl_hours: parse_ttl_hours(std::env::var("TOKEN_TTL_HOURS").ok()),
            blog_author: std::env::var("BLOG_AUTHOR")
                .unwrap_or_else(|_| "Ubaldino Ramos".to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3001),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Token lifetimes outside 1 hour to 1 year are treated like unparsable
/// values and fall back to a day; huge lifetimes would overflow datetime
/// arithmetic when tokens are issued.
fn parse_ttl_hours(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.parse().ok())
        .filter(|hours| (1..=24 * 365).contains(hours))
        .unwrap_or(24)
}
