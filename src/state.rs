//! Shared state handed to every handler.

use chrono::Duration;

use crate::auth::{AccessGuard, Role, TokenService};
use crate::config::AppConfig;
use crate::db::Store;

/// Everything handlers need, wired once at startup. Clones are cheap; the
/// store and keys are shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub tokens: TokenService,
    pub guard: AccessGuard,
    /// Author stamped onto blog posts at creation.
    pub blog_author: String,
}

impl AppState {
    pub fn new(store: Store, config: &AppConfig) -> Self {
        let tokens = TokenService::new(
            &config.jwt_secret,
            Duration::hours(config.token_ttl_hours),
        );
        let guard = AccessGuard::new(tokens.clone(), Role::Admin);

        Self {
            store,
            tokens,
            guard,
            blog_author: config.blog_author.clone(),
        }
    }
}
