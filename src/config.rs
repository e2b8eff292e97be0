// Runtime configuration, read from the environment once at startup

use crate::auth::token::TokenService;

/// Process-wide configuration. Loaded once in `main` and shared read-only
/// for the process lifetime; there is no reinitialization path.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: String,
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
    /// Session cookies are marked `Secure` in production.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// Panics when a required variable is missing; configuration problems
    /// should stop the process before it starts serving.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
        let token_ttl_seconds = std::env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(TokenService::DEFAULT_TTL_SECONDS);
        let cookie_secure = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        Self {
            database_url,
            host,
            port,
            jwt_secret,
            token_ttl_seconds,
            cookie_secure,
        }
    }
}
