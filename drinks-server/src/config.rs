//! Server configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATABASE_URL | required | PostgreSQL connection string |
//! | AUTH0_DOMAIN | required | Token issuer domain |
//! | API_AUDIENCE | required | Expected token audience |
//! | HTTP_PORT | 5000 | HTTP listen port |
//! | ENVIRONMENT | development | development / staging / production |
//! | DB_MAX_CONNECTIONS | 5 | PostgreSQL pool size |
//! | JWKS_CACHE_TTL_SECS | 600 | Signing key cache TTL, 0 disables caching |
//! | RESET_DATABASE | false | Drop all drinks on start and seed the default one |
//!
//! Flags accept `true`/`false`/`1`/`0`/`yes`/`no` (any case); other values are
//! a startup error.

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Issuer domain, e.g. `example.eu.auth0.com`
    pub auth0_domain: String,
    /// API identifier tokens must be issued for
    pub api_audience: String,
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    pub db_max_connections: u32,
    pub jwks_cache_ttl: Option<Duration>,
    pub reset_database: bool,
}

impl Config {
    fn require(name: &str) -> Result<String, BoxError> {
        match std::env::var(name) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(format!("{name} must be set").into()),
        }
    }

    fn parse_flag(name: &str, raw: Option<&str>, default: bool) -> Result<bool, BoxError> {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(default);
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(format!("{name} must be true or false, got {raw:?}").into()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let jwks_ttl_secs: u64 = std::env::var("JWKS_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        Ok(Self {
            database_url: Self::require("DATABASE_URL")?,
            auth0_domain: Self::require("AUTH0_DOMAIN")?,
            api_audience: Self::require("API_AUDIENCE")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            jwks_cache_ttl: (jwks_ttl_secs > 0).then(|| Duration::from_secs(jwks_ttl_secs)),
            reset_database: Self::parse_flag(
                "RESET_DATABASE",
                std::env::var("RESET_DATABASE").ok().as_deref(),
                false,
            )?,
        })
    }

    /// Expected `iss` claim
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// Well-known key-distribution endpoint of the issuer
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    fn domain(&self) -> &str {
        self.auth0_domain
            .trim_start_matches("https://")
            .trim_end_matches('/')
    }
}
