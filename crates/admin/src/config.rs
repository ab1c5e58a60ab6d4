//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `QUEUE_API_BASE_URL` - Base URL of the queue-platform backend API
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL of the admin panel (default: http://localhost:3001)
//! - `PROVIDER_TTL_SECS` - Provider registry entry lifetime (default: 600)
//! - `PROVIDER_MAX_ENTRIES` - Provider registry capacity (default: 10000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Backend API configuration
    pub api: BackendConfig,
    /// Provider registry cache tuning
    pub provider: ProviderCacheConfig,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Queue-platform backend API configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend API (e.g., https://api.example.com)
    pub base_url: Url,
}

/// Provider registry cache tuning.
///
/// The registry is a short-lived hand-off cache, not a system of record;
/// TTL plus max capacity bound its growth.
#[derive(Debug, Clone)]
pub struct ProviderCacheConfig {
    /// How long a stashed filter stays readable.
    pub ttl: Duration,
    /// Upper bound on cached entries per map.
    pub max_entries: u64,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub traces_sample_rate: f32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or("ADMIN_HOST", "127.0.0.1")?;
        let port = parse_env_or("ADMIN_PORT", "3001")?;
        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3001");

        Ok(Self {
            host,
            port,
            base_url,
            api: BackendConfig::from_env()?,
            provider: ProviderCacheConfig::from_env()?,
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = get_required_env("QUEUE_API_BASE_URL")?;
        let base_url = parse_api_base_url(&raw)?;
        Ok(Self { base_url })
    }
}

impl ProviderCacheConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let ttl_secs: u64 = parse_env_or("PROVIDER_TTL_SECS", "600")?;
        let max_entries: u64 = parse_env_or("PROVIDER_MAX_ENTRIES", "10000")?;

        Ok(Self {
            ttl: Duration::from_secs(ttl_secs),
            max_entries,
        })
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            traces_sample_rate: parse_env_or("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable with a default, reporting the variable name
/// on failure.
fn parse_env_or<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Validate the backend base URL: absolute http(s), no trailing slash needed.
fn parse_api_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("QUEUE_API_BASE_URL".to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "QUEUE_API_BASE_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            "QUEUE_API_BASE_URL".to_string(),
            "must have a host".to_string(),
        ));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_base_url_accepts_https() {
        let url = parse_api_base_url("https://api.example.com").unwrap();
        assert_eq!(url.host_str(), Some("api.example.com"));
    }

    #[test]
    fn test_parse_api_base_url_accepts_http_with_port() {
        let url = parse_api_base_url("http://localhost:8000").unwrap();
        assert_eq!(url.port(), Some(8000));
    }

    #[test]
    fn test_parse_api_base_url_rejects_relative() {
        assert!(parse_api_base_url("/api").is_err());
    }

    #[test]
    fn test_parse_api_base_url_rejects_other_schemes() {
        let err = parse_api_base_url("ftp://api.example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_socket_addr() {
        let config = AdminConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            api: BackendConfig {
                base_url: Url::parse("http://localhost:8000").unwrap(),
            },
            provider: ProviderCacheConfig {
                ttl: Duration::from_secs(600),
                max_entries: 10_000,
            },
            sentry: SentryConfig::default(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }
}
