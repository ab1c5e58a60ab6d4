//! Queue-platform backend API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`, JSON bodies wrapped in a `data` envelope
//! - The backend is the source of truth - no local sync, direct API calls
//! - Dataset reads are bearer-token authenticated per request
//!
//! # Example
//!
//! ```rust,ignore
//! use queueboard_admin::backend::BackendClient;
//!
//! let client = BackendClient::new(&config.api);
//!
//! let token = client.login("admin@example.com", "secret").await?;
//! let shops = client.shops_with_trashed(&token).await?;
//! ```

mod client;

pub use client::BackendClient;

use thiserror::Error;

/// Errors that can occur when interacting with the backend API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body failed schema validation.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - maintenance");

        let err = BackendError::Parse("missing field `id`".to_string());
        assert_eq!(err.to_string(), "Parse error: missing field `id`");
    }
}
