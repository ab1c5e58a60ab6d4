//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

/// Session-stored authentication state.
///
/// Holds the bearer token issued by the backend at login; every dataset
/// fetch the dashboard performs is authenticated with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Backend-issued bearer token.
    pub token: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the backend auth session.
    pub const AUTH_SESSION: &str = "auth_session";
}
