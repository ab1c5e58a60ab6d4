//! Authentication middleware and extractors.
//!
//! Provides an extractor for requiring a logged-in admin session in route
//! handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::models::AuthSession;
use crate::models::session::keys;

/// Extractor that requires an authenticated session.
///
/// The admin panel is consumed by a separate frontend, so a missing or
/// expired session is always a 401, never a login-page redirect.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(auth): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("token: {}", auth.token)
/// }
/// ```
pub struct RequireAuth(pub AuthSession);

/// Rejection returned when no authenticated session is present.
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "Not logged in").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Unauthenticated;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // SessionManagerLayer stashes the session in request extensions
        let session = parts.extensions.get::<Session>().ok_or(Unauthenticated)?;

        let auth: AuthSession = session
            .get(keys::AUTH_SESSION)
            .await
            .ok()
            .flatten()
            .ok_or(Unauthenticated)?;

        Ok(Self(auth))
    }
}

/// Helper to store the auth session after a successful login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_auth_session(
    session: &Session,
    auth: &AuthSession,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::AUTH_SESSION, auth).await
}

/// Helper to clear the auth session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_auth_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<AuthSession>(keys::AUTH_SESSION).await?;
    Ok(())
}
