//! Auth route handlers.
//!
//! Logging in exchanges the operator's credentials with the backend for a
//! bearer token, which then lives in the session and authenticates every
//! dataset fetch.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::backend::BackendError;
use crate::error::{AppError, Result};
use crate::middleware::auth::{clear_auth_session, set_auth_session};
use crate::models::AuthSession;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login action: exchange credentials for a backend token.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let token = match state.backend().login(&form.email, &form.password).await {
        Ok(token) => token,
        Err(BackendError::Api {
            status: 401 | 422, ..
        }) => {
            return Err(AppError::Unauthorized("invalid credentials".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    set_auth_session(&session, &AuthSession { token }).await?;

    Ok(Redirect::to("/dashboard"))
}

/// Logout action: drop the session token.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_auth_session(&session).await?;
    Ok(Redirect::to("/"))
}
