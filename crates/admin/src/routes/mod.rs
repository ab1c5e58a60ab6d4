//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Redirect to the dashboard
//! GET  /health          - Health check
//!
//! # Auth
//! POST /auth/login      - Exchange credentials for a backend token
//! POST /auth/logout     - Drop the session token
//!
//! # Dashboard
//! GET  /dashboard       - Aggregated shops/customers/queues bundle (JSON)
//! POST /dashboard       - Selection action (stash filter, redirect)
//! ```

pub mod auth;
pub mod dashboard;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/dashboard", get(dashboard::show).post(dashboard::select))
        .nest("/auth", auth_routes())
}
