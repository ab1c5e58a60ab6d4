//! Integration tests for QueueBoard.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the backend API (or a stub of it), then the admin server
//! cargo run -p queueboard-admin
//!
//! # Run integration tests
//! cargo test -p queueboard-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a live admin server over HTTP; they are `#[ignore]`d
//! by default so `cargo test` stays self-contained.

use reqwest::Client;

use queueboard_admin::middleware::session::SESSION_COOKIE_NAME;

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create a cookie-keeping HTTP client that does not follow redirects.
///
/// Redirect targets are assertions in these tests, so the client must hand
/// them back rather than chase them.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in against the admin server, populating the client's session cookie.
///
/// Credentials come from `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD`.
///
/// # Panics
///
/// Panics if the login request fails or is rejected.
pub async fn login(client: &Client) {
    let email =
        std::env::var("ADMIN_TEST_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password = std::env::var("ADMIN_TEST_PASSWORD").unwrap_or_else(|_| "password".to_string());

    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .form(&[("email", email.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("Failed to log in");

    assert!(
        resp.status().is_redirection(),
        "login rejected: {}",
        resp.status()
    );

    let got_session_cookie = resp
        .cookies()
        .any(|cookie| cookie.name() == SESSION_COOKIE_NAME);
    assert!(got_session_cookie, "login did not set a session cookie");
}
