//! QueueBoard Admin - Internal administration dashboard.
//!
//! This binary serves the admin panel on port 3001.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON view-model to the admin frontend
//! - Queue-platform backend REST API as the source of truth (no local
//!   database)
//! - In-memory sessions carrying the backend bearer token
//! - Provider registry (TTL cache) handing selected entities off to the
//!   detail pages

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use sentry::integrations::tracing as sentry_tracing;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use queueboard_admin::config::AdminConfig;
use queueboard_admin::{middleware, routes, state::AppState};

#[tokio::main]
async fn main() {
    let config = AdminConfig::from_env().expect("Failed to load configuration");

    // Sentry must come up before the tracing subscriber so its layer can hook in
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let state = AppState::new(config.clone());
    let app = build_app(state, &config);

    let addr = config.socket_addr();
    tracing::info!("admin panel listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Assemble the full router with sessions, tracing, and Sentry layers.
fn build_app(state: AppState, config: &AdminConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(middleware::create_session_layer(config))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Sentry layers sit outermost for full request coverage
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Initialize Sentry and return the guard that must stay alive for the
/// process lifetime. No-op without a configured DSN.
fn init_sentry(config: &AdminConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry.dsn.clone()?;

    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config.sentry.environment.clone().map(Into::into),
        traces_sample_rate: config.sentry.traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    };

    Some(sentry::init((dsn, options)))
}

/// Set up the tracing subscriber with env filtering and Sentry forwarding.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "queueboard_admin=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_filter))
        .init();
}

/// Map tracing levels onto Sentry event types.
fn sentry_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
        _ => sentry_tracing::EventFilter::Breadcrumb,
    }
}

/// Liveness health check endpoint. Does not touch the backend.
async fn health() -> &'static str {
    "ok"
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install signal handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
