mod application;
mod backend;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::MockBackend;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::{SessionFlag, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobboard API v{}", env!("CARGO_PKG_VERSION"));

    // Static catalog — the only job data this build serves
    let catalog = Arc::new(Catalog::seeded());
    info!("Job catalog seeded ({} postings)", catalog.all().len());

    // Session store; pick up the persisted flag from a prior run
    let sessions = SessionStore::new(SessionFlag::new(&config.session_flag_path));
    if sessions.restore_persisted().await {
        info!("Persisted session flag found; demo identity restored");
    }

    // Mock transport standing in for the real backend
    let backend = Arc::new(MockBackend::new(
        Duration::from_millis(config.mock_login_delay_ms),
        Duration::from_millis(config.mock_submit_delay_ms),
    ));

    let state = AppState {
        catalog,
        sessions,
        backend,
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: tighten CORS in production
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
