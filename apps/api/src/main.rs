mod config;
mod db;
mod errors;
mod generation;
mod models;
mod projects;
mod routes;
mod state;
mod status;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::projects::{PgProjectStore, ProjectStore};
use crate::routes::{build_router, cors_layer};
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

    info!("Starting TinkerLab API v{}", env!("CARGO_PKG_VERSION"));

    let projects = build_project_store(&config);

    let state = AppState::new(projects);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The project store is optional: a missing or unusable `DATABASE_URL`
/// disables the project routes rather than stopping the service.
fn build_project_store(config: &Config) -> Option<Arc<dyn ProjectStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set - project endpoints disabled");
        return None;
    };

    match create_pool(database_url, config.database_max_connections) {
        Ok(pool) => {
            info!("Project store initialized");
            Some(Arc::new(PgProjectStore::new(pool)))
        }
        Err(e) => {
            warn!("Invalid DATABASE_URL ({e}) - project endpoints disabled");
            None
        }
    }
}
