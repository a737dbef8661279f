// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::donki_repository::DonkiRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, list_events};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_server_config()?;

    // Upstream adapter (infrastructure layer)
    let repository = Arc::new(DonkiRepository::new(
        config.donki.base_url.clone(),
        Duration::from_secs(config.donki.cache_ttl_secs),
    ));

    // Pipeline use case (application layer)
    let dashboard_service = DashboardService::new(repository);

    let state = Arc::new(AppState {
        dashboard_service,
        default_api_key: config.donki.default_api_key.clone(),
    });

    // Router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/events", get(list_events))
        .route("/dashboards/:code", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!(%addr, "starting donki-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
