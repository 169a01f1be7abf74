use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Any origin may call the API.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Seeded state plus router for the given configuration.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::seeded(&cfg.auth);
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.server.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

/// Public entry: load configuration, build the app and run the HTTP server.
pub async fn run() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with(cfg).await
}

pub async fn run_with(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg);
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, "brewhouse server listening");
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
