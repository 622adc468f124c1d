use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{CatalogPayload, CATALOG_ROUTE, HEALTH_ROUTE, IMAGES_ROUTE},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod catalog;
mod config;

use app_state::AppState;
use catalog::load_catalog;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;
    let catalog = load_catalog(settings.catalog_path.as_deref()).map_err(|error| {
        let reason = format!("{error:#}");
        error!(
            catalog_path = ?settings.catalog_path,
            %reason,
            "failed to load catalog fixture; refusing to start"
        );
        error
    })?;

    if !settings.assets_dir.is_dir() {
        warn!(
            assets_dir = %settings.assets_dir.display(),
            "image directory does not exist; image requests will return 404"
        );
    }

    let app = build_router(Arc::new(AppState::new(catalog)))
        .nest_service(IMAGES_ROUTE, ServeDir::new(&settings.assets_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "catalog server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to install ctrl-c handler: {err}");
        std::future::pending::<()>().await;
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(healthz))
        .route(CATALOG_ROUTE, get(get_catalog))
        .fallback(not_found)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogPayload> {
    Json(state.catalog.as_ref().clone())
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
