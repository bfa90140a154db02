use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use usage_service::{
    config::AppConfig,
    http::{self, AppState},
    metrics_server, observability, seed,
    store::SqliteReadingStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;

    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    let store = SqliteReadingStore::open().await?;
    if let Some(path) = &cfg.store.seed_path {
        let readings = seed::load_seed_file(path)?;
        store.seed(&readings).await?;
        tracing::info!(count = readings.len(), path = %path.display(), "seeded meter readings");
    }

    let state = AppState::new(Arc::new(store));
    let app = http::router(state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server.bind_addr '{}': {e}", cfg.server.bind_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "energy usage service listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
