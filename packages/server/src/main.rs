use std::sync::Arc;

use anyhow::Context;
use common::backend::memory::InMemoryBackend;
use tracing::{Level, info};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(
        max_file_size = config.upload.max_file_size,
        tmp_root = %config.upload.tmp_root().display(),
        "Upload handling configured"
    );

    let state = AppState {
        backend: Arc::new(InMemoryBackend::new()),
        config,
    };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
