use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use webhook_buffer::modules::webhooks::core::staleness::DEFAULT_STALE_AFTER;
use webhook_buffer::shared::infrastructure::payload_buffer::in_memory::InMemoryPayloadBuffer;
use webhook_buffer::shell::config::{AppConfig, DEFAULT_PORT};
use webhook_buffer::shell::http::router;
use webhook_buffer::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            return Err(err.into());
        }
    };

    let buffer = Arc::new(InMemoryPayloadBuffer::new(DEFAULT_STALE_AFTER));
    let stale_after = buffer.stale_after();
    let state = AppState::new(config.api_key, buffer);

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        stale_after_secs = stale_after.as_secs(),
        "Server is running on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received ctrl+C signal, shutting down");
}
