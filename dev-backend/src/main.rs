use shared::MemoryExpenseStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod rest;

use config::DevServerConfig;
use rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DevServerConfig::from_env();

    info!("Setting up in-memory expense store");
    let state = AppState::new(MemoryExpenseStore::new());
    let app = rest::router(state);

    info!("Starting dev backend on {}", config.addr);
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
