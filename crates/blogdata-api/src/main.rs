//! Blog data API server entry point.

use std::error::Error;
use std::sync::Arc;

use blogdata_api::config::ServerConfig;
use blogdata_api::state::AppState;
use blogdata_content_store::FsContentStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting blog data API server");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    if !config.content_dir.is_dir() {
        tracing::warn!(
            content_dir = %config.content_dir.display(),
            "content directory does not exist; requests will fail until it is created"
        );
    }

    let content_store = Arc::new(FsContentStore::new(config.content_dir.clone()));
    let app = blogdata_api::app(AppState::new(content_store));

    tracing::info!(content_dir = %config.content_dir.display(), "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
