mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod state;
mod store;
mod validation;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use config::Config;
use state::AppState;
use store::PasteStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("pastes-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = match &config.seed_file {
        Some(path) => seed::load(path)?,
        None => PasteStore::new(),
    };

    let address = config.bind_address();
    let app = app::build_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("pastes-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
