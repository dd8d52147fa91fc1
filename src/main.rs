use clap::Parser;
use manual_assistant::api;
use manual_assistant::config::Config;
use manual_assistant::search::{MatchPolicy, SimilarityIndex};
use manual_assistant::sections::read_sections;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Loading manual from {}", config.document.display());

    // 1. Sections and index are built once; a failure here aborts startup.
    let sections = read_sections(&config.document)?;
    let index = Arc::new(SimilarityIndex::build(sections)?);
    let policy = MatchPolicy::new(config.min_score);

    // 2. HTTP Router:
    let app = api::router(index, policy);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
