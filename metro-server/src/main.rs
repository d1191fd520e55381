//! Metro network HTTP server

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use metro_server::{AppState, ServerConfig, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "metro-server",
    version,
    about = "Route finding and passenger statistics API"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "metro.toml")]
    config: PathBuf,
    /// Address to listen on, overrides `bind` from the configuration
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("metro_server=info,metro_core=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_file(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let state = AppState::load(&config.data)?;
    let app = create_router(Arc::new(state), &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Server listening on http://{}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutting down");
}
