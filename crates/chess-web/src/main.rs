//! Chess web server binary.

use anyhow::Context;
use chess_web::config::ServerConfig;
use chess_web::{app, AppState};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-web")]
#[command(about = "Play chess against a friend in the browser")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value_os_t = ServerConfig::default_path())]
    config: PathBuf,
    /// Address to bind, overriding the config file
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overriding the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let state = AppState::new(&config);
    let router = app(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
