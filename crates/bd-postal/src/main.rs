use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bd_postal::{config::Config, datasets, web::WebServer};

#[derive(Parser)]
#[command(name = "bd-postal")]
#[command(version)]
#[command(about = "Read-only HTTP query service for Bangladesh postal geography")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Flat postal dataset path (overrides config file)
    #[arg(long, value_name = "FILE")]
    postal_data: Option<PathBuf>,

    /// Division tree dataset path (overrides config file)
    #[arg(long, value_name = "FILE")]
    divisions_data: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = format!("bd_postal={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bd-postal v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(postal_data) = cli.postal_data {
        config.dataset.postal_path = postal_data;
    }
    if let Some(divisions_data) = cli.divisions_data {
        config.dataset.divisions_path = divisions_data;
    }

    // Load both datasets before binding; a malformed or missing file is
    // fatal so the service never serves a partial dataset.
    let postal = datasets::load_postal_store(&config.dataset.postal_path)
        .context("failed to load the postal dataset")?;
    let divisions = datasets::load_division_store(&config.dataset.divisions_path)
        .context("failed to load the divisions dataset")?;

    let web_server = WebServer::new(config, Arc::new(postal), Arc::new(divisions))?;
    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );

    // Create a channel to signal when the server is ready or fails to bind
    let (server_ready_tx, server_ready_rx) = tokio::sync::oneshot::channel();

    let server_handle = tokio::spawn(async move {
        if let Err(e) = web_server.serve_with_signal(server_ready_tx).await {
            tracing::error!("Web server failed: {}", e);
        }
    });

    match server_ready_rx.await {
        Ok(Ok(())) => {
            info!("Web server is now listening");
        }
        Ok(Err(bind_error)) => {
            tracing::error!("Failed to bind web server: {}", bind_error);
            return Err(bind_error);
        }
        Err(_) => {
            tracing::error!("Web server task completed without signaling");
            return Err(anyhow::anyhow!("Web server failed to start"));
        }
    }

    // Block until shutdown
    server_handle.await?;

    Ok(())
}
