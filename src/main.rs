//! Iris classifier inference service.
//!
//! Startup ordering: parse flags → load config → init logging → bind the
//! listener → spawn the one-time model load → serve. The listener accepts
//! connections (liveness included) before the load completes; readiness
//! flips only once the model is published.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use iris_serve::config::loader::load_or_default;
use iris_serve::http::{AppState, HttpServer};
use iris_serve::lifecycle::{startup, Shutdown};
use iris_serve::observability::{logging, metrics};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "iris-serve", about = "Iris classifier inference service")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the model artifact path from the config.
    #[arg(long)]
    model: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model.path = model;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        model_path = %config.model.path.display(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let state = AppState::new();
    tokio::spawn(startup::load_model(state.clone(), config.model.path.clone()));

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown.clone().listen_for_ctrl_c());

    let server = HttpServer::new(state);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
