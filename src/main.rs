//! Mars Rover Service
//!
//! A small HTTP service that drives a grid rover with command strings.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request     ┌──────────────────────────────────────────────┐
//!     ───────────────────┼─▶ http server ──▶ rover handler              │
//!                        │   (middleware)        │                      │
//!                        │                       ▼                      │
//!                        │               Rover::execute                 │
//!                        │                       │                      │
//!                        │                       ▼                      │
//!     Client Response    │               transition(State, cmd)         │
//!     ◀──────────────────┼─── {"result": "(x, y) HEADING"}              │
//!                        │                                              │
//!                        │   config · observability · lifecycle         │
//!                        └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use rover_service::config::{apply_port_override, load_config, validate_config, ConfigError};
use rover_service::observability::{logging, metrics};
use rover_service::{HttpServer, ServiceConfig, Shutdown};

#[derive(Parser)]
#[command(name = "rover-service")]
#[command(about = "HTTP API for driving a grid rover", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides the config file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Ok(port) = std::env::var("PORT") {
        apply_port_override(&mut config, &port)?;
    }
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability.log_level);

    tracing::info!("rover-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_path = %config.api.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated above.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");
    tracing::info!(
        "Try: curl -X POST http://localhost:{}{} -H 'Content-Type: application/json' -d '{{\"state\": {{\"x\": 0, \"y\": 0, \"direction\": \"NORTH\"}}, \"command\": \"FFF\"}}'",
        local_addr.port(),
        config.api.path
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
