//! Ponte gateway server.
//!
//! Bridges the JSON client API to the legacy tagged-XML registry. Secrets
//! come from the environment (`PONTE_API_KEY`, `PONTE_ENCRYPTION_SECRET`,
//! `PONTE_LEGACY_URL`); ports and overrides from the command line.
//!
//! Usage:
//!   ponte-gateway --port 3000 --legacy-url http://localhost:3001

use anyhow::{Context, Result};
use clap::Parser;
use ponte_gateway::{build_router, GatewayConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ponte-gateway")]
#[command(about = "Protocol-bridging gateway to the legacy client registry")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Legacy registry base URL (overrides PONTE_LEGACY_URL)
    #[arg(long)]
    legacy_url: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let mut config = GatewayConfig::from_env();
    if let Some(legacy_url) = args.legacy_url {
        config.legacy_base_url = legacy_url;
    }

    info!("gateway starting, registry at {}", config.legacy_base_url);
    info!("  POST /api/clientes");
    info!("  GET  /api/clientes/{{id}}");

    let app = build_router(config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("failed to bind gateway port")?;
    info!("listening on port {}", args.port);

    axum::serve(listener, app)
        .await
        .context("gateway server failed")?;
    Ok(())
}
