//! Legacy client registry server.
//!
//! Runs the tagged-XML operation endpoint the gateway bridges to. State is
//! in-memory only; restarting the process empties the registry.
//!
//! Usage:
//!   ponte-legado --port 3001

use anyhow::{Context, Result};
use clap::Parser;
use ponte_legado::{build_router, ClientStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ponte-legado")]
#[command(about = "Legacy client registry (tagged-XML endpoint)")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

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

    let app = build_router(ClientStore::new());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("failed to bind registry port")?;
    info!("legacy registry listening on port {}", args.port);
    info!("  POST /processar      (XML operation endpoint)");
    info!("  GET  /clientes/{{id}}  (JSON inspection)");

    axum::serve(listener, app)
        .await
        .context("registry server failed")?;
    Ok(())
}
