//! Stemforge server binary.

use std::net::IpAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use stemforge_server::{router, Config};

/// Placeholder stem generation service
#[derive(Parser)]
#[command(name = "stemforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address (overrides STEMFORGE_BIND)
    #[arg(long)]
    bind: Option<IpAddr>,

    /// Listen port (overrides STEMFORGE_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (mut config, report) = Config::from_env().context("invalid environment configuration")?;
    for name in &report.present {
        info!(var = name, "environment variable set");
    }
    for name in &report.defaulted {
        info!(var = name, "environment variable unset, using default");
    }

    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!(%addr, "stemforge listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
