// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use legiscan_mcp::{build_registry, CliArgs, McpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legiscan_mcp=info,legiscan_sdk=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let config = match ServerConfig::resolve(CliArgs::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        base_url = %config.base_url,
        timeout = ?config.timeout,
        "LegiScan MCP server starting"
    );

    let client = config.client().context("Failed to build LegiScan client")?;
    let registry = build_registry(&client);
    tracing::info!("Registered {} tools", registry.len());

    let mut server = McpServer::new(registry);

    server.serve_stdio(shutdown_signal()).await?;

    // A pending blocking read on stdin would keep the runtime from exiting
    std::process::exit(0);
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
