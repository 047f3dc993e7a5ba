// src/main.rs
use anyhow::{Context, Result};
use peerlog::config::ServerConfig;
use peerlog::server::Acceptor;
use tokio::signal;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("peerlog=debug".parse()?),
        )
        .init();

    let config = ServerConfig::default();
    config.validate()?;

    let acceptor = Acceptor::bind(&config).context("failed to initialize listener")?;
    info!(addr = %config.listen_addr(), "server init successful");

    let handle = acceptor.shutdown_handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        handle.shutdown();
    });

    acceptor.run().await?;
    info!("server closed");

    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
