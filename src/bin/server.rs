//! # Facegate Server
//!
//! Production binary for the face-comparison access gateway.
//!
//! ## Usage
//!
//! ```bash
//! # Run with configuration from the environment (or a .env file)
//! cargo run --bin facegate-server
//! ```

use tokio::signal;
use tracing::info;

use facegate::bootstrap::bootstrap;
use facegate::config::GatewayConfig;
use facegate::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    logging::init_structured_logging();

    info!("🚀 Starting Facegate gateway...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));

    let config = GatewayConfig::from_env()?;

    info!("   Broker: {}", config.broker.connection_url_redacted());
    info!("   Notification queue: {}", config.broker.queue_name);
    info!(
        "   Reference image: {}",
        config.reference_image_path.display()
    );

    let handle = bootstrap(config).await?;

    info!("🎉 Gateway started successfully!");
    info!("   Listening on: {}", handle.bind_address);
    info!("   Press Ctrl+C to shutdown gracefully");

    // Wait for shutdown signal
    shutdown_signal().await;

    info!("🛑 Shutdown signal received, initiating graceful shutdown...");

    handle.stop().await;

    info!("👋 Gateway shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
