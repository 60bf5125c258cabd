//! # Tracing Module
//!
//! Environment-aware console logging using the tracing ecosystem.
//! Designed for containerized deployments where logs go to stdout/stderr.
//!
//! Log level resolution order: `LOG_LEVEL`, then `RUST_LOG`, then an
//! environment-based default (`debug` outside production, `info` in it).

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging for the gateway.
///
/// Safe to call more than once; only the first call installs the global
/// subscriber.
pub fn init_structured_logging() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        // TTY detection keeps ANSI colors out of redirected container logs
        let use_ansi = IsTerminal::is_terminal(&std::io::stdout());

        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(use_ansi);

        if tracing_subscriber::registry()
            .with(EnvFilter::new(&log_level))
            .with(console_layer)
            .try_init()
            .is_err()
        {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("GATEWAY_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment variables or environment defaults
fn get_log_level(environment: &str) -> String {
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        return level.to_lowercase();
    }

    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}
