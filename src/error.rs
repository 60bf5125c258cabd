//! # Gateway Error Types
//!
//! Top-level error handling for gateway startup and lifecycle operations.
//! Request-path errors stay in their own domains: comparison failures map to
//! HTTP responses in the web layer, and broker errors are logged and isolated
//! inside the messaging layer — neither propagates through this type.

use thiserror::Error;

use crate::comparison::ComparisonError;
use crate::config::ConfigError;
use crate::messaging::MessagingError;

/// Gateway operation result type
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can surface during gateway startup and shutdown
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Messaging error: {0}")]
    Messaging(#[from] MessagingError),

    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    #[error("Web server error: {message}")]
    WebServer { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// Create a web server error
    pub fn web_server(message: impl Into<String>) -> Self {
        Self::WebServer {
            message: message.into(),
        }
    }
}
