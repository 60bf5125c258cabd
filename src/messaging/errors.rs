//! # Messaging Error Types
//!
//! Structured error handling for the messaging system using thiserror.
//! None of these errors cross the messaging boundary into the request path:
//! connection errors feed the retry loop, publish errors are logged and
//! discarded by the publisher.

use thiserror::Error;

/// Messaging error types
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Broker connection failed: {message}")]
    Connection { message: String },

    #[error("Channel creation failed: {message}")]
    Channel { message: String },

    #[error("Queue declaration failed: {queue_name}: {message}")]
    QueueDeclare { queue_name: String, message: String },

    #[error("Publish failed: {queue_name}: {message}")]
    Publish { queue_name: String, message: String },

    #[error("Notification serialization failed: {message}")]
    Serialization { message: String },
}

impl MessagingError {
    /// Create a broker connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a channel creation error
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }

    /// Create a queue declaration error
    pub fn queue_declare(queue_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueueDeclare {
            queue_name: queue_name.into(),
            message: message.into(),
        }
    }

    /// Create a publish error
    pub fn publish(queue_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Publish {
            queue_name: queue_name.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_queue_name() {
        let error = MessagingError::publish("notifications", "channel closed");
        assert!(error.to_string().contains("notifications"));
        assert!(error.to_string().contains("channel closed"));
    }

    #[test]
    fn test_constructor_helpers() {
        assert!(matches!(
            MessagingError::connection("refused"),
            MessagingError::Connection { .. }
        ));
        assert!(matches!(
            MessagingError::queue_declare("q", "denied"),
            MessagingError::QueueDeclare { .. }
        ));
    }
}
