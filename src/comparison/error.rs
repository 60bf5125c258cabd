//! # Comparison Error Types
//!
//! Failures of the external face-matching call and the reference image read.
//! Both are request-fatal (the request classifies as `Failed`) but never
//! process-fatal.

use thiserror::Error;

/// Errors from the comparison collaborators
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("Face-matching request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Face-matching service error: {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Reference image unavailable: {path}: {message}")]
    Reference { path: String, message: String },
}

impl ComparisonError {
    /// Create an error from a non-success service response
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a reference image error
    pub fn reference(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Reference {
            path: path.into(),
            message: message.into(),
        }
    }
}
