//! # Reference Image Store
//!
//! Reads the single enrolled target image from a fixed filesystem path.
//! Read-only configuration data: loaded per request, never part of request
//! state. A read failure is request-fatal (it classifies the request as a
//! failed comparison) but never process-fatal.

use std::path::PathBuf;

use crate::comparison::error::ComparisonError;

/// Loads the enrolled reference image from disk
#[derive(Debug, Clone)]
pub struct ReferenceImageStore {
    path: PathBuf,
}

impl ReferenceImageStore {
    /// Create a store for the given image path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured image path
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the reference image bytes
    pub async fn load(&self) -> Result<Vec<u8>, ComparisonError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| ComparisonError::reference(self.path.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_returns_image_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"jpeg-bytes").unwrap();

        let store = ReferenceImageStore::new(file.path());
        let bytes = store.load().await.unwrap();
        assert_eq!(bytes, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_missing_file_maps_to_reference_error() {
        let store = ReferenceImageStore::new("/nonexistent/facegate/target.jpg");
        let error = store.load().await.unwrap_err();
        assert!(matches!(error, ComparisonError::Reference { .. }));
        assert!(error.to_string().contains("/nonexistent/facegate/target.jpg"));
    }
}
