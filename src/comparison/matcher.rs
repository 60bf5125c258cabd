//! # Face Matcher
//!
//! Trait seam for the external face-matching service, with an HTTP provider.
//!
//! The service is treated as an opaque remote call with network-class
//! failure modes: given source bytes, target bytes, and a similarity
//! threshold, it returns a list of match candidates or an error. The trait
//! lets tests substitute a stub collaborator.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comparison::error::ComparisonError;
use crate::comparison::types::FaceMatchCandidate;

/// External face-matching service abstraction
#[async_trait]
pub trait FaceMatcher: Send + Sync {
    /// Compare a source face against a target face.
    ///
    /// Returns the candidate matches meeting `similarity_threshold`, best
    /// first; an empty list means the faces did not match.
    async fn compare_faces(
        &self,
        source: &[u8],
        target: &[u8],
        similarity_threshold: f32,
    ) -> Result<Vec<FaceMatchCandidate>, ComparisonError>;
}

/// Configuration for the face-matching service client
#[derive(Debug, Clone)]
pub struct FaceMatchConfig {
    /// Base URL of the face-matching service
    pub endpoint: String,
    /// Service credential, sent as `x-api-key`
    pub api_key: String,
    /// Service region, sent as `x-region`
    pub region: String,
}

impl Default for FaceMatchConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9000".to_string(),
            api_key: String::new(),
            region: "us-east-1".to_string(),
        }
    }
}

/// HTTP provider for the face-matching service.
///
/// The client carries no request timeout: a hung comparison call hangs its
/// request, matching the gateway's upstream contract.
pub struct HttpFaceMatcher {
    client: Client,
    config: FaceMatchConfig,
}

impl HttpFaceMatcher {
    /// Create a matcher from configuration
    pub fn new(config: FaceMatchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn compare_url(&self) -> String {
        format!(
            "{}/compare-faces",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

/// Wire request to the face-matching service
#[derive(Debug, Serialize)]
struct CompareFacesRequest {
    #[serde(rename = "sourceImage")]
    source_image: String,
    #[serde(rename = "targetImage")]
    target_image: String,
    #[serde(rename = "similarityThreshold")]
    similarity_threshold: f32,
}

/// Wire response from the face-matching service
#[derive(Debug, Deserialize)]
struct CompareFacesResponse {
    #[serde(rename = "faceMatches", default)]
    face_matches: Vec<FaceMatchCandidate>,
}

#[async_trait]
impl FaceMatcher for HttpFaceMatcher {
    async fn compare_faces(
        &self,
        source: &[u8],
        target: &[u8],
        similarity_threshold: f32,
    ) -> Result<Vec<FaceMatchCandidate>, ComparisonError> {
        let request = CompareFacesRequest {
            source_image: STANDARD.encode(source),
            target_image: STANDARD.encode(target),
            similarity_threshold,
        };

        debug!(
            endpoint = %self.config.endpoint,
            region = %self.config.region,
            source_bytes = source.len(),
            target_bytes = target.len(),
            "Invoking face-matching service"
        );

        let response = self
            .client
            .post(self.compare_url())
            .header("x-api-key", &self.config.api_key)
            .header("x-region", &self.config.region)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(ComparisonError::api(status.as_u16(), message));
        }

        let body: CompareFacesResponse = response.json().await?;
        Ok(body.face_matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = CompareFacesRequest {
            source_image: STANDARD.encode(b"source"),
            target_image: STANDARD.encode(b"target"),
            similarity_threshold: 80.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("sourceImage").is_some());
        assert!(value.get("targetImage").is_some());
        assert_eq!(value["similarityThreshold"], 80.0);
    }

    #[test]
    fn test_response_parses_candidates() {
        let body = r#"{"faceMatches": [{"similarity": 97.3}, {"similarity": 81.0}]}"#;
        let response: CompareFacesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.face_matches.len(), 2);
        assert_eq!(response.face_matches[0].similarity, 97.3);
    }

    #[test]
    fn test_response_defaults_to_no_candidates() {
        // Services omit the list entirely when nothing matched
        let response: CompareFacesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.face_matches.is_empty());
    }

    #[test]
    fn test_compare_url_normalizes_trailing_slash() {
        let matcher = HttpFaceMatcher::new(FaceMatchConfig {
            endpoint: "http://faces.example.com/".to_string(),
            ..Default::default()
        });
        assert_eq!(
            matcher.compare_url(),
            "http://faces.example.com/compare-faces"
        );
    }
}
