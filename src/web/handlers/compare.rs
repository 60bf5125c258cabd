//! # Comparison Handler
//!
//! The request-outcome pipeline: validate, load the reference image, invoke
//! the face-matching collaborator, classify, notify, respond. Terminal in
//! every branch. The notification publish is awaited for deterministic
//! ordering but cannot change the response — only validation and comparison
//! failures reach the caller.

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::comparison::ComparisonOutcome;
use crate::web::errors::ApiError;
use crate::web::state::AppState;

/// Comparison request body
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Base64-encoded source image
    pub base64: Option<String>,
    /// Caller-supplied correlation id
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
}

/// Successful comparison response
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    #[serde(rename = "match")]
    pub matched: bool,
    /// Similarity of the best candidate; 0 when no match
    pub similarity: f32,
}

/// Compare an inbound face against the enrolled target: POST /compare
pub async fn compare_faces(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let correlation_id = request
        .request_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // Validation rejections terminate before any comparison or notification
    let encoded = match request.base64 {
        Some(encoded) if !encoded.is_empty() => encoded,
        _ => {
            debug!(correlation_id = %correlation_id, "Rejecting request without source image");
            return Err(ApiError::bad_request(
                "a base64-encoded source image is required",
            ));
        }
    };

    let source = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
        debug!(correlation_id = %correlation_id, error = %e, "Rejecting undecodable source image");
        ApiError::bad_request(format!("source image is not valid base64: {e}"))
    })?;

    let outcome = run_comparison(&state, &source, &correlation_id).await;

    // Awaited for ordering; its contract guarantees it cannot fail
    state.publisher.publish(&outcome).await;

    match outcome {
        ComparisonOutcome::Matched { similarity, .. } => {
            info!(
                correlation_id = %correlation_id,
                similarity = similarity,
                "Comparison complete: match"
            );
            Ok(Json(CompareResponse {
                matched: true,
                similarity,
            }))
        }
        ComparisonOutcome::NotMatched => {
            info!(correlation_id = %correlation_id, "Comparison complete: no match");
            Ok(Json(CompareResponse {
                matched: false,
                similarity: 0.0,
            }))
        }
        ComparisonOutcome::Failed { reason } => {
            warn!(correlation_id = %correlation_id, reason = %reason, "Comparison failed");
            Err(ApiError::comparison_failed(reason))
        }
    }
}

/// Load the reference image and invoke the face-matching collaborator.
///
/// Always produces an outcome: collaborator errors (including a missing
/// reference image) classify as `Failed` rather than propagating.
async fn run_comparison(
    state: &AppState,
    source: &[u8],
    correlation_id: &str,
) -> ComparisonOutcome {
    let target = match state.reference_store.load().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(correlation_id = %correlation_id, error = %e, "Reference image load failed");
            return ComparisonOutcome::failed(e.to_string());
        }
    };

    debug!(
        correlation_id = %correlation_id,
        source_bytes = source.len(),
        target_bytes = target.len(),
        "Running face comparison"
    );

    match state
        .face_matcher
        .compare_faces(source, &target, state.similarity_threshold)
        .await
    {
        Ok(candidates) => {
            ComparisonOutcome::from_candidates(&candidates, state.similarity_threshold)
        }
        Err(e) => ComparisonOutcome::failed(e.to_string()),
    }
}
