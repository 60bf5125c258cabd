//! # Comparison Outcome Types
//!
//! Classification of a face-comparison result. Immutable once produced;
//! drives both the HTTP response and which notification template is sent.

use serde::{Deserialize, Serialize};

/// One candidate match returned by the face-matching service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceMatchCandidate {
    /// Confidence score that the candidate and the source are the same identity
    pub similarity: f32,
}

/// Outcome of one comparison request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// At least one candidate met the similarity threshold
    Matched { similarity: f32, threshold: f32 },
    /// The comparison ran but no candidate met the threshold
    NotMatched,
    /// The comparison could not be completed
    Failed { reason: String },
}

impl ComparisonOutcome {
    /// Classify a candidate list. Similarity is taken from the first
    /// candidate; an empty list means no match.
    pub fn from_candidates(candidates: &[FaceMatchCandidate], threshold: f32) -> Self {
        match candidates.first() {
            Some(candidate) => Self::Matched {
                similarity: candidate.similarity,
                threshold,
            },
            None => Self::NotMatched,
        }
    }

    /// Create a failed outcome
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Only a positive match grants access; not-matched and failed are both
    /// denials for notification purposes.
    pub fn grants_access(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}
