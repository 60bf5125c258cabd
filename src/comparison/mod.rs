//! # Comparison Module
//!
//! The external face-matching collaborator and everything derived from it:
//! the [`FaceMatcher`] trait seam, its HTTP provider, the enrolled reference
//! image store, and the [`ComparisonOutcome`] classification.

pub mod error;
pub mod matcher;
pub mod reference;
pub mod types;

pub use error::ComparisonError;
pub use matcher::{FaceMatchConfig, FaceMatcher, HttpFaceMatcher};
pub use reference::ReferenceImageStore;
pub use types::{ComparisonOutcome, FaceMatchCandidate};
