//! # Web API Application State
//!
//! Shared state for the web API. The broker connection manager is passed in
//! explicitly (dependency injection over module-level singletons) so the
//! publisher and health handlers read the same single-owner snapshot.

use std::sync::Arc;

use crate::comparison::{FaceMatcher, ReferenceImageStore};
use crate::messaging::{BrokerConnectionManager, NotificationPublisher};

/// Shared application state for the web API
#[derive(Clone)]
pub struct AppState {
    /// Broker connection lifecycle owner
    pub broker: Arc<BrokerConnectionManager>,
    /// Outcome notification publisher
    pub publisher: Arc<NotificationPublisher>,
    /// External face-matching collaborator
    pub face_matcher: Arc<dyn FaceMatcher>,
    /// Enrolled reference image
    pub reference_store: Arc<ReferenceImageStore>,
    /// Minimum confidence score for a positive match
    pub similarity_threshold: f32,
}

impl AppState {
    /// Assemble application state from its collaborators
    pub fn new(
        broker: Arc<BrokerConnectionManager>,
        publisher: Arc<NotificationPublisher>,
        face_matcher: Arc<dyn FaceMatcher>,
        reference_store: Arc<ReferenceImageStore>,
        similarity_threshold: f32,
    ) -> Self {
        Self {
            broker,
            publisher,
            face_matcher,
            reference_store,
            similarity_threshold,
        }
    }
}
