//! # Notification Payload
//!
//! The value object published to the notification queue. Derived
//! deterministically from a comparison outcome: only a positive match yields
//! the "granted" template; not-matched and failed comparisons both yield
//! "denied". Serialized to JSON for transmission and then discarded.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonOutcome;

/// Notification message sent to the durable queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// ISO-8601 timestamp of when the outcome was classified
    pub timestamp: String,
}

impl Notification {
    /// Build the canonical notification for a comparison outcome.
    pub fn for_outcome(outcome: &ComparisonOutcome) -> Self {
        if outcome.grants_access() {
            Self::granted()
        } else {
            Self::denied()
        }
    }

    /// Access-granted template
    pub fn granted() -> Self {
        Self::from_template("Access Granted", "Welcome home")
    }

    /// Access-denied template
    pub fn denied() -> Self {
        Self::from_template("Access Denied", "Unrecognized entry attempt")
    }

    fn from_template(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
