//! # Web API Route Definitions
//!
//! Defines the HTTP route structure for the gateway.

use axum::routing::{get, post};
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Comparison routes
///
/// - `POST /compare` - Compare an inbound face against the enrolled target
pub fn comparison_routes() -> Router<AppState> {
    Router::new().route("/compare", post(handlers::compare::compare_faces))
}

/// Health routes
///
/// - `GET /health` - Basic health check with broker connectivity snapshot
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::basic_health))
}
