//! # Web API Module
//!
//! Axum-based HTTP surface for the gateway.
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions
//! - [`handlers`] - Request handlers (comparison orchestration, health)
//! - [`state`] - Shared application state
//! - [`errors`] - API error types and their HTTP response conversions

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use state::AppState;

/// Maximum accepted request body size (base64 image payloads)
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main Axum application with all routes and middleware.
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::comparison_routes())
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app_state)
}
