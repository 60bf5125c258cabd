//! # Health Check Handler
//!
//! Basic health endpoint for monitoring. Reports broker connectivity as a
//! snapshot; a disconnected broker is informational, not a failure — the
//! comparison path does not depend on notification infrastructure.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::web::state::AppState;

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    broker_connected: bool,
    timestamp: String,
}

/// Basic health check endpoint: GET /health
pub async fn basic_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        broker_connected: state.broker.is_connected().await,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
