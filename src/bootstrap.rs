//! # Gateway Bootstrap
//!
//! Process lifecycle: wire the collaborators together, start the broker
//! connect loop, and serve HTTP.
//!
//! HTTP readiness never waits on the broker — the connect loop runs in the
//! background and the server starts accepting requests immediately, so
//! comparisons work even when the broker is unreachable.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use crate::comparison::{FaceMatcher, HttpFaceMatcher, ReferenceImageStore};
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::messaging::{BrokerConnectionManager, NotificationPublisher};
use crate::web::{self, state::AppState};

/// Handle for lifecycle management of a running gateway
pub struct GatewaySystemHandle {
    /// Broker connection lifecycle owner
    pub broker: Arc<BrokerConnectionManager>,
    /// Address the HTTP server is bound to
    pub bind_address: SocketAddr,
    server_task: tokio::task::JoinHandle<()>,
}

impl GatewaySystemHandle {
    /// Stop the gateway: close the broker connection (stopping a
    /// still-retrying connect loop) and stop serving HTTP.
    ///
    /// Idempotent; no in-flight request draining is performed.
    pub async fn stop(&self) {
        info!("🛑 Gateway shutdown requested");
        self.broker.shutdown().await;
        self.server_task.abort();
        info!("✅ Gateway stopped");
    }
}

/// Bootstrap the gateway from configuration.
///
/// Starts the broker connect loop in the background, binds the HTTP
/// listener, and spawns the server. Returns once the gateway is accepting
/// requests.
pub async fn bootstrap(config: GatewayConfig) -> GatewayResult<GatewaySystemHandle> {
    let broker = Arc::new(BrokerConnectionManager::new(config.broker.clone()));
    broker.spawn_connect_loop();

    let publisher = Arc::new(NotificationPublisher::new(
        Arc::clone(&broker),
        config.broker.queue_name.clone(),
    ));
    let face_matcher: Arc<dyn FaceMatcher> =
        Arc::new(HttpFaceMatcher::new(config.face_match.clone()));
    let reference_store = Arc::new(ReferenceImageStore::new(config.reference_image_path.clone()));

    let app_state = AppState::new(
        Arc::clone(&broker),
        publisher,
        face_matcher,
        reference_store,
        config.similarity_threshold,
    );
    let app = web::create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            GatewayError::web_server(format!("failed to bind {}: {e}", config.bind_address))
        })?;
    let bind_address = listener
        .local_addr()
        .map_err(|e| GatewayError::web_server(format!("failed to read local address: {e}")))?;

    let server_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "Gateway web server error");
        }
    });

    info!(bind_address = %bind_address, "✅ Gateway accepting requests");

    Ok(GatewaySystemHandle {
        broker,
        bind_address,
        server_task,
    })
}
