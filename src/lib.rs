//! # Facegate
//!
//! Face-comparison access gateway with durable queue notifications.
//!
//! ## Overview
//!
//! Facegate accepts an incoming face image over HTTP, delegates the biometric
//! comparison to an external face-matching service, and emits an asynchronous
//! notification describing the outcome (access granted / access denied) to a
//! durable message queue — independent of whether the HTTP caller is still
//! listening. The comparison path and the notification path are independently
//! fault-tolerant: a broker outage never changes a comparison result, and a
//! comparison failure never crashes the process.
//!
//! ## Architecture
//!
//! - **Broker connection manager** owns the AMQP connection lifecycle: lazy
//!   connect at boot, indefinite fixed-delay retry while the broker is
//!   unreachable, and an orderly close at shutdown. The rest of the system
//!   only ever sees a "current channel or unavailable" snapshot.
//! - **Notification publisher** maps a comparison outcome to a canonical
//!   notification payload and publishes it persistent, best-effort. Publish
//!   failures are logged and swallowed; they cannot reach the HTTP response.
//! - **Comparison orchestrator** (the `/compare` handler) validates the
//!   request, loads the enrolled reference image, invokes the face-matching
//!   collaborator, classifies the result, triggers the publisher, and
//!   responds — terminal in every branch.
//!
//! ## Module Organization
//!
//! - [`config`] - Environment-sourced gateway configuration
//! - [`messaging`] - Broker connection lifecycle and notification publishing
//! - [`comparison`] - Face-matching collaborator, outcomes, reference image
//! - [`web`] - Axum HTTP surface and request orchestration
//! - [`bootstrap`] - Process lifecycle (boot, serve, shutdown)
//! - [`error`] - Top-level error handling
//! - [`logging`] - Structured logging initialization

pub mod bootstrap;
pub mod comparison;
pub mod config;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod web;

pub use error::{GatewayError, GatewayResult};
