//! The Ponte gateway.
//!
//! Callers speak JSON to an authenticated HTTP API; the legacy client
//! registry only speaks a nested tagged-XML dialect. This crate bridges
//! the two: validate, encrypt the CPF, translate, one transport hop,
//! translate back, decrypt for the authorized caller.
//!
//! Request flow for each operation:
//!
//! ```text
//! caller → auth → validate → GatewayService
//!            (encrypt) → envelope → encode → POST /processar
//!            decode ← interpret ← (decrypt) ← reply
//! ```
//!
//! Requests are independent; the only shared state is the derived
//! encryption key and the HTTP client, both immutable after construction.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

mod auth;
mod client;
mod config;
mod error;
mod routes;
mod service;

pub use client::LegacyClient;
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use service::{GatewayService, NewClient, RegistrationReceipt};

/// Shared state behind every handler.
#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<GatewayService>,
    pub(crate) api_key: String,
}

/// Build the gateway router for the given configuration.
///
/// `/api` routes sit behind the bearer credential; `/health` does not.
pub fn build_router(config: GatewayConfig) -> Router {
    let state = AppState {
        service: Arc::new(GatewayService::new(&config)),
        api_key: config.api_key,
    };

    let api = Router::new()
        .route("/clientes", post(routes::register_client))
        .route("/clientes/{id}", get(routes::fetch_client))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .nest("/api", api)
        .route("/health", get(routes::health))
        .with_state(state)
}
