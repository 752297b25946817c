//! Transport to the legacy registry.
//!
//! One blocking round-trip per operation: post the envelope, await the
//! reply body. There are no retries and no queueing. HTTP status codes are
//! deliberately ignored here; the registry encodes its outcome inside the
//! reply envelope, and 404/500 responses carry valid reply bodies.

use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the registry's operation endpoint.
pub struct LegacyClient {
    http: reqwest::Client,
    base_url: String,
}

impl LegacyClient {
    /// Creates a client for the registry at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sends one envelope and returns the raw reply body.
    pub async fn process(&self, envelope: String) -> GatewayResult<String> {
        debug!("forwarding envelope to {}/processar", self.base_url);

        let response = self
            .http
            .post(format!("{}/processar", self.base_url))
            .header(CONTENT_TYPE, "application/xml")
            .body(envelope)
            .send()
            .await
            .map_err(GatewayError::Unavailable)?;

        debug!("registry answered {}", response.status());
        response.text().await.map_err(GatewayError::Unavailable)
    }
}
