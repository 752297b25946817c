//! Gateway configuration.
//!
//! All process-wide state (the API key, the encryption secret, the registry
//! address) lives here and is passed to constructors explicitly, so tests
//! build isolated instances with their own secrets.

use std::env;

/// Configuration for one gateway instance.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bearer token callers must present on `/api` routes.
    pub api_key: String,
    /// Secret the field-encryption key is derived from.
    pub encryption_secret: String,
    /// Base URL of the legacy registry.
    pub legacy_base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: "minha-api-key-segura-123".to_string(),
            encryption_secret: "chave-padrao-32-caracteres!!".to_string(),
            legacy_base_url: "http://localhost:3001".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Reads configuration from the environment, falling back to the
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("PONTE_API_KEY").unwrap_or(defaults.api_key),
            encryption_secret: env::var("PONTE_ENCRYPTION_SECRET")
                .unwrap_or(defaults.encryption_secret),
            legacy_base_url: env::var("PONTE_LEGACY_URL").unwrap_or(defaults.legacy_base_url),
        }
    }
}
