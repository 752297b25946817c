//! Shared test helpers: spawned gateway and registry instances.

#![allow(dead_code)]

use axum::Router;
use ponte_gateway::{build_router, GatewayConfig};
use ponte_legado::{build_router as build_registry, ClientStore};

pub const TEST_API_KEY: &str = "chave-de-teste-123";
pub const TEST_SECRET: &str = "segredo-de-teste";

/// Serve a router on an OS-assigned port, returning the base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Spin up a legacy registry instance.
pub async fn spawn_registry() -> String {
    spawn(build_registry(ClientStore::new())).await
}

/// Spin up a registry whose store the test can also inspect directly.
pub async fn spawn_registry_with_store() -> (String, ClientStore) {
    let store = ClientStore::new();
    let base = spawn(build_registry(store.clone())).await;
    (base, store)
}

/// Spin up a gateway pointed at the given registry URL.
pub async fn spawn_gateway(legacy_base_url: &str) -> String {
    let config = GatewayConfig {
        api_key: TEST_API_KEY.to_string(),
        encryption_secret: TEST_SECRET.to_string(),
        legacy_base_url: legacy_base_url.to_string(),
    };
    spawn(build_router(config)).await
}

pub fn bearer(key: &str) -> String {
    format!("Bearer {key}")
}
