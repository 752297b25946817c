//! Credential checks run before any translation work.

mod common;

use common::{bearer, spawn_gateway, TEST_API_KEY};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_with_untouchable_registry() -> (String, MockServer) {
    let registry = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/processar"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&registry)
        .await;

    let gateway = spawn_gateway(&registry.uri()).await;
    (gateway, registry)
}

fn create_body() -> serde_json::Value {
    json!({ "nome": "Ana", "email": "ana@x.com", "cpf": "12345678901" })
}

// ── Missing credential ───────────────────────────────────────────

#[tokio::test]
async fn missing_header_is_401() {
    let (gateway, _registry) = gateway_with_untouchable_registry().await;

    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/clientes"))
        .json(&create_body())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn missing_header_on_lookup_is_401() {
    let (gateway, _registry) = gateway_with_untouchable_registry().await;

    let resp = reqwest::get(format!(
        "{gateway}/api/clientes/7f6c2a4e-58cb-43e2-9175-1a2b3c4d5e6f"
    ))
    .await
    .unwrap();

    assert_eq!(resp.status(), 401);
}

// ── Malformed credential ─────────────────────────────────────────

#[tokio::test]
async fn malformed_scheme_is_401() {
    let (gateway, _registry) = gateway_with_untouchable_registry().await;

    let malformed = [
        "Token abc".to_string(),
        "Bearer".to_string(),
        format!("Bearer {TEST_API_KEY} extra"),
    ];
    for value in malformed {
        let resp = reqwest::Client::new()
            .post(format!("{gateway}/api/clientes"))
            .header("Authorization", value.as_str())
            .json(&create_body())
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 401, "value {value:?}");
    }
}

// ── Wrong credential ─────────────────────────────────────────────

#[tokio::test]
async fn wrong_key_is_403() {
    let (gateway, _registry) = gateway_with_untouchable_registry().await;

    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/clientes"))
        .header("Authorization", bearer("chave-errada"))
        .json(&create_body())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "API Key inválida");
}

// ── The registry is never invoked for rejected requests ──────────

#[tokio::test]
async fn rejected_requests_never_reach_the_registry() {
    let (gateway, registry) = gateway_with_untouchable_registry().await;
    let client = reqwest::Client::new();

    // One of each rejection class; the mock's expect(0) verifies on drop.
    client
        .post(format!("{gateway}/api/clientes"))
        .json(&create_body())
        .send()
        .await
        .unwrap();
    client
        .post(format!("{gateway}/api/clientes"))
        .header("Authorization", "Token abc")
        .json(&create_body())
        .send()
        .await
        .unwrap();
    client
        .post(format!("{gateway}/api/clientes"))
        .header("Authorization", bearer("chave-errada"))
        .json(&create_body())
        .send()
        .await
        .unwrap();

    registry.verify().await;
}

// ── Health is outside the credential scope ───────────────────────

#[tokio::test]
async fn health_needs_no_credential() {
    let (gateway, _registry) = gateway_with_untouchable_registry().await;

    let resp = reqwest::get(format!("{gateway}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "OK");
}
