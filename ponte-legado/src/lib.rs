//! The legacy client registry.
//!
//! This is the downstream system the gateway bridges to. It accepts one
//! operation endpoint, `POST /processar`, speaking the tagged-XML dialect:
//! registration requests are stored (CPF still encrypted; this side never
//! holds key material), lookups are answered from the in-memory store.
//!
//! Reply contract, mirrored by the gateway's translator:
//! - registration accepted: `200` with a `sucesso` ack, no record payload
//! - lookup hit: `200` with `sucesso` and `<dados><cliente>`
//! - lookup miss: `404` with `NOT_FOUND`
//! - anything unprocessable: `500` with `erro` and a message
//!
//! `GET /health` and `GET /clientes/{id}` are JSON endpoints for operators.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use ponte_codec::{encode, CodecResult, FieldTree};
use ponte_protocol::{interpret_request, Request};
use ponte_types::{EncryptedClient, IsoTimestamp};
use serde_json::json;
use tracing::{info, warn};

mod store;

pub use store::ClientStore;

/// Build the registry router over the given store.
pub fn build_router(store: ClientStore) -> Router {
    Router::new()
        .route("/processar", post(processar))
        .route("/health", get(health))
        .route("/clientes/{id}", get(inspect_client))
        .with_state(store)
}

async fn processar(State(store): State<ClientStore>, body: String) -> Response {
    match handle_envelope(&store, &body).await {
        Ok(response) => response,
        Err(message) => {
            warn!("rejected envelope: {message}");
            xml_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_reply(&message).unwrap_or_default(),
            )
        }
    }
}

/// Processes one request envelope. Nothing is committed unless the whole
/// envelope parses, so a failed registration leaves no partial record.
async fn handle_envelope(store: &ClientStore, body: &str) -> Result<Response, String> {
    let request = interpret_request(body).map_err(|e| e.to_string())?;

    match request {
        Request::Cadastro(client) => {
            let id = client.id;
            store.insert(client).await;
            info!("client {id} stored");

            let reply = ack_reply(&id.to_string()).map_err(|e| e.to_string())?;
            Ok(xml_response(StatusCode::OK, reply))
        }
        Request::Consulta(id) => match store.get(&id.to_string()).await {
            Some(client) => {
                info!("client {id} found");
                let reply = found_reply(&client).map_err(|e| e.to_string())?;
                Ok(xml_response(StatusCode::OK, reply))
            }
            None => {
                info!("client {id} not found");
                let reply = not_found_reply().map_err(|e| e.to_string())?;
                Ok(xml_response(StatusCode::NOT_FOUND, reply))
            }
        },
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": IsoTimestamp::now().to_string(),
    }))
}

/// Operator inspection endpoint. Returns the record as stored, CPF still in
/// its encrypted form.
async fn inspect_client(
    State(store): State<ClientStore>,
    Path(id): Path<String>,
) -> Response {
    match store.get(&id).await {
        Some(client) => (
            StatusCode::OK,
            Json(json!({ "success": true, "cliente": client })),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Cliente não encontrado" })),
        )
            .into_response(),
    }
}

// ── Reply construction ───────────────────────────────────────────

fn reply_tree(status: &str, mensagem: &str) -> FieldTree {
    FieldTree::new()
        .with("status", status)
        .with("mensagem", mensagem)
}

fn ack_reply(cliente_id: &str) -> CodecResult<String> {
    let resposta = reply_tree("sucesso", "Cliente cadastrado com sucesso")
        .with("clienteId", cliente_id)
        .with("timestamp", IsoTimestamp::now().to_string());
    encode(&FieldTree::new().with("resposta", resposta))
}

fn found_reply(client: &EncryptedClient) -> CodecResult<String> {
    let cliente = FieldTree::new()
        .with("id", client.id.to_string())
        .with("nome", client.name.as_str())
        .with("email", client.email.as_str())
        .with("cpf_criptografado", client.cpf.as_str())
        .with("dataCadastro", client.registered_at.to_string());

    let resposta = reply_tree("sucesso", "Cliente encontrado")
        .with("dados", FieldTree::new().with("cliente", cliente))
        .with("timestamp", IsoTimestamp::now().to_string());
    encode(&FieldTree::new().with("resposta", resposta))
}

fn not_found_reply() -> CodecResult<String> {
    let resposta = reply_tree("NOT_FOUND", "Cliente não encontrado")
        .with("timestamp", IsoTimestamp::now().to_string());
    encode(&FieldTree::new().with("resposta", resposta))
}

fn error_reply(message: &str) -> CodecResult<String> {
    let resposta =
        reply_tree("erro", message).with("timestamp", IsoTimestamp::now().to_string());
    encode(&FieldTree::new().with("resposta", resposta))
}

fn xml_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    )
        .into_response()
}
