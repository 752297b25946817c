//! HTTP handlers for the gateway API.
//!
//! Validation of primitive fields happens here, before anything reaches
//! the service pipeline. Response shapes follow the registry bridge's
//! existing API: `{success, message, ...}` JSON in both directions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use ponte_types::{ClientId, IsoTimestamp, PlainClient, PlainCpf};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::LazyLock;
use tracing::{error, warn};

use crate::error::GatewayError;
use crate::service::NewClient;
use crate::AppState;

static CPF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{11}$").expect("valid CPF pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Deserialize)]
pub(crate) struct CreateClientBody {
    nome: Option<String>,
    email: Option<String>,
    cpf: Option<String>,
}

pub(crate) async fn register_client(
    State(state): State<AppState>,
    Json(body): Json<CreateClientBody>,
) -> Response {
    let new_client = match validate_create(body) {
        Ok(new_client) => new_client,
        Err(message) => return bad_request(&message),
    };

    match state.service.register(new_client).await {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "Cliente cadastrado com sucesso",
                "clienteId": receipt.id,
                "timestamp": receipt.registered_at.to_string(),
            })),
        )
            .into_response(),
        Err(error) => failure_response("Erro ao cadastrar cliente", error),
    }
}

pub(crate) async fn fetch_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = ClientId::parse(&id) else {
        return bad_request("ID inválido");
    };

    match state.service.fetch(id).await {
        Ok(Some(client)) => {
            Json(json!({ "success": true, "cliente": client_json(&client) })).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Cliente não encontrado" })),
        )
            .into_response(),
        Err(error) => failure_response("Erro ao consultar cliente", error),
    }
}

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": IsoTimestamp::now().to_string(),
    }))
}

fn validate_create(body: CreateClientBody) -> Result<NewClient, String> {
    let (Some(nome), Some(email), Some(cpf)) = (body.nome, body.email, body.cpf) else {
        return Err("Campos obrigatórios: nome, email, cpf".to_string());
    };
    if nome.is_empty() || email.is_empty() || cpf.is_empty() {
        return Err("Campos obrigatórios: nome, email, cpf".to_string());
    }
    if !CPF_RE.is_match(&cpf) {
        return Err("CPF inválido. Deve conter 11 dígitos numéricos.".to_string());
    }
    if !EMAIL_RE.is_match(&email) {
        return Err("Email inválido".to_string());
    }

    Ok(NewClient {
        name: nome,
        email,
        cpf: PlainCpf::new(cpf),
    })
}

/// The caller-facing record shape, CPF decrypted.
fn client_json(client: &PlainClient) -> serde_json::Value {
    json!({
        "id": client.id,
        "nome": client.name,
        "email": client.email,
        "cpf": client.cpf.as_str(),
        "dataCadastro": client.registered_at.to_string(),
    })
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

/// Maps service failures to HTTP responses. Internal detail stays in the
/// logs; only peer-reported messages pass through to the caller.
fn failure_response(context: &str, error: GatewayError) -> Response {
    match error {
        GatewayError::Validation(message) => bad_request(&message),
        GatewayError::Unavailable(source) => {
            warn!("{context}: legacy registry unreachable: {source}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "success": false, "message": "Sistema legado indisponível" })),
            )
                .into_response()
        }
        GatewayError::Peer(message) => {
            error!("{context}: registry reported failure: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": context, "error": message })),
            )
                .into_response()
        }
        other => {
            error!("{context}: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": context })),
            )
                .into_response()
        }
    }
}
