//! Bearer credential middleware.
//!
//! Runs before any translation work: a rejected request never touches the
//! cipher, the codec, or the registry. Missing or malformed credentials are
//! `401`; a well-formed credential with the wrong value is `403`.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::AppState;

pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(value) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return reject(
            StatusCode::UNAUTHORIZED,
            "Autenticação necessária. Forneça o header Authorization.",
        );
    };

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return reject(
            StatusCode::UNAUTHORIZED,
            "Formato de autenticação inválido. Use: Bearer {API_KEY}",
        );
    }

    if parts[1] != state.api_key {
        return reject(StatusCode::FORBIDDEN, "API Key inválida");
    }

    next.run(request).await
}

fn reject(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
