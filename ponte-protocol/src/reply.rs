//! Inbound reply interpretation.
//!
//! Replies arrive as `<resposta>` envelopes. The status field selects the
//! branch: `sucesso` with a `<dados><cliente>` payload is a lookup hit,
//! `sucesso` without one is a registration acknowledgment, `NOT_FOUND` is
//! the miss branch, and any other status text is a peer-reported failure.
//! The hit and ack cases are distinct [`Outcome`] variants; a caller can
//! never take an empty ack for a record.

use ponte_codec::decode;
use ponte_types::EncryptedClient;

use crate::error::{ProtocolError, ProtocolResult};
use crate::fields::client_from_tree;

/// The status field of a reply, as spelled on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyStatus {
    /// `sucesso`
    Sucesso,
    /// `NOT_FOUND`
    NotFound,
    /// Any other status text is a peer-reported error.
    Erro(String),
}

impl ReplyStatus {
    /// Classifies a wire status value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "sucesso" => ReplyStatus::Sucesso,
            "NOT_FOUND" => ReplyStatus::NotFound,
            other => ReplyStatus::Erro(other.to_string()),
        }
    }
}

/// The interpreted result of one request-reply exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `sucesso` carrying a record: a lookup hit. The CPF is still
    /// encrypted; decryption is the caller's decision.
    ClientFound(EncryptedClient),

    /// `sucesso` without a record: the registry accepted a registration.
    Acknowledged,

    /// `NOT_FOUND`: no record under the requested id.
    NotFound,

    /// The peer reported a failure; the payload is its message.
    Rejected(String),
}

/// Interprets a raw reply document into an [`Outcome`].
///
/// Fails only when the reply cannot be understood (malformed document,
/// missing mandatory fields). A well-formed reply reporting failure is the
/// [`Outcome::Rejected`] variant, not an error.
pub fn interpret_reply(xml: &str) -> ProtocolResult<Outcome> {
    let tree = decode(xml)?;
    let resposta = tree.child("resposta").ok_or(ProtocolError::NotAReply)?;
    let status = resposta
        .scalar("status")
        .ok_or(ProtocolError::MissingField("status"))?;

    match ReplyStatus::parse(status) {
        ReplyStatus::Sucesso => {
            match resposta.child("dados").and_then(|dados| dados.child("cliente")) {
                Some(cliente) => Ok(Outcome::ClientFound(client_from_tree(cliente)?)),
                None => Ok(Outcome::Acknowledged),
            }
        }
        ReplyStatus::NotFound => Ok(Outcome::NotFound),
        ReplyStatus::Erro(status) => {
            // Prefer the peer's message; fall back to the raw status text.
            let message = resposta
                .scalar("mensagem")
                .filter(|m| !m.is_empty())
                .unwrap_or(&status);
            Ok(Outcome::Rejected(message.to_string()))
        }
    }
}

