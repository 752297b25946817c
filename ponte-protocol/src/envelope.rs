//! Outbound envelope construction.
//!
//! Every request to the registry is a `<requisicao>` with three fields:
//! the operation code, a timestamp, and an operation-specific `<dados>`
//! payload. Registration carries the full record (CPF already encrypted);
//! lookup carries only the record id.

use ponte_codec::{encode, CodecResult, FieldTree};
use ponte_types::{ClientId, EncryptedClient, IsoTimestamp};

/// Operation codes understood by the legacy registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Register a new client record.
    CadastroCliente,
    /// Look up a client record by id.
    ConsultaCliente,
}

impl Operation {
    /// The wire spelling of the operation code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::CadastroCliente => "CADASTRO_CLIENTE",
            Operation::ConsultaCliente => "CONSULTA_CLIENTE",
        }
    }

    /// Parses a wire operation code.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CADASTRO_CLIENTE" => Some(Operation::CadastroCliente),
            "CONSULTA_CLIENTE" => Some(Operation::ConsultaCliente),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the registration envelope for a record whose CPF is already
/// encrypted. Taking [`EncryptedClient`] makes a plaintext CPF on the wire
/// unrepresentable.
pub fn create_request(client: &EncryptedClient, timestamp: &IsoTimestamp) -> CodecResult<String> {
    let cliente = FieldTree::new()
        .with("id", client.id.to_string())
        .with("nome", client.name.as_str())
        .with("email", client.email.as_str())
        .with("cpf_criptografado", client.cpf.as_str())
        .with("dataCadastro", client.registered_at.to_string());

    encode(&envelope(
        Operation::CadastroCliente,
        timestamp,
        FieldTree::new().with("cliente", cliente),
    ))
}

/// Builds the lookup envelope. The id is not sensitive; no encryption is
/// involved on this path.
pub fn lookup_request(id: ClientId, timestamp: &IsoTimestamp) -> CodecResult<String> {
    encode(&envelope(
        Operation::ConsultaCliente,
        timestamp,
        FieldTree::new().with("clienteId", id.to_string()),
    ))
}

fn envelope(operation: Operation, timestamp: &IsoTimestamp, dados: FieldTree) -> FieldTree {
    FieldTree::new().with(
        "requisicao",
        FieldTree::new()
            .with("tipo", operation.as_str())
            .with("timestamp", timestamp.to_string())
            .with("dados", dados),
    )
}
