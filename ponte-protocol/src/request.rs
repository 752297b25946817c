//! Inbound request interpretation, the registry side of the exchange.
//!
//! The gateway builds `<requisicao>` envelopes; the registry peer reads
//! them back through the same codec conventions. Keeping both directions in
//! this crate means the builders and the interpreter can never drift apart.

use ponte_codec::decode;
use ponte_types::{ClientId, EncryptedClient};

use crate::envelope::Operation;
use crate::error::{ProtocolError, ProtocolResult};
use crate::fields::{client_from_tree, scalar_field};

/// A decoded registry request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Register the carried record (CPF already encrypted).
    Cadastro(EncryptedClient),
    /// Look up a record by id.
    Consulta(ClientId),
}

/// Interprets a raw request document into a [`Request`].
pub fn interpret_request(xml: &str) -> ProtocolResult<Request> {
    let tree = decode(xml)?;
    let requisicao = tree.child("requisicao").ok_or(ProtocolError::NotARequest)?;

    let tipo = requisicao
        .scalar("tipo")
        .ok_or(ProtocolError::MissingField("tipo"))?;
    let operation =
        Operation::parse(tipo).ok_or_else(|| ProtocolError::UnknownOperation(tipo.to_string()))?;

    let dados = requisicao
        .child("dados")
        .ok_or(ProtocolError::MissingField("dados"))?;

    match operation {
        Operation::CadastroCliente => {
            let cliente = dados
                .child("cliente")
                .ok_or(ProtocolError::MissingField("cliente"))?;
            Ok(Request::Cadastro(client_from_tree(cliente)?))
        }
        Operation::ConsultaCliente => {
            let id = scalar_field(dados, "clienteId")?;
            let id = ClientId::parse(id).map_err(|e| ProtocolError::InvalidField {
                field: "clienteId",
                reason: e.to_string(),
            })?;
            Ok(Request::Consulta(id))
        }
    }
}
