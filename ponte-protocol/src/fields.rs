//! Shared field extraction for record payloads.
//!
//! Both directions of the protocol carry the same `<cliente>` shape; this
//! is the one place that knows its field names.

use ponte_codec::FieldTree;
use ponte_types::{ClientId, EncryptedClient, EncryptedCpf, IsoTimestamp};

use crate::error::{ProtocolError, ProtocolResult};

pub(crate) fn scalar_field<'a>(
    tree: &'a FieldTree,
    field: &'static str,
) -> ProtocolResult<&'a str> {
    tree.scalar(field).ok_or(ProtocolError::MissingField(field))
}

/// Reads a `<cliente>` payload into a typed record. Presence checks follow
/// wire field order, so the first gap is the one reported.
pub(crate) fn client_from_tree(cliente: &FieldTree) -> ProtocolResult<EncryptedClient> {
    let id = scalar_field(cliente, "id")?;
    let name = scalar_field(cliente, "nome")?;
    let email = scalar_field(cliente, "email")?;
    let cpf = scalar_field(cliente, "cpf_criptografado")?;
    let registered_at = scalar_field(cliente, "dataCadastro")?;

    let id = ClientId::parse(id).map_err(|e| ProtocolError::InvalidField {
        field: "id",
        reason: e.to_string(),
    })?;
    let registered_at =
        IsoTimestamp::parse(registered_at).map_err(|e| ProtocolError::InvalidField {
            field: "dataCadastro",
            reason: e.to_string(),
        })?;

    Ok(EncryptedClient {
        id,
        name: name.to_string(),
        email: email.to_string(),
        cpf: EncryptedCpf::new(cpf),
        registered_at,
    })
}
