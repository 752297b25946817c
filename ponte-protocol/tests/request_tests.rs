use ponte_protocol::{create_request, interpret_request, lookup_request, ProtocolError, Request};
use ponte_types::{Client, ClientId, EncryptedCpf, IsoTimestamp};

fn encrypted_client() -> Client<EncryptedCpf> {
    Client {
        id: ClientId::new(),
        name: "Bruno Lima".to_string(),
        email: "bruno@x.com".to_string(),
        cpf: EncryptedCpf::new("00112233445566778899aabbccddeeff:deadbeefdeadbeefdeadbeefdeadbeef"),
        registered_at: IsoTimestamp::parse("2026-08-06T12:00:00.000Z").unwrap(),
    }
}

// ── Builder/interpreter round-trip ───────────────────────────────

#[test]
fn cadastro_roundtrip() {
    let client = encrypted_client();
    let xml = create_request(&client, &IsoTimestamp::now()).unwrap();

    match interpret_request(&xml).unwrap() {
        Request::Cadastro(decoded) => assert_eq!(decoded, client),
        other => panic!("expected Cadastro, got {other:?}"),
    }
}

#[test]
fn consulta_roundtrip() {
    let id = ClientId::new();
    let xml = lookup_request(id, &IsoTimestamp::now()).unwrap();

    assert_eq!(interpret_request(&xml).unwrap(), Request::Consulta(id));
}

// ── Malformed requests ───────────────────────────────────────────

#[test]
fn non_request_document_fails() {
    let err = interpret_request("<resposta><status>sucesso</status></resposta>").unwrap_err();
    assert!(matches!(err, ProtocolError::NotARequest));
}

#[test]
fn unknown_operation_fails() {
    let xml = "<requisicao><tipo>REMOVE_CLIENTE</tipo><dados><clienteId>x</clienteId></dados></requisicao>";
    match interpret_request(xml).unwrap_err() {
        ProtocolError::UnknownOperation(op) => assert_eq!(op, "REMOVE_CLIENTE"),
        other => panic!("expected UnknownOperation, got {other:?}"),
    }
}

#[test]
fn missing_tipo_fails() {
    let err = interpret_request("<requisicao><dados/></requisicao>").unwrap_err();
    assert!(matches!(err, ProtocolError::MissingField("tipo")));
}

#[test]
fn missing_dados_fails() {
    let err =
        interpret_request("<requisicao><tipo>CONSULTA_CLIENTE</tipo></requisicao>").unwrap_err();
    assert!(matches!(err, ProtocolError::MissingField("dados")));
}

#[test]
fn consulta_with_bad_id_fails() {
    let xml = "<requisicao><tipo>CONSULTA_CLIENTE</tipo><dados><clienteId>123</clienteId></dados></requisicao>";
    assert!(matches!(
        interpret_request(xml),
        Err(ProtocolError::InvalidField {
            field: "clienteId",
            ..
        })
    ));
}

#[test]
fn cadastro_without_cliente_fails() {
    let xml = "<requisicao><tipo>CADASTRO_CLIENTE</tipo><dados><outro>x</outro></dados></requisicao>";
    assert!(matches!(
        interpret_request(xml),
        Err(ProtocolError::MissingField("cliente"))
    ));
}

#[test]
fn malformed_document_fails() {
    assert!(matches!(
        interpret_request("<requisicao><tipo>"),
        Err(ProtocolError::Codec(_))
    ));
}
