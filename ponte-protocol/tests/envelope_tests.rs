use ponte_codec::decode;
use ponte_protocol::{create_request, lookup_request, Operation};
use ponte_types::{Client, ClientId, EncryptedCpf, IsoTimestamp};

fn encrypted_client() -> Client<EncryptedCpf> {
    Client {
        id: ClientId::new(),
        name: "Ana Souza".to_string(),
        email: "ana@x.com".to_string(),
        cpf: EncryptedCpf::new("00112233445566778899aabbccddeeff:cafebabecafebabecafebabecafebabe"),
        registered_at: IsoTimestamp::parse("2026-08-06T12:00:00.000Z").unwrap(),
    }
}

// ── Operation codes ──────────────────────────────────────────────

#[test]
fn operation_wire_spellings() {
    assert_eq!(Operation::CadastroCliente.as_str(), "CADASTRO_CLIENTE");
    assert_eq!(Operation::ConsultaCliente.as_str(), "CONSULTA_CLIENTE");
}

#[test]
fn operation_parse_roundtrip() {
    for op in [Operation::CadastroCliente, Operation::ConsultaCliente] {
        assert_eq!(Operation::parse(op.as_str()), Some(op));
    }
    assert_eq!(Operation::parse("ATUALIZA_CLIENTE"), None);
}

// ── Registration envelope ────────────────────────────────────────

#[test]
fn create_request_carries_the_full_record() {
    let client = encrypted_client();
    let timestamp = IsoTimestamp::parse("2026-08-06T13:00:00.000Z").unwrap();
    let xml = create_request(&client, &timestamp).unwrap();

    let requisicao = decode(&xml).unwrap();
    let requisicao = requisicao.child("requisicao").unwrap();
    assert_eq!(requisicao.scalar("tipo"), Some("CADASTRO_CLIENTE"));
    assert_eq!(
        requisicao.scalar("timestamp"),
        Some("2026-08-06T13:00:00.000Z")
    );

    let cliente = requisicao.child("dados").unwrap().child("cliente").unwrap();
    assert_eq!(cliente.scalar("id"), Some(client.id.to_string().as_str()));
    assert_eq!(cliente.scalar("nome"), Some("Ana Souza"));
    assert_eq!(cliente.scalar("email"), Some("ana@x.com"));
    assert_eq!(cliente.scalar("cpf_criptografado"), Some(client.cpf.as_str()));
    assert_eq!(
        cliente.scalar("dataCadastro"),
        Some("2026-08-06T12:00:00.000Z")
    );
}

#[test]
fn create_request_has_no_plaintext_cpf_field() {
    let xml = create_request(&encrypted_client(), &IsoTimestamp::now()).unwrap();
    assert!(xml.contains("<cpf_criptografado>"));
    assert!(!xml.contains("<cpf>"));
}

#[test]
fn create_request_declares_utf8() {
    let xml = create_request(&encrypted_client(), &IsoTimestamp::now()).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
}

#[test]
fn create_request_escapes_names() {
    let mut client = encrypted_client();
    client.name = "Silva & Filhos <SA>".to_string();
    let xml = create_request(&client, &IsoTimestamp::now()).unwrap();

    let decoded = decode(&xml).unwrap();
    let cliente = decoded
        .child("requisicao")
        .unwrap()
        .child("dados")
        .unwrap()
        .child("cliente")
        .unwrap();
    assert_eq!(cliente.scalar("nome"), Some("Silva & Filhos <SA>"));
}

// ── Lookup envelope ──────────────────────────────────────────────

#[test]
fn lookup_request_carries_only_the_id() {
    let id = ClientId::new();
    let timestamp = IsoTimestamp::parse("2026-08-06T13:00:00.000Z").unwrap();
    let xml = lookup_request(id, &timestamp).unwrap();

    let requisicao = decode(&xml).unwrap();
    let requisicao = requisicao.child("requisicao").unwrap();
    assert_eq!(requisicao.scalar("tipo"), Some("CONSULTA_CLIENTE"));
    assert_eq!(
        requisicao.scalar("timestamp"),
        Some("2026-08-06T13:00:00.000Z")
    );

    let dados = requisicao.child("dados").unwrap();
    assert_eq!(dados.scalar("clienteId"), Some(id.to_string().as_str()));
    assert_eq!(dados.len(), 1);
}

#[test]
fn envelope_field_order_is_stable() {
    let xml = lookup_request(ClientId::new(), &IsoTimestamp::now()).unwrap();
    let tipo = xml.find("<tipo>").unwrap();
    let timestamp = xml.find("<timestamp>").unwrap();
    let dados = xml.find("<dados>").unwrap();
    assert!(tipo < timestamp && timestamp < dados);
}
