//! Gateway orchestration.
//!
//! One method per operation, each a straight pipeline:
//!
//! - register: encrypt the CPF, build the registration envelope, one
//!   transport hop, check the ack.
//! - fetch: build the lookup envelope, one hop, decrypt the CPF of a hit.
//!
//! The CPF crosses the transport boundary encrypted in both directions.
//! Decryption happens only on the response path of a successful lookup,
//! and the decrypted value is returned, never stored.

use ponte_crypto::{decrypt, encrypt, EncryptedValue, GatewayKey};
use ponte_protocol::{create_request, interpret_reply, lookup_request, Outcome};
use ponte_types::{ClientId, EncryptedClient, EncryptedCpf, IsoTimestamp, PlainClient, PlainCpf};
use tracing::{debug, info};

use crate::client::LegacyClient;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// A registration request that already passed input validation.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub cpf: PlainCpf,
}

/// What the caller gets back for an accepted registration.
///
/// The id and timestamp are generated here; the registry's ack is checked
/// for success and its own details discarded.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationReceipt {
    pub id: ClientId,
    pub registered_at: IsoTimestamp,
}

/// The translation-and-integrity pipeline behind the HTTP API.
pub struct GatewayService {
    key: GatewayKey,
    legacy: LegacyClient,
}

impl GatewayService {
    /// Builds a service instance from configuration. The encryption key is
    /// derived once and held immutable for the life of the instance.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            key: GatewayKey::derive(&config.encryption_secret),
            legacy: LegacyClient::new(&config.legacy_base_url),
        }
    }

    /// Registers a new client with the legacy registry.
    pub async fn register(&self, new_client: NewClient) -> GatewayResult<RegistrationReceipt> {
        let id = ClientId::new();
        let registered_at = IsoTimestamp::now();

        let encrypted = encrypt(&self.key, new_client.cpf.as_str())?;
        let client = EncryptedClient {
            id,
            name: new_client.name,
            email: new_client.email,
            cpf: EncryptedCpf::new(encrypted.to_hex_pair()),
            registered_at,
        };

        debug!("registering client {id}");
        let envelope = create_request(&client, &registered_at)?;
        let reply = self.legacy.process(envelope).await?;

        match interpret_reply(&reply)? {
            Outcome::Acknowledged | Outcome::ClientFound(_) => {
                info!("client {id} registered");
                Ok(RegistrationReceipt { id, registered_at })
            }
            Outcome::NotFound => Err(GatewayError::UnexpectedReply(
                "NOT_FOUND on a registration",
            )),
            Outcome::Rejected(message) => Err(GatewayError::Peer(message)),
        }
    }

    /// Looks up a client, decrypting the CPF of a hit for the caller.
    pub async fn fetch(&self, id: ClientId) -> GatewayResult<Option<PlainClient>> {
        debug!("looking up client {id}");
        let envelope = lookup_request(id, &IsoTimestamp::now())?;
        let reply = self.legacy.process(envelope).await?;

        match interpret_reply(&reply)? {
            Outcome::ClientFound(client) => {
                let encrypted = EncryptedValue::from_hex_pair(client.cpf.as_str())?;
                let cpf = decrypt(&self.key, &encrypted)?;
                info!("client {id} found");
                Ok(Some(client.with_cpf(PlainCpf::new(cpf))))
            }
            Outcome::NotFound => {
                info!("client {id} not found");
                Ok(None)
            }
            Outcome::Acknowledged => Err(GatewayError::UnexpectedReply(
                "ack without a record on a lookup",
            )),
            Outcome::Rejected(message) => Err(GatewayError::Peer(message)),
        }
    }
}
