//! Client records and the two states of the CPF field.
//!
//! The CPF (the sensitive national identifier) exists in exactly two forms:
//! plaintext inside the gateway boundary, ciphertext everywhere beyond it.
//! The forms are separate types, so an envelope builder that takes
//! `Client<EncryptedCpf>` cannot be handed plaintext by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ClientId, IsoTimestamp};

/// A plaintext CPF. Never crosses the transport hop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainCpf(String);

impl PlainCpf {
    #[must_use]
    pub fn new(cpf: impl Into<String>) -> Self {
        Self(cpf.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for PlainCpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainCpf").field(&"[REDACTED]").finish()
    }
}

/// An encrypted CPF in its `hex(iv):hex(ciphertext)` wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedCpf(String);

impl EncryptedCpf {
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A client record, generic over the state of its CPF field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client<S> {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub cpf: S,
    pub registered_at: IsoTimestamp,
}

/// A record whose CPF is plaintext. Only valid inside the gateway boundary.
pub type PlainClient = Client<PlainCpf>;

/// A record whose CPF is ciphertext. The only form the transport accepts.
pub type EncryptedClient = Client<EncryptedCpf>;

impl<S> Client<S> {
    /// Replaces the CPF field, switching the record's state.
    #[must_use]
    pub fn with_cpf<T>(self, cpf: T) -> Client<T> {
        Client {
            id: self.id,
            name: self.name,
            email: self.email,
            cpf,
            registered_at: self.registered_at,
        }
    }
}
