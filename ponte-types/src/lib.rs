//! Core type definitions for Ponte.
//!
//! This crate defines the types shared by every layer of the gateway:
//! - Client record identifiers (UUID v4, generated by the gateway)
//! - Wire timestamps (millisecond ISO-8601, the shape the legacy registry
//!   emits and expects)
//! - The client record in its two cpf states (plaintext and encrypted)
//!
//! Transport, cipher, and wire-format concerns live in their own crates;
//! nothing here touches the network or key material.

mod client;
mod ids;
mod timestamp;

pub use client::{Client, EncryptedClient, EncryptedCpf, PlainClient, PlainCpf};
pub use ids::ClientId;
pub use timestamp::IsoTimestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
