//! Error taxonomy for the gateway.
//!
//! The variants map onto distinct caller-visible behaviors:
//! - `Validation` is local and immediate; the translator is never reached.
//! - `Unavailable` means the hop itself failed; callers may retry later,
//!   so it is kept apart from processing failures.
//! - `Peer` is a failure the registry itself reported; its message passes
//!   through.
//! - Everything else is an internal failure surfaced generically, with
//!   detail only in the logs.

use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur bridging a request to the legacy registry.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The caller's input failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Encryption or decryption of the sensitive field failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] ponte_crypto::CryptoError),

    /// An envelope could not be rendered.
    #[error("codec error: {0}")]
    Codec(#[from] ponte_codec::CodecError),

    /// The registry's reply could not be understood.
    #[error("protocol error: {0}")]
    Protocol(#[from] ponte_protocol::ProtocolError),

    /// The transport hop failed; the registry never answered.
    #[error("legacy registry unreachable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The registry answered and reported a failure of its own.
    #[error("legacy registry reported failure: {0}")]
    Peer(String),

    /// The registry answered with a branch that makes no sense for the
    /// operation (e.g. an empty ack on a lookup).
    #[error("unexpected reply: {0}")]
    UnexpectedReply(&'static str),
}

impl GatewayError {
    /// True when retrying later could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Unavailable(_))
    }
}
