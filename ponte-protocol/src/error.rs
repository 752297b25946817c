//! Error types for the protocol layer.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur translating envelopes and replies.
///
/// A reply in which the peer itself reports failure is not an error here;
/// that is the [`Outcome::Rejected`](crate::Outcome::Rejected) variant. These
/// errors mean the reply could not be understood at all.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The wire text is not a decodable document.
    #[error(transparent)]
    Codec(#[from] ponte_codec::CodecError),

    /// The reply decoded but is not a `<resposta>` envelope.
    #[error("reply is not a resposta envelope")]
    NotAReply,

    /// The request decoded but is not a `<requisicao>` envelope.
    #[error("request is not a requisicao envelope")]
    NotARequest,

    /// The request carries an operation code this protocol does not know.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// A mandatory field is absent from the reply.
    #[error("reply is missing field `{0}`")]
    MissingField(&'static str),

    /// A field failed to parse into its typed form.
    #[error("invalid value in field `{field}`: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}
