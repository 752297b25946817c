//! Error types for the wire codec.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur encoding or decoding the wire format.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document is not well-formed markup.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The document contains no root element.
    #[error("empty document")]
    Empty,

    /// A tree handed to the encoder has no single root entry.
    #[error("encoding requires exactly one root field, got {0}")]
    InvalidRoot(usize),

    /// Text content is not valid UTF-8.
    #[error("invalid UTF-8 in document: {0}")]
    Utf8(String),
}

impl From<quick_xml::Error> for CodecError {
    fn from(e: quick_xml::Error) -> Self {
        CodecError::Malformed(e.to_string())
    }
}
