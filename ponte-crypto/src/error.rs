//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (bad padding, wrong key, or non-UTF-8 plaintext).
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// The encoded value is not `hex(iv):hex(ciphertext)`.
    #[error("invalid encrypted value encoding: {0}")]
    InvalidEncoding(String),

    /// The IV is not exactly 16 bytes.
    #[error("invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// The ciphertext length is not a multiple of the cipher block size.
    #[error("invalid ciphertext length: {0} is not a block multiple")]
    InvalidCiphertextLength(usize),
}
