//! Key derivation and management.
//!
//! The gateway key is derived from the configured secret by a fixed rule:
//! take the secret's bytes, truncate to 32, right-pad with `'0'`. This is
//! deliberately not a KDF. The legacy registry holds ciphertext produced
//! under exactly this rule, so any stretching or salting here would orphan
//! every stored value.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the encryption key in bytes (256 bits for AES-256).
pub const KEY_SIZE: usize = 32;

/// The process-wide encryption key, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GatewayKey {
    bytes: [u8; KEY_SIZE],
}

impl GatewayKey {
    /// Derives the key from a configured secret.
    ///
    /// Secrets longer than 32 bytes are truncated; shorter ones are padded
    /// with ASCII `'0'`.
    #[must_use]
    pub fn derive(secret: &str) -> Self {
        let mut bytes = [b'0'; KEY_SIZE];
        let src = secret.as_bytes();
        let len = src.len().min(KEY_SIZE);
        bytes[..len].copy_from_slice(&src[..len]);
        Self { bytes }
    }

    /// Creates a key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for GatewayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
