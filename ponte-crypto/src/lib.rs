//! Field-level encryption for the Ponte gateway.
//!
//! A single sensitive field (the CPF) is encrypted before it leaves the
//! gateway's trust boundary and decrypted only on the response path of an
//! authenticated lookup. The scheme is AES-256-CBC with a fresh random IV
//! per call, encoded as `hex(iv):hex(ciphertext)`.
//!
//! Both the cipher and the key-derivation rule are interoperability
//! contracts with the ciphertext already held by the legacy registry; see
//! the module docs in [`cipher`] and [`key`] before changing either.

mod cipher;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, EncryptedValue, BLOCK_SIZE, IV_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{GatewayKey, KEY_SIZE};
