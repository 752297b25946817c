//! Field encryption using AES-256-CBC.
//!
//! Every call draws a fresh random 16-byte IV, so encrypting the same
//! plaintext twice yields different ciphertext. The encoded form is
//! `hex(iv):hex(ciphertext)`, the format the legacy registry already
//! stores.
//!
//! CBC with PKCS#7 padding carries no authentication tag: tampering that
//! happens to preserve valid padding decrypts without error into different
//! plaintext. This is an accepted limitation of the stored-ciphertext
//! format, not something to silently fix with an AEAD.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};
use crate::key::GatewayKey;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the IV in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// AES block size in bytes. Ciphertext length is always a multiple of this.
pub const BLOCK_SIZE: usize = 16;

/// An encrypted field value: the IV that produced it plus the ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedValue {
    /// The IV used for encryption (unique per call, never reused).
    pub iv: [u8; IV_SIZE],
    /// The padded ciphertext.
    pub ciphertext: Vec<u8>,
}

impl EncryptedValue {
    /// Encodes to the `hex(iv):hex(ciphertext)` wire form.
    #[must_use]
    pub fn to_hex_pair(&self) -> String {
        format!("{}:{}", hex::encode(self.iv), hex::encode(&self.ciphertext))
    }

    /// Decodes from the `hex(iv):hex(ciphertext)` wire form.
    pub fn from_hex_pair(encoded: &str) -> CryptoResult<Self> {
        let (iv_hex, ct_hex) = encoded
            .split_once(':')
            .ok_or_else(|| CryptoError::InvalidEncoding("missing ':' separator".to_string()))?;

        let iv_bytes = hex::decode(iv_hex)
            .map_err(|e| CryptoError::InvalidEncoding(format!("bad IV hex: {e}")))?;
        let iv: [u8; IV_SIZE] =
            iv_bytes
                .try_into()
                .map_err(|v: Vec<u8>| CryptoError::InvalidIvLength {
                    expected: IV_SIZE,
                    actual: v.len(),
                })?;

        let ciphertext = hex::decode(ct_hex)
            .map_err(|e| CryptoError::InvalidEncoding(format!("bad ciphertext hex: {e}")))?;
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CryptoError::InvalidCiphertextLength(ciphertext.len()));
        }

        Ok(Self { iv, ciphertext })
    }
}

/// Encrypts a plaintext field value.
///
/// # Arguments
/// * `key` - The gateway encryption key
/// * `plaintext` - The field value to encrypt
///
/// # Returns
/// The IV and ciphertext; encode with [`EncryptedValue::to_hex_pair`] for
/// transmission.
pub fn encrypt(key: &GatewayKey, plaintext: &str) -> CryptoResult<EncryptedValue> {
    let mut iv = [0u8; IV_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(EncryptedValue { iv, ciphertext })
}

/// Decrypts a previously encrypted field value.
///
/// Fails on invalid padding (typically a wrong key or corrupted data) or
/// when the recovered bytes are not UTF-8. A wrong key is *usually* caught
/// by the padding check, but without an authentication tag that is not
/// guaranteed.
pub fn decrypt(key: &GatewayKey, value: &EncryptedValue) -> CryptoResult<String> {
    if value.ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidCiphertextLength(value.ciphertext.len()));
    }

    let plaintext = Aes256CbcDec::new(key.as_bytes().into(), (&value.iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(&value.ciphertext)
        .map_err(|_| CryptoError::Decryption("invalid padding".to_string()))?;

    String::from_utf8(plaintext)
        .map_err(|e| CryptoError::Decryption(format!("invalid UTF-8: {e}")))
}
