// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! AES-256-GCM sealing with a detached tag.
//!
//! Design notes:
//! - 32-byte key, 12-byte IV, 16-byte tag, empty AAD.
//! - Key and IV are single-use: callers draw fresh material for every seal.
//! - The tag travels inside the key-wrap plaintext, not appended to the ciphertext.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce as AesNonce};

use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12, TAG_LEN};

/// Ciphertext plus its detached authentication tag.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedPayload {
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

impl std::fmt::Debug for SealedPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedPayload")
            .field("ciphertext_len", &self.ciphertext.len())
            .finish_non_exhaustive()
    }
}

/// AEAD seal (encrypt) `plaintext` under `key`/`iv`, returning ciphertext and tag separately.
pub fn seal_detached(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<SealedPayload, CryptoError> {
    if key.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        });
    }

    if iv.len() != NONCE_LEN_12 {
        return Err(CryptoError::InvalidNonceLen {
            expected: NONCE_LEN_12,
            actual: iv.len(),
        });
    }

    if plaintext.is_empty() {
        return Err(CryptoError::Failure("plaintext must not be empty".into()));
    }

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(AesNonce::from_slice(iv), b"", &mut buffer)
        .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_slice());

    Ok(SealedPayload {
        ciphertext: buffer,
        tag: tag_bytes,
    })
}
