// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

/// One-time AES-256 key length (bytes).
pub const KEY_LEN_32: usize = 32;

/// 96-bit GCM initialization vector.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// SHA-256 output length, which sizes the OAEP overhead.
pub const OAEP_HASH_LEN: usize = 32;

/// Wrapped key material: three length bytes plus key, IV and tag.
pub const KEY_WRAP_PLAINTEXT_LEN: usize = 3 + KEY_LEN_32 + NONCE_LEN_12 + TAG_LEN;

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes for AES-GCM).
    InvalidNonceLen { expected: usize, actual: usize },

    /// The random source could not produce bytes.
    RandomSource(String),

    /// Recipient public key could not be decoded or parsed.
    InvalidPublicKey(String),

    /// Recipient modulus below the accepted minimum.
    KeyTooSmall { bits: usize, min_bits: usize },

    /// Key-wrap plaintext does not fit a single OAEP block for this key.
    PayloadTooLarge { max: usize, actual: usize },

    /// A key-wrap field cannot be described by a one-byte length prefix.
    FieldTooLong { field: &'static str, len: usize },

    /// General runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidNonceLen { expected, actual } =>
                write!(f, "invalid nonce length: expected={}, actual={}", expected, actual),
            RandomSource(msg) =>
                write!(f, "random source failure: {}", msg),
            InvalidPublicKey(msg) =>
                write!(f, "invalid public key: {}", msg),
            KeyTooSmall { bits, min_bits } =>
                write!(f, "public key too small: {} bits, minimum {}", bits, min_bits),
            PayloadTooLarge { max, actual } =>
                write!(f, "key-wrap payload too large: max={}, actual={}", max, actual),
            FieldTooLong { field, len } =>
                write!(f, "key-wrap field '{}' too long for one-byte prefix: {}", field, len),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

impl From<rsa::Error> for CryptoError {
    fn from(e: rsa::Error) -> Self {
        CryptoError::Failure(e.to_string())
    }
}
