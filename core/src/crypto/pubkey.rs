// ## 📂 File: `src/crypto/pubkey.rs`

//! crypto/pubkey.rs
//! Recipient public key decoding: base64 → PEM → RSA public key.
//!
//! Both SPKI (`BEGIN PUBLIC KEY`) and PKCS#1 (`BEGIN RSA PUBLIC KEY`) PEM are accepted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use crate::crypto::types::CryptoError;

/// Decode base64-wrapped PEM into an RSA public key.
pub fn decode_public_key_b64(encoded: &str) -> Result<RsaPublicKey, CryptoError> {
    let pem_bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CryptoError::InvalidPublicKey(format!("base64: {}", e)))?;
    let pem = std::str::from_utf8(&pem_bytes)
        .map_err(|_| CryptoError::InvalidPublicKey("PEM is not UTF-8".into()))?;
    parse_public_key_pem(pem)
}

pub fn parse_public_key_pem(pem: &str) -> Result<RsaPublicKey, CryptoError> {
    let pem = pem.trim();
    match RsaPublicKey::from_public_key_pem(pem) {
        Ok(key) => Ok(key),
        Err(spki_err) => RsaPublicKey::from_pkcs1_pem(pem).map_err(|pkcs1_err| {
            CryptoError::InvalidPublicKey(format!("spki: {}; pkcs1: {}", spki_err, pkcs1_err))
        }),
    }
}

/// Modulus size in bits.
pub fn modulus_bits(key: &RsaPublicKey) -> usize {
    key.size() * 8
}
