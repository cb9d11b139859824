// Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::OnceLock;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use pin_core::crypto::Envelope;
use pin_core::pinblock::PinBlock;
use pin_core::utils::nibble_to_hex;

/// One 2048-bit key pair per test binary.
pub fn recipient() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut OsRng, 2048).unwrap())
}

pub fn recipient_public() -> RsaPublicKey {
    RsaPublicKey::from(recipient())
}

/// Recipient-side unwrap: RSA-OAEP → (key, iv, tag) → AES-GCM open.
pub fn open_envelope(private: &RsaPrivateKey, envelope: &Envelope) -> Vec<u8> {
    let wrapped = STANDARD.decode(&envelope.session_key).unwrap();
    let material = private.decrypt(Oaep::new::<Sha256>(), &wrapped).unwrap();

    assert_eq!(material.len(), 63);
    assert_eq!(material[0], 32);
    let key = &material[1..33];
    assert_eq!(material[33], 12);
    let iv = &material[34..46];
    assert_eq!(material[46], 16);
    let tag = &material[47..63];

    let mut ct = STANDARD.decode(&envelope.encrypted_pin).unwrap();
    ct.extend_from_slice(tag);
    Aes256Gcm::new_from_slice(key)
        .unwrap()
        .decrypt(Nonce::from_slice(iv), ct.as_ref())
        .unwrap()
}

/// Read the PIN back out of a block through its position map.
pub fn recover_pin(block: &PinBlock) -> String {
    let start = block.padding_start();
    block
        .position_map()
        .iter()
        .map(|&p| nibble_to_hex(block.nibbles()[start + p as usize]))
        .collect()
}

/// Always yields zero bytes: every position map collides.
pub struct ConstantRng;

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ConstantRng {}

/// Source that is offline.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("entropy source offline"))
    }
}

impl CryptoRng for FailingRng {}
