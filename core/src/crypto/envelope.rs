// ## 📂 File: `src/crypto/envelope.rs`

//! crypto/envelope.rs
//! Hybrid envelope assembly.
//!
//! Flow per call:
//! - fresh AES-256 key + 96-bit IV
//! - AES-GCM over the block's hex text → ciphertext, detached tag
//! - `encrypted_pin` = base64(ciphertext)
//! - key-wrap plaintext (key, IV, tag) under RSA-OAEP(SHA-256) → `session_key` = base64
//!
//! Nothing here is reused across calls and no secret reaches a log line.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::RsaPublicKey;
use tracing::debug;

use crate::crypto::aead::seal_detached;
use crate::crypto::keywrap::{wrap_key_material, KeyWrapPlaintext};
use crate::crypto::random::{random_secret, RandomSource};
use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12};
use crate::pinblock::PinBlock;
use crate::telemetry::{Stage, TelemetryTimer};

/// Serialized envelope fields, both base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub encrypted_pin: String,
    pub session_key: String,
}

/// Addresses envelopes to one recipient key.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeAssembler<'k> {
    public_key: &'k RsaPublicKey,
}

impl<'k> EnvelopeAssembler<'k> {
    pub fn new(public_key: &'k RsaPublicKey) -> Self {
        Self { public_key }
    }

    pub fn assemble<R: RandomSource>(&self, block: &PinBlock, rng: &mut R) -> Result<Envelope, CryptoError> {
        let mut timer = TelemetryTimer::new();
        self.assemble_timed(block, rng, &mut timer)
    }

    /// Same as [`assemble`](Self::assemble), recording `Seal` and `Wrap` stage times.
    pub fn assemble_timed<R: RandomSource>(
        &self,
        block: &PinBlock,
        rng: &mut R,
        timer: &mut TelemetryTimer,
    ) -> Result<Envelope, CryptoError> {
        let (key, iv, sealed) = timer.time(Stage::Seal, || {
            let key = random_secret::<KEY_LEN_32, _>(rng)?;
            let iv = random_secret::<NONCE_LEN_12, _>(rng)?;
            let hex = block.to_hex_string();
            let sealed = seal_detached(&key[..], &iv[..], hex.as_bytes())?;
            Ok::<_, CryptoError>((key, iv, sealed))
        })?;

        let wrapped = timer.time(Stage::Wrap, || {
            let material = KeyWrapPlaintext::build(&key[..], &iv[..], &sealed.tag)?;
            wrap_key_material(self.public_key, &material, rng)
        })?;

        debug!(
            ciphertext_len = sealed.ciphertext.len(),
            wrapped_len = wrapped.len(),
            "envelope assembled"
        );

        Ok(Envelope {
            encrypted_pin: STANDARD.encode(&sealed.ciphertext),
            session_key: STANDARD.encode(&wrapped),
        })
    }
}

/// One-shot helper: assemble an envelope for `block` addressed to `public_key`.
pub fn assemble_envelope<R: RandomSource>(
    block: &PinBlock,
    public_key: &RsaPublicKey,
    rng: &mut R,
) -> Result<Envelope, CryptoError> {
    EnvelopeAssembler::new(public_key).assemble(block, rng)
}
