use thiserror::Error;

use crate::{
    crypto::CryptoError,
    pinblock::PinBlockError,
    service::ConfigError,
};

/// Internal failures of the PIN service. Weak PINs are never reported here;
/// they come back as a normal result record with a rejection code.
///
/// Messages carry no PIN digits, block contents or key material.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Identity or recipient key misconfigured.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Block encoding failed (random source or draw budget).
    #[error("pin block error: {0}")]
    PinBlock(#[from] PinBlockError),

    /// AEAD, key wrap, or random source failure.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Result record could not be rendered.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
