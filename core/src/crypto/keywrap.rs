// ## 📂 File: `src/crypto/keywrap.rs`

//! crypto/keywrap.rs
//! Key-wrap plaintext layout and RSA-OAEP(SHA-256) wrapping.
//!
//! Layout: `len(key) ∥ key ∥ len(iv) ∥ iv ∥ len(tag) ∥ tag`, each length one byte.

use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::crypto::random::RandomSource;
use crate::crypto::types::{CryptoError, KEY_WRAP_PLAINTEXT_LEN, OAEP_HASH_LEN};

/// Serialized key material for the recipient. Wiped on drop.
pub struct KeyWrapPlaintext(Zeroizing<Vec<u8>>);

impl KeyWrapPlaintext {
    pub fn build(key: &[u8], iv: &[u8], tag: &[u8]) -> Result<Self, CryptoError> {
        let mut out = Zeroizing::new(Vec::with_capacity(KEY_WRAP_PLAINTEXT_LEN));
        push_prefixed(&mut out, "key", key)?;
        push_prefixed(&mut out, "iv", iv)?;
        push_prefixed(&mut out, "tag", tag)?;
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for KeyWrapPlaintext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyWrapPlaintext([REDACTED; {}])", self.0.len())
    }
}

fn push_prefixed(out: &mut Vec<u8>, field: &'static str, part: &[u8]) -> Result<(), CryptoError> {
    let len = u8::try_from(part.len())
        .map_err(|_| CryptoError::FieldTooLong { field, len: part.len() })?;
    out.push(len);
    out.extend_from_slice(part);
    Ok(())
}

/// Largest message a single OAEP(SHA-256) block can carry under `public_key`.
pub fn max_oaep_payload(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(2 * OAEP_HASH_LEN + 2)
}

/// Encrypt the key-wrap plaintext to the recipient.
pub fn wrap_key_material<R: RandomSource>(
    public_key: &RsaPublicKey,
    plaintext: &KeyWrapPlaintext,
    rng: &mut R,
) -> Result<Vec<u8>, CryptoError> {
    let max = max_oaep_payload(public_key);
    if plaintext.len() > max {
        return Err(CryptoError::PayloadTooLarge {
            max,
            actual: plaintext.len(),
        });
    }

    let wrapped = public_key.encrypt(rng, Oaep::new::<Sha256>(), plaintext.as_bytes())?;
    Ok(wrapped)
}
