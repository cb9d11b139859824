// ## 📂 File: `src/crypto/random.rs`

//! crypto/random.rs
//! Random source seam.
//!
//! Any `RngCore + CryptoRng` qualifies. Production code uses `OsRng`, which is
//! zero-sized and created per call, so nothing is shared between requests.
//! All draws go through `try_fill_bytes` so a failing source surfaces as
//! `CryptoError::RandomSource` instead of a panic.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto::types::CryptoError;

/// Marker for cryptographically secure generators.
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> RandomSource for T {}

/// Fill `buf` with random bytes.
pub fn fill_random<R: RandomSource>(rng: &mut R, buf: &mut [u8]) -> Result<(), CryptoError> {
    rng.try_fill_bytes(buf)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))
}

/// Fill `out` with uniform nibbles (0..=15). 256 is a multiple of 16, so masking keeps the draw uniform.
pub fn fill_random_nibbles<R: RandomSource>(rng: &mut R, out: &mut [u8]) -> Result<(), CryptoError> {
    fill_random(rng, out)?;
    for b in out.iter_mut() {
        *b &= 0x0F;
    }
    Ok(())
}

/// Fresh secret array, wiped on drop.
pub fn random_secret<const N: usize, R: RandomSource>(
    rng: &mut R,
) -> Result<Zeroizing<[u8; N]>, CryptoError> {
    let mut secret = Zeroizing::new([0u8; N]);
    fill_random(rng, &mut secret[..])?;
    Ok(secret)
}
