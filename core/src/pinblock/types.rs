// ## 📂 File: `src/pinblock/types.rs`

//! pinblock/types.rs
//! The 50-nibble PIN block and its error type.
//!
//! Zones (n = PIN length):
//! - `[0]`          PIN length, single decimal digit
//! - `[1..=n]`      position map, pairwise distinct nibbles
//! - `[1+n..50]`    padding; cell `1 + n + map[i]` holds PIN digit `i`

use std::fmt;
use zeroize::{Zeroize, Zeroizing};

use crate::constants::PIN_BLOCK_LEN;
use crate::utils::nibble_to_hex;

/// Encoded PIN block. The nibbles are wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PinBlock {
    nibbles: [u8; PIN_BLOCK_LEN],
}

impl PinBlock {
    pub(crate) fn from_nibbles(nibbles: [u8; PIN_BLOCK_LEN]) -> Self {
        Self { nibbles }
    }

    pub fn nibbles(&self) -> &[u8; PIN_BLOCK_LEN] {
        &self.nibbles
    }

    /// PIN length stored in cell 0.
    pub fn pin_len(&self) -> usize {
        self.nibbles[0] as usize
    }

    pub fn position_map(&self) -> &[u8] {
        &self.nibbles[1..=self.pin_len()]
    }

    /// Offset of the padding zone.
    pub fn padding_start(&self) -> usize {
        1 + self.pin_len()
    }

    /// Uppercase hex rendering, one character per nibble.
    pub fn to_hex_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.nibbles.iter().map(|&n| nibble_to_hex(n)).collect())
    }
}

impl Drop for PinBlock {
    fn drop(&mut self) {
        self.nibbles.zeroize();
    }
}

impl fmt::Debug for PinBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PinBlock([REDACTED; {}])", PIN_BLOCK_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinBlockError {
    /// PIN is empty, longer than the length cell can express, or not all digits.
    InvalidPin { len: usize },

    /// No duplicate-free position map within the draw budget.
    PositionMapExhausted { attempts: usize },

    /// The random source failed.
    RandomSource(String),
}

impl fmt::Display for PinBlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinBlockError::InvalidPin { len } =>
                write!(f, "pin cannot be block-encoded (length {})", len),
            PinBlockError::PositionMapExhausted { attempts } =>
                write!(f, "no distinct position map after {} attempts", attempts),
            PinBlockError::RandomSource(msg) =>
                write!(f, "random source failure: {}", msg),
        }
    }
}

impl std::error::Error for PinBlockError {}

impl From<crate::crypto::CryptoError> for PinBlockError {
    fn from(e: crate::crypto::CryptoError) -> Self {
        PinBlockError::RandomSource(e.to_string())
    }
}
