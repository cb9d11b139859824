// ## 📂 File: `src/pinblock/encode.rs`

//! pinblock/encode.rs
//! PIN → block encoding by bounded rejection sampling.
//!
//! 1. Draw 50 random nibbles.
//! 2. Redraw all of them while the position map `[1..=n]` has a duplicate,
//!    at most `MAX_POSITION_MAP_ATTEMPTS` times.
//! 3. Cell 0 = n; digit `i` goes to `1 + n + map[i]`.
//!
//! `1 + n + 15 < 50` for every n ≤ 9, so digits never land on the map or past the end.

use zeroize::Zeroizing;

use crate::constants::{MAX_PIN_LEN, MAX_POSITION_MAP_ATTEMPTS, PIN_BLOCK_LEN};
use crate::crypto::random::{fill_random_nibbles, RandomSource};
use crate::pinblock::types::{PinBlock, PinBlockError};

/// Encode an accepted PIN. See [`encode_pin_block_counted`] for the draw count.
pub fn encode_pin_block<R: RandomSource>(pin: &str, rng: &mut R) -> Result<PinBlock, PinBlockError> {
    encode_pin_block_counted(pin, rng).map(|(block, _)| block)
}

/// Encode an accepted PIN and report how many full draws it took.
pub fn encode_pin_block_counted<R: RandomSource>(
    pin: &str,
    rng: &mut R,
) -> Result<(PinBlock, usize), PinBlockError> {
    let digits = pin_digits(pin)?;
    let n = digits.len();

    let mut nibbles = Zeroizing::new([0u8; PIN_BLOCK_LEN]);
    let mut attempts = 0;
    loop {
        if attempts == MAX_POSITION_MAP_ATTEMPTS {
            return Err(PinBlockError::PositionMapExhausted { attempts });
        }
        attempts += 1;
        fill_random_nibbles(rng, &mut nibbles[..])?;
        if all_distinct(&nibbles[1..=n]) {
            break;
        }
    }

    nibbles[0] = n as u8;
    for (i, &digit) in digits.iter().enumerate() {
        let position = nibbles[1 + i] as usize;
        nibbles[1 + n + position] = digit;
    }

    Ok((PinBlock::from_nibbles(*nibbles), attempts))
}

fn pin_digits(pin: &str) -> Result<Zeroizing<Vec<u8>>, PinBlockError> {
    let len = pin.chars().count();
    if len == 0 || len > MAX_PIN_LEN || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinBlockError::InvalidPin { len });
    }
    Ok(Zeroizing::new(pin.bytes().map(|b| b - b'0').collect()))
}

fn all_distinct(nibbles: &[u8]) -> bool {
    let mut seen: u16 = 0;
    for &n in nibbles {
        let bit = 1u16 << n;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}
