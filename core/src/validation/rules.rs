// ## 📂 File: `src/validation/rules.rs`

//! validation/rules.rs
//! Individual weak-PIN predicates and the ordered chain that runs them.
//!
//! Design notes:
//! - Every predicate is a plain `fn` returning `true` when the PIN is weak.
//! - Predicates after `TooLong` assume an all-digit PIN of 4..=9 characters;
//!   the chain order guarantees that.
//! - `RULE_CHAIN` order is part of the contract: the first match decides the code.

use crate::constants::{birth_window, keypad, COMMON_PINS, MAX_PIN_LEN, MIN_PIN_LEN};
use crate::validation::types::{Pin, WeakPinRule};

/// Ambient inputs some rules need.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuleContext {
    /// Calendar year the birth-year window is measured from.
    pub reference_year: i32,
}

pub type RuleFn = fn(&Pin<'_>, &RuleContext) -> bool;

/// The rule chain, in evaluation order.
pub const RULE_CHAIN: &[(WeakPinRule, RuleFn)] = &[
    (WeakPinRule::TooShort, is_too_short),
    (WeakPinRule::NotNumeric, is_not_numeric),
    (WeakPinRule::TooLong, is_too_long),
    (WeakPinRule::TooManyDuplicates, has_too_many_duplicates),
    (WeakPinRule::Sequence, is_sequence),
    (WeakPinRule::RepeatedBlock, is_repeated_block),
    (WeakPinRule::PairedDigits, is_paired_digits),
    (WeakPinRule::Keypad, is_keypad_pattern),
    (WeakPinRule::Birthdate, is_likely_birth_year),
    (WeakPinRule::Common, is_common),
];

/// Run the chain and return the first rule that matches.
pub fn first_weak_rule(pin: &Pin<'_>, ctx: &RuleContext) -> Option<WeakPinRule> {
    RULE_CHAIN
        .iter()
        .find(|(_, matches)| matches(pin, ctx))
        .map(|(rule, _)| *rule)
}

pub fn is_too_short(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    pin.len() < MIN_PIN_LEN
}

pub fn is_too_long(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    pin.len() > MAX_PIN_LEN
}

pub fn is_not_numeric(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    !pin.is_numeric()
}

/// Any digit value appearing more than twice anywhere in the PIN.
pub fn has_too_many_duplicates(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    let mut counts = [0u8; 10];
    for d in pin.digits() {
        counts[d as usize] += 1;
        if counts[d as usize] > 2 {
            return true;
        }
    }
    false
}

/// Arithmetic progression, either on raw digits or with `0` read as `10`
/// (catches `7890`-style runs off the end of the keypad row).
pub fn is_sequence(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    let raw: Vec<i8> = pin.digits().map(|d| d as i8).collect();
    if has_constant_step(&raw) {
        return true;
    }
    let wrapped: Vec<i8> = raw.iter().map(|&d| if d == 0 { 10 } else { d }).collect();
    has_constant_step(&wrapped)
}

fn has_constant_step(digits: &[i8]) -> bool {
    let mut steps = digits.windows(2).map(|w| w[1] - w[0]);
    match steps.next() {
        Some(first) => steps.all(|s| s == first),
        None => true,
    }
}

/// `ABAB…`: every 2-character chunk equals the first one. An odd trailing
/// character is a 1-character chunk and therefore never matches.
pub fn is_repeated_block(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    let bytes = pin.as_str().as_bytes();
    let mut chunks = bytes.chunks(2);
    match chunks.next() {
        Some(first) => chunks.all(|c| c == first),
        None => true,
    }
}

/// `AABB` over the first four characters only.
pub fn is_paired_digits(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    match pin.as_str().as_bytes() {
        [a, b, c, d, ..] => a == b && c == d,
        _ => false,
    }
}

/// All four keypad corners present, or the middle column typed straight through.
pub fn is_keypad_pattern(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    let s = pin.as_str();
    if keypad::CORNERS.iter().all(|&c| s.contains(c)) {
        return true;
    }
    keypad::MIDDLE_COLUMN.contains(&s)
}

/// Value falls inside the birth years of someone aged 25..=60.
pub fn is_likely_birth_year(pin: &Pin<'_>, ctx: &RuleContext) -> bool {
    let year = i64::from(ctx.reference_year);
    let lower = year - i64::from(birth_window::MAX_AGE);
    let upper = year - i64::from(birth_window::MIN_AGE);
    match pin.as_str().parse::<i64>() {
        Ok(value) => (lower..=upper).contains(&value),
        Err(_) => false,
    }
}

pub fn is_common(pin: &Pin<'_>, _ctx: &RuleContext) -> bool {
    COMMON_PINS.contains(&pin.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: RuleContext = RuleContext { reference_year: 2020 };

    fn check(rule: RuleFn, pin: &str) -> bool {
        rule(&Pin::new(pin), &CTX)
    }

    #[test]
    fn duplicates_counted_across_whole_pin() {
        assert!(check(has_too_many_duplicates, "1112"));
        // third occurrence is outside the first two characters
        assert!(check(has_too_many_duplicates, "3545657"));
        assert!(!check(has_too_many_duplicates, "112233"));
    }

    #[test]
    fn sequence_detects_both_directions_and_wrap() {
        assert!(check(is_sequence, "1234"));
        assert!(check(is_sequence, "4321"));
        assert!(check(is_sequence, "7890"));
        assert!(check(is_sequence, "0987"));
        assert!(check(is_sequence, "2468"));
        assert!(!check(is_sequence, "2580"));
        assert!(!check(is_sequence, "5820"));
    }

    #[test]
    fn repeated_block_needs_even_split() {
        assert!(check(is_repeated_block, "1212"));
        assert!(check(is_repeated_block, "565656"));
        assert!(!check(is_repeated_block, "12121"));
        assert!(!check(is_repeated_block, "1213"));
    }

    #[test]
    fn paired_digits_only_looks_at_prefix() {
        assert!(check(is_paired_digits, "1122"));
        assert!(check(is_paired_digits, "112245"));
        assert!(!check(is_paired_digits, "1223"));
        assert!(!check(is_paired_digits, "11"));
    }

    #[test]
    fn keypad_corners_any_order() {
        assert!(check(is_keypad_pattern, "9713"));
        assert!(check(is_keypad_pattern, "519370"));
        assert!(check(is_keypad_pattern, "2580"));
        assert!(check(is_keypad_pattern, "0852"));
        assert!(!check(is_keypad_pattern, "25800"));
        assert!(!check(is_keypad_pattern, "1374"));
    }

    #[test]
    fn birth_year_window_is_inclusive() {
        // 2020 → [1960, 1995]
        assert!(check(is_likely_birth_year, "1960"));
        assert!(check(is_likely_birth_year, "1995"));
        assert!(!check(is_likely_birth_year, "1959"));
        assert!(!check(is_likely_birth_year, "1996"));
        assert!(check(is_likely_birth_year, "001980"));
    }

    #[test]
    fn birth_year_window_survives_extreme_years() {
        for reference_year in [i32::MIN, i32::MAX] {
            let ctx = RuleContext { reference_year };
            assert!(!is_likely_birth_year(&Pin::new("1980"), &ctx));
        }
        let ctx = RuleContext { reference_year: i32::MIN };
        assert!(!is_likely_birth_year(&Pin::new("0000"), &ctx));
    }

    #[test]
    fn chain_order_matches_rule_list() {
        let order: Vec<WeakPinRule> = RULE_CHAIN.iter().map(|(r, _)| *r).collect();
        assert_eq!(order[0], WeakPinRule::TooShort);
        assert_eq!(order[1], WeakPinRule::NotNumeric);
        assert_eq!(order[2], WeakPinRule::TooLong);
        assert_eq!(*order.last().unwrap(), WeakPinRule::Common);
    }
}
