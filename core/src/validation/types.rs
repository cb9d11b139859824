// ## 📂 File: `src/validation/types.rs`

//! validation/types.rs
//! Result codes, the outcome of the rule chain, and the PIN view the rules read.

use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::error_codes;

/// Stable result codes. `Success` only ever appears in a result record;
/// the rule chain reports the other variants.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ErrorCode {
    Success              = error_codes::SUCCESS,
    PinTooShort          = error_codes::PIN_TOO_SHORT,
    PinContainsLetters   = error_codes::PIN_CONTAINS_LETTERS,
    PinTooManyDuplicates = error_codes::PIN_TOO_MANY_DUPLICATES,
    PinIsSequence        = error_codes::PIN_IS_SEQUENCE,
    PinIsPattern         = error_codes::PIN_IS_PATTERN,
    PinIsPinpadPattern   = error_codes::PIN_IS_PINPAD_PATTERN,
    PinIsBirthdate       = error_codes::PIN_IS_BIRTHDATE,
    PinUsedOften         = error_codes::PIN_USED_OFTEN,
    PinTooLong           = error_codes::PIN_TOO_LONG,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::Success              => "Success",
            ErrorCode::PinTooShort          => "The pin is too short",
            ErrorCode::PinContainsLetters   => "The pin can't contain letters",
            ErrorCode::PinTooManyDuplicates => "The pin has too many duplicates",
            ErrorCode::PinIsSequence        => "The pin is a sequence",
            ErrorCode::PinIsPattern         => "The pin is a pattern",
            ErrorCode::PinIsPinpadPattern   => "The pin is a pattern on the pin pad",
            ErrorCode::PinIsBirthdate       => "The pin is likely a birthdate",
            ErrorCode::PinUsedOften         => "The pin is used too often, to be safe",
            ErrorCode::PinTooLong           => "The pin is too long",
        }
    }

    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// `{code, description}` pair as it appears in the result record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: u16,
    pub description: String,
}

impl From<ErrorCode> for ErrorInfo {
    fn from(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            description: code.description().to_string(),
        }
    }
}

/// Which weak-PIN rule fired. Several rules can share one `ErrorCode`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WeakPinRule {
    TooShort,
    TooLong,
    NotNumeric,
    TooManyDuplicates,
    Sequence,
    RepeatedBlock,
    PairedDigits,
    Keypad,
    Birthdate,
    Common,
}

impl WeakPinRule {
    pub fn error_code(self) -> ErrorCode {
        match self {
            WeakPinRule::TooShort          => ErrorCode::PinTooShort,
            WeakPinRule::TooLong           => ErrorCode::PinTooLong,
            WeakPinRule::NotNumeric        => ErrorCode::PinContainsLetters,
            WeakPinRule::TooManyDuplicates => ErrorCode::PinTooManyDuplicates,
            WeakPinRule::Sequence          => ErrorCode::PinIsSequence,
            WeakPinRule::RepeatedBlock     => ErrorCode::PinIsPattern,
            WeakPinRule::PairedDigits      => ErrorCode::PinIsPattern,
            WeakPinRule::Keypad            => ErrorCode::PinIsPinpadPattern,
            WeakPinRule::Birthdate         => ErrorCode::PinIsBirthdate,
            WeakPinRule::Common            => ErrorCode::PinUsedOften,
        }
    }
}

/// Outcome of running the rule chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(ErrorCode),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// Code for the result record (`Success` when accepted).
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationOutcome::Accepted => ErrorCode::Success,
            ValidationOutcome::Rejected(code) => *code,
        }
    }
}

/// Borrowed candidate PIN. `Debug` never prints the digits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin<'a>(&'a str);

impl<'a> Pin<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Length in characters (not bytes), so multi-byte input is measured the way a user typed it.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Decimal digit values. Non-digit characters are skipped; callers run the
    /// alphabet rule first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + 'a {
        self.0.chars().filter_map(|c| c.to_digit(10)).map(|d| d as u8)
    }
}

impl fmt::Debug for Pin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin([REDACTED])")
    }
}
