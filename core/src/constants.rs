// ## 📂 File: `src/constants.rs`

//! constants.rs
//! Wire-visible constants shared by validation, block encoding and the service.

/// Version string stamped into every result record.
pub const VERSION: &str = "rs-v1.0.1";

/// Subject id used when a caller does not configure one.
pub const DEFAULT_SUBJECT_ID: &str = "123aaa33198dc8f3s4k77dsc78";

/// Base64 of the PEM (SPKI) RSA-4096 public key the verifier side publishes.
pub const EMBEDDED_PUBLIC_KEY_B64: &str =
    "LS0tLS1CRUdJTiBQVUJMSUMgS0VZLS0tLS0KTUlJQ0lqQU5CZ2txaGtpRzl3MEJBUUVGQUFPQ0FnOEFNSUlDQ2dLQ0FnRUEzbm1YdUxRN0RGa2JlZC8rcGdBKwpqUGNPZ2pYaGxEaXVYRFVZNThBVGU0SDF3ZWxJalVBTTNyZkZsd3RVUVhXQ1NTeGtNb0NPK016V1pTblpOdFYxCm9BZnZ4a2t6MFErQkpUSENCTHpzMnpvUzlrMXM3cVZEbUJVdnV2VmVrZUZBUkkzV2lOeE52RTdWYTJWU1dqRjcKZ3hYTDBTVTFKUk8xTFJSb0N4WTI4dFFFcTg1bXVJUmpFQXNjLzRkL0hjY1NWUkRTaDFuQmNsMVVjZWxQVW9HZgpObjlCODBBZXJlMnBJYWRiQXVBSEZBZWc1WnUyb2haOGNXVHhKUUVJQlMwZFlyWWN6ZTZXdVBiRk9OYWpacXN6CnFqTWhLblV1bTV4Q1U2YXZRZUxJc0JoUlNkVEpBN09IVFJwemgvSlBuYzJUYXpxYlFVWVR0R1Iwb1BHRmQwaEIKSjZpMjAwdVgxSWcybURQZGRGd1EzZk1nYWxUSVcyeTNDMEhjR0JMbVQrUjVGZkh0c0dpanVTdG5zZTU3NFdSQQpUaDNFaURxSk03TXY4eWdVQUNSZWxaKzNlZEJoTnBWNFEwZS95aHp5ZGRvMFRQMmFDaExPb0dlQ0xEU3IxcTFRCnFJZnNjSWp2VGwvMVdoYVU2aXlYc0t3Yjl5SkJiNGpuQjBvVm5YS25SVzNRd1B1d1QzNG9oc2REZkV1dmwxWVMKU09CSDNRWHcxTWp1TjFXL251NkFtN1pobFdPM3ArNFlNMDdnVGFlcjNwTFljK1JnbnZ3V3IvL3IxenRSakhwUgo2UlZYS0ZDRW5SUWQzSUtDY01WM3RjQzFlU1RuOWh5Z0kybStoTC9abWpoeDIvdW04MXlYdWJnSERIUmNCZ3lPCnZpdVh4ZzI5VFZSSFZvM0FNZDArK2RFQ0F3RUFBUT09Ci0tLS0tRU5EIFBVQkxJQyBLRVktLS0tLQo=";

/// Shortest PIN accepted by the length rule.
pub const MIN_PIN_LEN: usize = 4;
/// Longest PIN whose length still fits the single-digit length cell of the block.
pub const MAX_PIN_LEN: usize = 9;

/// Number of nibbles in an encoded PIN block.
pub const PIN_BLOCK_LEN: usize = 50;
/// Upper bound on position-map draws before block encoding gives up.
/// At n = 9 a draw succeeds with p ≈ 0.06, so exhaustion is ~e^-63.
pub const MAX_POSITION_MAP_ATTEMPTS: usize = 1024;

/// Smallest RSA modulus the service accepts as recipient key.
pub const MIN_RSA_BITS: usize = 2048;

/// Keypad rules.
pub mod keypad {
    /// The four corner keys of a 3x3+0 keypad.
    pub const CORNERS: [char; 4] = ['1', '3', '7', '9'];
    /// The middle column, top-down and bottom-up.
    pub const MIDDLE_COLUMN: [&str; 2] = ["2580", "0852"];
}

/// Birth-year window, in years before the reference year.
pub mod birth_window {
    pub const MIN_AGE: i32 = 25;
    pub const MAX_AGE: i32 = 60;
}

/// PINs rejected for being among the most frequently chosen.
pub const COMMON_PINS: [&str; 2] = ["1004", "2001"];

/// Stable result codes (mirrored in `validation::ErrorCode`).
pub mod error_codes {
    pub const SUCCESS: u16                 = 0;
    pub const PIN_TOO_SHORT: u16           = 101;
    pub const PIN_CONTAINS_LETTERS: u16    = 102;
    pub const PIN_TOO_MANY_DUPLICATES: u16 = 103;
    pub const PIN_IS_SEQUENCE: u16         = 104;
    pub const PIN_IS_PATTERN: u16          = 105;
    pub const PIN_IS_PINPAD_PATTERN: u16   = 106;
    pub const PIN_IS_BIRTHDATE: u16        = 107;
    pub const PIN_USED_OFTEN: u16          = 108;
    pub const PIN_TOO_LONG: u16            = 109;
}
