// ## 📂 File: `src/pinblock/mod.rs`

//! pinblock/mod.rs
//! Obfuscated fixed-length PIN block.

pub mod types;
pub mod encode;

pub use types::*;
pub use encode::*;
