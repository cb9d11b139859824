// ## 📂 File: `src/validation/mod.rs`

//! validation/mod.rs
//! Weak-PIN screening: result codes, the ordered rule chain, and the validator.

pub mod types;
pub mod rules;
pub mod validator;

pub use types::*;
pub use rules::*;
pub use validator::*;
