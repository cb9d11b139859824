// ## 📂 File: `src/service/mod.rs`

//! service/mod.rs
//! Composition root: configuration, result record, and the encryption service.

pub mod config;
pub mod result;
pub mod encryptor;

pub use config::*;
pub use result::*;
pub use encryptor::*;
