pub mod types;
pub mod random;
pub mod aead;
pub mod keywrap;
pub mod pubkey;
pub mod envelope;

pub use types::*;
pub use random::*;
pub use aead::*;
pub use keywrap::*;
pub use pubkey::*;
pub use envelope::*;
