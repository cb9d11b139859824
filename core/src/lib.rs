//! pin-core
//!
//! Weak-PIN screening, PIN block encoding and hybrid (AES-GCM + RSA-OAEP)
//! envelope assembly. No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Pipeline stages
pub mod validation;
pub mod pinblock;
pub mod crypto;
pub mod telemetry;

// Composition root
pub mod service;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::VERSION;
    pub use crate::service::{EncryptionResult, EncryptionService, ServiceConfig, ServiceSettings};
    pub use crate::telemetry::{Telemetry, TelemetrySnapshot};
    pub use crate::types::ServiceError;
    pub use crate::validation::{ErrorCode, PinValidator, ReferenceYear, ValidationOutcome};
}
