// ## 📂 File: `src/service/encryptor.rs`

//! service/encryptor.rs
//! `EncryptionService`: validate → encode block → assemble envelope.
//!
//! Design notes:
//! - The service only reads its `ServiceConfig`; one instance can serve any
//!   number of threads (`Send + Sync`, no interior mutability).
//! - Randomness is created per call (`OsRng`) unless the caller injects a source.
//! - Weak PINs return `Ok` with a rejection code; only internal failures return `Err`.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use tracing::{debug, info, warn};

use crate::constants::PIN_BLOCK_LEN;
use crate::crypto::{Envelope, EnvelopeAssembler, RandomSource};
use crate::pinblock::encode_pin_block_counted;
use crate::service::config::{ServiceConfig, ServiceSettings};
use crate::service::result::EncryptionResult;
use crate::telemetry::{Stage, Telemetry};
use crate::types::ServiceError;
use crate::validation::ValidationOutcome;

#[derive(Debug, Clone)]
pub struct EncryptionService {
    config: ServiceConfig,
}

impl EncryptionService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        Ok(Self::new(ServiceConfig::from_settings(settings)?))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn version(&self) -> &str {
        self.config.version()
    }

    pub fn subject_id(&self) -> &str {
        self.config.subject_id()
    }

    /// Run only the weak-PIN rules.
    pub fn classify(&self, pin: &str) -> ValidationOutcome {
        self.config.validator().classify(pin)
    }

    pub fn process(&self, pin: &str) -> Result<EncryptionResult, ServiceError> {
        self.process_with_rng(pin, &mut OsRng)
    }

    /// `process`, rendered as the JSON result record.
    pub fn process_json(&self, pin: &str) -> Result<String, ServiceError> {
        Ok(self.process(pin)?.to_json()?)
    }

    pub fn process_with_rng<R: RandomSource>(
        &self,
        pin: &str,
        rng: &mut R,
    ) -> Result<EncryptionResult, ServiceError> {
        let mut telemetry = Telemetry::new();
        self.process_instrumented(pin, rng, &mut telemetry)
    }

    /// `process` with caller-owned telemetry (one per worker, merged by the caller).
    pub fn process_instrumented<R: RandomSource>(
        &self,
        pin: &str,
        rng: &mut R,
        telemetry: &mut Telemetry,
    ) -> Result<EncryptionResult, ServiceError> {
        telemetry.counters.add_request();

        let outcome = telemetry.timer.time(Stage::Validate, || self.classify(pin));

        if let ValidationOutcome::Rejected(code) = outcome {
            telemetry.counters.add_rejection(code);
            info!(code = code.code(), "pin rejected");
            return Ok(EncryptionResult::rejected(self.version(), code));
        }

        match self.seal(pin, rng, telemetry) {
            Ok(envelope) => {
                info!(code = 0, "pin accepted");
                Ok(EncryptionResult::accepted(self.version(), self.subject_id(), envelope))
            }
            Err(e) => {
                telemetry.counters.add_internal_failure();
                warn!(error = %e, "pin encryption failed");
                Err(e)
            }
        }
    }

    fn seal<R: RandomSource>(
        &self,
        pin: &str,
        rng: &mut R,
        telemetry: &mut Telemetry,
    ) -> Result<Envelope, ServiceError> {
        let (block, draws) = telemetry
            .timer
            .time(Stage::Encode, || encode_pin_block_counted(pin, rng))?;
        debug!(draws, "pin block encoded");

        let envelope = EnvelopeAssembler::new(self.config.public_key())
            .assemble_timed(&block, rng, &mut telemetry.timer)?;

        telemetry
            .counters
            .add_accepted(draws, PIN_BLOCK_LEN, self.config.public_key().size());
        Ok(envelope)
    }
}
