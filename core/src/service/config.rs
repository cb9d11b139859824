// ## 📂 File: `src/service/config.rs`

//! service/config.rs
//! Immutable service identity.
//!
//! `ServiceSettings` is the plain, deserializable form (JSON or built in code);
//! `ServiceConfig` is the validated form with the recipient key already parsed.
//! Both are built once at startup and never mutated.

use std::fmt;

use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUBJECT_ID, EMBEDDED_PUBLIC_KEY_B64, MIN_RSA_BITS, VERSION};
use crate::crypto::pubkey::{decode_public_key_b64, modulus_bits};
use crate::crypto::CryptoError;
use crate::validation::{PinValidator, ReferenceYear};

/// Raw settings. Missing fields fall back to the embedded defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceSettings {
    pub version: String,
    pub subject_id: String,
    /// Base64 of a PEM RSA public key.
    pub public_key: String,
    /// Pin the birth-year rule to a fixed year instead of the local calendar.
    pub reference_year: Option<i32>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            version: VERSION.to_string(),
            subject_id: DEFAULT_SUBJECT_ID.to_string(),
            public_key: EMBEDDED_PUBLIC_KEY_B64.to_string(),
            reference_year: None,
        }
    }
}

impl ServiceSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Validated identity the service holds for its lifetime.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    version: String,
    subject_id: String,
    public_key: RsaPublicKey,
    validator: PinValidator,
}

impl ServiceConfig {
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ConfigError> {
        if settings.version.trim().is_empty() {
            return Err(ConfigError::EmptyField("version"));
        }
        if settings.subject_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("subjectId"));
        }

        let public_key = decode_public_key_b64(&settings.public_key)?;
        Self::check_key_size(&public_key)?;

        let reference_year = match settings.reference_year {
            Some(year) => ReferenceYear::Fixed(year),
            None => ReferenceYear::Local,
        };

        Ok(Self {
            version: settings.version.clone(),
            subject_id: settings.subject_id.clone(),
            public_key,
            validator: PinValidator::with_reference_year(reference_year),
        })
    }

    /// Build from an already-parsed key (e.g. one held by the caller's keystore).
    pub fn with_public_key(
        subject_id: impl Into<String>,
        public_key: RsaPublicKey,
    ) -> Result<Self, ConfigError> {
        let subject_id = subject_id.into();
        if subject_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("subjectId"));
        }
        Self::check_key_size(&public_key)?;
        Ok(Self {
            version: VERSION.to_string(),
            subject_id,
            public_key,
            validator: PinValidator::new(),
        })
    }

    pub fn with_validator(mut self, validator: PinValidator) -> Self {
        self.validator = validator;
        self
    }

    fn check_key_size(key: &RsaPublicKey) -> Result<(), ConfigError> {
        let bits = modulus_bits(key);
        if bits < MIN_RSA_BITS {
            return Err(ConfigError::Key(CryptoError::KeyTooSmall {
                bits,
                min_bits: MIN_RSA_BITS,
            }));
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    pub fn validator(&self) -> &PinValidator {
        &self.validator
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// Settings text could not be parsed.
    Parse(String),

    /// A required field is blank.
    EmptyField(&'static str),

    /// Recipient key unusable.
    Key(CryptoError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "settings parse error: {}", msg),
            ConfigError::EmptyField(field) => write!(f, "required field '{}' is empty", field),
            ConfigError::Key(e) => write!(f, "recipient key: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Key(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CryptoError> for ConfigError {
    fn from(e: CryptoError) -> Self {
        ConfigError::Key(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_config() {
        let config = ServiceConfig::from_settings(&ServiceSettings::default()).unwrap();
        assert_eq!(config.version(), VERSION);
        assert_eq!(config.subject_id(), DEFAULT_SUBJECT_ID);
        assert_eq!(config.validator().reference_year(), ReferenceYear::Local);
    }

    #[test]
    fn json_settings_fill_missing_fields() {
        let settings = ServiceSettings::from_json(r#"{"subjectId":"abc","referenceYear":2020}"#).unwrap();
        assert_eq!(settings.subject_id, "abc");
        assert_eq!(settings.reference_year, Some(2020));
        assert_eq!(settings.public_key, EMBEDDED_PUBLIC_KEY_B64);

        let config = ServiceConfig::from_settings(&settings).unwrap();
        assert_eq!(config.validator().reference_year(), ReferenceYear::Fixed(2020));
    }

    #[test]
    fn extreme_reference_year_still_classifies() {
        let settings = ServiceSettings::from_json(r#"{"referenceYear":-2147483648}"#).unwrap();
        let config = ServiceConfig::from_settings(&settings).unwrap();
        assert!(config.validator().classify("1980").is_accepted());
    }

    #[test]
    fn blank_subject_is_rejected() {
        let settings = ServiceSettings {
            subject_id: "  ".into(),
            ..ServiceSettings::default()
        };
        assert!(matches!(
            ServiceConfig::from_settings(&settings),
            Err(ConfigError::EmptyField("subjectId"))
        ));
    }

    #[test]
    fn bad_key_is_a_config_error() {
        let settings = ServiceSettings {
            public_key: "AAAA".into(),
            ..ServiceSettings::default()
        };
        assert!(matches!(
            ServiceConfig::from_settings(&settings),
            Err(ConfigError::Key(CryptoError::InvalidPublicKey(_)))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ServiceSettings::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
