// ## 📂 File: `src/service/result.rs`

//! service/result.rs
//! Result record handed back to the caller.
//!
//! The envelope fields and the subject id are present only on success;
//! absent fields are omitted from JSON rather than written as `null`.

use serde::{Deserialize, Serialize};

use crate::crypto::Envelope;
use crate::validation::{ErrorCode, ErrorInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionResult {
    pub version: String,
    pub error: ErrorInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
}

impl EncryptionResult {
    pub fn rejected(version: &str, code: ErrorCode) -> Self {
        Self {
            version: version.to_string(),
            error: code.into(),
            subject_id: None,
            encrypted_pin: None,
            session_key: None,
        }
    }

    pub fn accepted(version: &str, subject_id: &str, envelope: Envelope) -> Self {
        Self {
            version: version.to_string(),
            error: ErrorCode::Success.into(),
            subject_id: Some(subject_id.to_string()),
            encrypted_pin: Some(envelope.encrypted_pin),
            session_key: Some(envelope.session_key),
        }
    }

    /// Typed code, `None` only if the record was built from an unknown code.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::try_from(self.error.code).ok()
    }

    pub fn is_success(&self) -> bool {
        self.error.code == ErrorCode::Success.code()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_record_omits_envelope_fields() {
        let record = EncryptionResult::rejected("v", ErrorCode::PinIsPattern);
        let json = record.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"version":"v","error":{"code":105,"description":"The pin is a pattern"}}"#
        );
    }

    #[test]
    fn accepted_record_uses_camel_case() {
        let record = EncryptionResult::accepted(
            "v",
            "subject",
            Envelope {
                encrypted_pin: "AAAA".into(),
                session_key: "BBBB".into(),
            },
        );
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["error"]["code"], 0);
        assert_eq!(value["subjectId"], "subject");
        assert_eq!(value["encryptedPin"], "AAAA");
        assert_eq!(value["sessionKey"], "BBBB");
        assert!(record.is_success());
    }
}
