mod common;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use rand::rngs::OsRng;

    use crate::common::{open_envelope, recipient, recipient_public, ConstantRng};
    use pin_core::constants::VERSION;
    use pin_core::crypto::Envelope;
    use pin_core::prelude::*;
    use pin_core::service::ConfigError;
    use pin_core::telemetry::Stage;

    fn service(year: i32) -> EncryptionService {
        let config = ServiceConfig::with_public_key("subject-1", recipient_public())
            .unwrap()
            .with_validator(PinValidator::with_reference_year(ReferenceYear::Fixed(year)));
        EncryptionService::new(config)
    }

    #[test]
    fn rejected_pin_returns_code_only() {
        let svc = service(2020);
        let record = svc.process("1234").unwrap();
        assert_eq!(record.version, VERSION);
        assert_eq!(record.error_code(), Some(ErrorCode::PinIsSequence));
        assert_eq!(record.error.description, "The pin is a sequence");
        assert!(record.subject_id.is_none());
        assert!(record.encrypted_pin.is_none());
        assert!(record.session_key.is_none());
    }

    #[test]
    fn every_rejection_leaves_envelope_empty() {
        let svc = service(2020);
        for pin in ["12", "12a4", "1111", "4321", "1212", "1122", "2580", "1975", "1004", "5820374619"] {
            let record = svc.process(pin).unwrap();
            assert!(!record.is_success(), "{}", pin);
            assert!(record.subject_id.is_none() && record.encrypted_pin.is_none() && record.session_key.is_none());
        }
    }

    #[test]
    fn accepted_pin_round_trips() {
        let svc = service(2020);
        let record = svc.process("5820").unwrap();
        assert_eq!(record.error_code(), Some(ErrorCode::Success));
        assert_eq!(record.subject_id.as_deref(), Some("subject-1"));

        let envelope = Envelope {
            encrypted_pin: record.encrypted_pin.unwrap(),
            session_key: record.session_key.unwrap(),
        };
        let block = String::from_utf8(open_envelope(recipient(), &envelope)).unwrap();
        assert_eq!(block.len(), 50);
        assert!(block.starts_with('4'));

        let nibbles: Vec<usize> = block.chars().map(|c| c.to_digit(16).unwrap() as usize).collect();
        let recovered: String = (0..4)
            .map(|i| block.as_bytes()[1 + 4 + nibbles[1 + i]] as char)
            .collect();
        assert_eq!(recovered, "5820");
    }

    #[test]
    fn json_record_shape() {
        let svc = service(2020);
        let json = svc.process_json("5820").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"]["code"], 0);
        assert_eq!(value["subjectId"], "subject-1");
        assert!(value["encryptedPin"].is_string());
        assert!(value["sessionKey"].is_string());

        let json = svc.process_json("2580").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"]["code"], 106);
        assert!(value.get("subjectId").is_none());
    }

    #[test]
    fn internal_failure_is_an_error_not_a_rejection() {
        let svc = service(2020);
        let mut telemetry = Telemetry::new();
        let err = svc
            .process_instrumented("5820", &mut ConstantRng, &mut telemetry)
            .unwrap_err();
        assert!(matches!(err, ServiceError::PinBlock(_)));
        assert_eq!(telemetry.counters.internal_failures, 1);
        assert_eq!(telemetry.counters.accepted, 0);
    }

    #[test]
    fn telemetry_tracks_outcomes() {
        let svc = service(2020);
        let mut telemetry = Telemetry::new();
        for pin in ["5820", "1234", "0385", "2580"] {
            svc.process_instrumented(pin, &mut OsRng, &mut telemetry).unwrap();
        }
        telemetry.timer.finish();

        let snap = telemetry.snapshot();
        assert_eq!(snap.counters.requests, 4);
        assert_eq!(snap.counters.accepted, 2);
        assert_eq!(snap.counters.rejected_with(ErrorCode::PinIsSequence), 1);
        assert_eq!(snap.counters.rejected_with(ErrorCode::PinIsPinpadPattern), 1);
        assert!(snap.counters.position_map_draws >= 2);
        assert_eq!(snap.counters.bytes_ciphertext, 100);
        assert!((snap.rejection_rate - 0.5).abs() < f64::EPSILON);
        assert!(snap.has_all_stages(&[Stage::Validate, Stage::Encode, Stage::Seal, Stage::Wrap]));
        assert!(snap.sanity_check());
    }

    #[test]
    fn shared_across_threads() {
        let svc = Arc::new(service(2020));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || {
                    let mut telemetry = Telemetry::new();
                    let record = svc.process_instrumented("9174", &mut OsRng, &mut telemetry).unwrap();
                    (record, telemetry)
                })
            })
            .collect();

        let mut total = Telemetry::new();
        let mut pins = Vec::new();
        for h in handles {
            let (record, telemetry) = h.join().unwrap();
            assert!(record.is_success());
            pins.push(record.encrypted_pin.unwrap());
            total.merge(&telemetry);
        }
        assert_eq!(total.counters.accepted, 4);
        pins.sort();
        pins.dedup();
        assert_eq!(pins.len(), 4);
    }

    #[test]
    fn default_settings_use_embedded_key() {
        let svc = EncryptionService::from_settings(&ServiceSettings::default()).unwrap();
        let record = svc.process("0385").unwrap();
        assert!(record.is_success());
        assert_eq!(svc.subject_id(), pin_core::constants::DEFAULT_SUBJECT_ID);
    }

    #[test]
    fn undersized_key_rejected_at_construction() {
        let small = rsa::RsaPrivateKey::new(&mut OsRng, 1024).unwrap();
        let err = ServiceConfig::with_public_key("s", small.to_public_key()).unwrap_err();
        assert!(matches!(err, ConfigError::Key(_)));
    }

    #[test]
    fn service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EncryptionService>();
    }
}
