// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Per-caller counters for PIN requests.
//!
//! Summary: each worker owns its counters and merges them at the end.
//! Converted into an immutable TelemetrySnapshot on demand.
use std::collections::BTreeMap;
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

use crate::validation::ErrorCode;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub requests: u64,
    pub accepted: u64,
    /// Rejections keyed by result code.
    pub rejected: BTreeMap<u16, u64>,
    pub internal_failures: u64,
    /// Full 50-nibble draws spent on position maps.
    pub position_map_draws: u64,
    pub bytes_ciphertext: u64,
    pub bytes_wrapped: u64,
}

impl TelemetryCounters {
    pub fn add_request(&mut self) {
        self.requests += 1;
    }

    pub fn add_rejection(&mut self, code: ErrorCode) {
        *self.rejected.entry(code.code()).or_insert(0) += 1;
    }

    /// Record one sealed envelope.
    ///
    /// - `draws`: position-map draws the block needed
    /// - `ct_len`: AEAD ciphertext length
    /// - `wrapped_len`: RSA-OAEP output length
    pub fn add_accepted(&mut self, draws: usize, ct_len: usize, wrapped_len: usize) {
        self.accepted += 1;
        self.position_map_draws += draws as u64;
        self.bytes_ciphertext += ct_len as u64;
        self.bytes_wrapped += wrapped_len as u64;
    }

    pub fn add_internal_failure(&mut self) {
        self.internal_failures += 1;
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected.values().sum()
    }

    pub fn rejected_with(&self, code: ErrorCode) -> u64 {
        self.rejected.get(&code.code()).copied().unwrap_or(0)
    }

    // Workers keep their own counters and merge them at the end, no locks.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.requests += other.requests;
        self.accepted += other.accepted;
        for (code, n) in &other.rejected {
            *self.rejected.entry(*code).or_insert(0) += n;
        }
        self.internal_failures += other.internal_failures;
        self.position_map_draws += other.position_map_draws;
        self.bytes_ciphertext += other.bytes_ciphertext;
        self.bytes_wrapped += other.bytes_wrapped;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
