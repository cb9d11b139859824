// ## src/telemetry/snapshot.rs

//! telemetry/snapshot.rs
//! Immutable view over counters and stage timings.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    /// Rejected / requests, 0.0 when nothing ran.
    pub rejection_rate: f64,
    /// Mean position-map draws per accepted PIN.
    pub mean_position_map_draws: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let rejection_rate = if counters.requests > 0 {
            counters.rejected_total() as f64 / counters.requests as f64
        } else {
            0.0
        };

        let mean_draws = if counters.accepted > 0 {
            counters.position_map_draws as f64 / counters.accepted as f64
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            rejection_rate,
            mean_position_map_draws: mean_draws,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal consistency:
    /// - every request ended as accepted, rejected or failed
    /// - stage time never exceeds wall time
    pub fn sanity_check(&self) -> bool {
        let c = &self.counters;
        c.accepted + c.rejected_total() + c.internal_failures == c.requests
            && self.total_stage_time() <= self.elapsed
    }
}
