//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for PIN requests.
//!
//! Telemetry is owned by the caller (one per worker) and merged afterwards;
//! the service itself holds no mutable state.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;

/// Counters and timer travelling together through `process_instrumented`.
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    pub counters: TelemetryCounters,
    pub timer: TelemetryTimer,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another worker's telemetry into this one.
    pub fn merge(&mut self, other: &Telemetry) {
        self.counters.merge(&other.counters);
        self.timer.stage_times.merge(&other.timer.stage_times);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(&self.counters, &self.timer)
    }
}
