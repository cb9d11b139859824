// ## src/telemetry/timers.rs

//! telemetry/timers.rs
//! Wall clock and per-stage durations for PIN requests.
//!
//! A request passes through up to four stages: `Validate` always, then
//! `Encode`, `Seal` and `Wrap` only when the PIN is accepted.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Validate,
    Encode,
    Seal,
    Wrap,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Validate, Stage::Encode, Stage::Seal, Stage::Wrap];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Validate => "validate",
            Stage::Encode => "encode",
            Stage::Seal => "seal",
            Stage::Wrap => "wrap",
        })
    }
}

/// Accumulated time per stage, summed across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes(BTreeMap<Stage, Duration>);

impl StageTimes {
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.0.entry(stage).or_default() += dur;
    }

    pub fn total(&self) -> Duration {
        self.0.values().sum()
    }

    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|stage| self.0.contains_key(stage))
    }

    pub fn merge(&mut self, other: &StageTimes) {
        for (&stage, &dur) in other {
            self.add(stage, dur);
        }
    }
}

impl<'a> IntoIterator for &'a StageTimes {
    type Item = (&'a Stage, &'a Duration);
    type IntoIter = btree_map::Iter<'a, Stage, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
        }
    }

    /// Freeze the wall clock; `elapsed` stops growing afterwards.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Run `f` and charge its duration to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.stage_times.add(stage, started.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        self.end_time
            .unwrap_or_else(Instant::now)
            .duration_since(self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_matching_stages() {
        let mut a = StageTimes::default();
        a.add(Stage::Seal, Duration::from_micros(5));
        let mut b = StageTimes::default();
        b.add(Stage::Seal, Duration::from_micros(7));
        b.add(Stage::Wrap, Duration::from_micros(1));

        a.merge(&b);
        assert_eq!(a.total(), Duration::from_micros(13));
        assert!(a.has_all(&[Stage::Seal, Stage::Wrap]));
        assert!(!a.has_all(&Stage::ALL));
    }

    #[test]
    fn timed_closure_records_its_stage() {
        let mut timer = TelemetryTimer::new();
        let value = timer.time(Stage::Validate, || 41 + 1);
        timer.finish();
        assert_eq!(value, 42);
        assert!(timer.stage_times.has_all(&[Stage::Validate]));
        assert!(timer.stage_times.total() <= timer.elapsed());
    }
}
