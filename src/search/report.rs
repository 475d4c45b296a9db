//! Run timing, projections, and the user-facing stats block.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use crate::keyspace::ALPHABET_SIZE;

/// Number of hypothetical rounds projected past the last measured one.
pub const PROJECTED_ROUNDS: u32 = 3;

/// Elapsed wall-clock time for one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    /// Candidate length the round covered.
    pub length: usize,
    /// Wall-clock time for the round.
    pub elapsed: Duration,
}

/// Statistics for a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    /// Per-round timings, one per length in increasing order.
    pub timings: Vec<RoundTiming>,
    /// Total wall-clock time across all rounds.
    pub total_elapsed: Duration,
    /// Number of candidates evaluated across all rounds.
    pub candidates_evaluated: u64,
    /// Keyspace size at the largest searched length.
    pub keyspace: u64,
}

impl RunStatistics {
    /// Projected times for the next [`PROJECTED_ROUNDS`] lengths past the
    /// last measured round.
    ///
    /// Geometric extrapolation: a round one length longer costs
    /// `ALPHABET_SIZE` times the last measured round, assuming constant
    /// per-candidate cost.
    pub fn projections(&self) -> Vec<(usize, Duration)> {
        let last = match self.timings.last() {
            Some(timing) => timing,
            None => return Vec::new(),
        };

        (1..=PROJECTED_ROUNDS)
            .map(|k| {
                let factor = ALPHABET_SIZE.pow(k) as u32;
                (last.length + k as usize, last.elapsed * factor)
            })
            .collect()
    }

    /// Candidates evaluated per second over the whole run.
    pub fn throughput(&self) -> f64 {
        let secs = self.total_elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format the stats block printed after a run.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str("Stats\n-----\n");
        s.push_str(&format!(
            "- Elapsed total time: {:.6}s\n",
            self.total_elapsed.as_secs_f64()
        ));

        for timing in &self.timings {
            s.push_str(&format!(
                "- Length {}: finished in {:.6}s\n",
                timing.length,
                timing.elapsed.as_secs_f64()
            ));
        }

        for (length, projected) in self.projections() {
            s.push_str(&format!(
                "- Length {}: projected time would be {:.6}s\n",
                length,
                projected.as_secs_f64()
            ));
        }

        s.push_str(&format!("- Keyspace: {}\n", self.keyspace));
        s
    }
}

/// Wall-clock measurement for a run in progress.
///
/// All timestamps come from [`Instant`], so measurements are monotonic.
#[derive(Debug, Default)]
pub struct Reporter {
    run_start: Option<Instant>,
    round_start: Option<Instant>,
    timings: Vec<RoundTiming>,
    total_elapsed: Duration,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the global timer, clearing any previous measurements.
    pub fn begin_run(&mut self) {
        self.run_start = Some(Instant::now());
        self.round_start = None;
        self.timings.clear();
        self.total_elapsed = Duration::ZERO;
    }

    /// Mark the start of the next round.
    pub fn begin_round(&mut self) {
        self.round_start = Some(Instant::now());
    }

    /// Record the elapsed time of the round started last.
    pub fn end_round(&mut self, length: usize) {
        let elapsed = self
            .round_start
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default();
        self.timings.push(RoundTiming { length, elapsed });
    }

    /// Stop the global timer.
    pub fn finish_run(&mut self) {
        self.total_elapsed = self
            .run_start
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default();
    }

    /// Consume the measurements into run statistics.
    pub fn into_statistics(self, candidates_evaluated: u64, keyspace: u64) -> RunStatistics {
        RunStatistics {
            timings: self.timings,
            total_elapsed: self.total_elapsed,
            candidates_evaluated,
            keyspace,
        }
    }
}
