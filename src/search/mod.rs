//! Brute-force search orchestration.
//!
//! A [`SearchSession`] runs one round per candidate length, from 1 up to
//! the configured maximum. Every round evaluates its complete keyspace in
//! parallel; a match is kept in the result slot but never shortens the run,
//! so reported timings always cover full rounds.

pub mod channel;
pub mod config;
pub mod dispatch;
pub mod report;
pub mod result;

pub use config::{DEFAULT_MAX_LEN, SearchConfig};
pub use report::{Reporter, RoundTiming, RunStatistics};
pub use result::{RecoveryResult, ResultChannel};

use log::debug;

use crate::error::CrackError;
use crate::kernel::DigestKernel;
use crate::keyspace::CandidateSpace;

/// One search run: configuration plus the digest capability it evaluates.
///
/// Sessions carry no global state, so several independent runs can coexist
/// in one process.
pub struct SearchSession<'a, K: DigestKernel> {
    config: SearchConfig,
    kernel: &'a K,
}

impl<'a, K: DigestKernel> SearchSession<'a, K> {
    /// Create a session over the given kernel.
    pub fn new(config: SearchConfig, kernel: &'a K) -> Self {
        Self { config, kernel }
    }

    /// Run every round from length 1 to the configured maximum and report
    /// the recovered plaintext, if any.
    ///
    /// All rounds always execute; the result slot is only decoded after the
    /// last one. The target must have the kernel's digest length.
    pub fn run(&self, target: &[u8]) -> Result<RecoveryResult, CrackError> {
        if target.len() != self.kernel.digest_len() {
            return Err(CrackError::DigestLength {
                expected: self.kernel.digest_len(),
                actual: target.len(),
            });
        }

        let mut slot = ResultChannel::new(self.config.max_len);
        let mut reporter = Reporter::new();
        let mut candidates_evaluated = 0u64;
        let mut keyspace = 0u64;

        reporter.begin_run();
        for length in 1..=self.config.max_len {
            let space = CandidateSpace::new(length);
            keyspace = space.keyspace();

            println!("Starting round with length {}...", length);
            println!("Work size: {}", space.shape());

            reporter.begin_round();
            let outcome =
                dispatch::run_round(&space, self.kernel, target, self.config.num_workers)?;
            reporter.end_round(length);

            candidates_evaluated += outcome.candidates_evaluated;
            if let Some(candidate) = outcome.matched {
                slot.record(&candidate);
            }

            // Host-side read-back after every round; no decision is made on
            // the slot until the last round has run.
            debug!("round {} complete, slot occupied: {}", length, slot.has_match());
        }
        reporter.finish_run();

        Ok(RecoveryResult {
            plaintext: slot.decode(),
            statistics: reporter.into_statistics(candidates_evaluated, keyspace),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::testing::{ECHO_DIGEST_LEN, EchoKernel, echo_digest};

    fn session(max_len: usize) -> SearchSession<'static, EchoKernel> {
        static KERNEL: EchoKernel = EchoKernel;
        let config = SearchConfig::default().with_max_len(max_len).with_workers(2);
        SearchSession::new(config, &KERNEL)
    }

    #[test]
    fn test_recovers_plaintext_and_runs_every_round() {
        let result = session(3).run(&echo_digest(b"ab")).unwrap();

        // The match lands in round 2; round 3 still runs and leaves it intact.
        assert_eq!(result.plaintext, Some("ab".to_string()));
        assert_eq!(result.statistics.timings.len(), 3);
        assert_eq!(result.statistics.candidates_evaluated, 26 + 676 + 17_576);
        assert_eq!(result.statistics.keyspace, 17_576);
    }

    #[test]
    fn test_no_preimage_within_max_len() {
        let result = session(2).run(&echo_digest(b"zzzz")).unwrap();

        assert_eq!(result.plaintext, None);
        assert_eq!(result.statistics.candidates_evaluated, 26 + 676);
        assert_eq!(result.statistics.keyspace, 676);
    }

    #[test]
    fn test_timings_are_in_increasing_length_order() {
        let result = session(3).run(&echo_digest(b"zzzz")).unwrap();
        let lengths: Vec<usize> = result.statistics.timings.iter().map(|t| t.length).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_wrong_target_length() {
        let err = session(2).run(&[0u8; ECHO_DIGEST_LEN + 1]).unwrap_err();
        assert!(matches!(
            err,
            CrackError::DigestLength {
                expected: ECHO_DIGEST_LEN,
                actual: 9,
            }
        ));
    }

    #[test]
    fn test_independent_sessions_in_one_process() {
        let first = session(2).run(&echo_digest(b"ba")).unwrap();
        let second = session(1).run(&echo_digest(b"k")).unwrap();

        assert_eq!(first.plaintext, Some("ba".to_string()));
        assert_eq!(second.plaintext, Some("k".to_string()));
    }
}
