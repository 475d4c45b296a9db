//! Configuration for search runs.

use crate::keyspace::MAX_SUPPORTED_LEN;

/// Default longest candidate length to search.
pub const DEFAULT_MAX_LEN: usize = 6;

/// Configuration for a search session.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Longest candidate length to search; rounds run from 1 to here.
    pub max_len: usize,
    /// Number of worker threads per round.
    pub num_workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            num_workers: num_cpus::get(),
        }
    }
}

impl SearchConfig {
    /// Set the longest candidate length, clamped so the keyspace fits in a `u64`.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len.clamp(1, MAX_SUPPORTED_LEN);
        self
    }

    /// Set the number of worker threads.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }
}
