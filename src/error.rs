//! Error types for the hashcrack binary.

use thiserror::Error;

/// Errors that terminate a run.
///
/// A malformed target surfaces before any round executes; a dispatch
/// failure invalidates the whole run with no partial results.
#[derive(Debug, Error)]
pub enum CrackError {
    /// The target digest argument was not valid hexadecimal.
    #[error("invalid hexadecimal digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded target digest has the wrong length for the kernel.
    #[error("target digest must be {expected} bytes, got {actual}")]
    DigestLength { expected: usize, actual: usize },

    /// A worker died before completing its share of a round.
    #[error("a search worker failed before completing its round")]
    WorkerFailure,
}
