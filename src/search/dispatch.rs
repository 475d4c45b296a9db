//! Per-round dispatch of the candidate grid across the worker pool.

use std::ops::Range;
use std::thread;

use crossbeam_channel::Sender;
use log::debug;

use crate::error::CrackError;
use crate::kernel::DigestKernel;
use crate::keyspace::CandidateSpace;
use crate::search::channel::{WorkerMessage, round_channel};

/// Outcome of one fully evaluated round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Candidate whose digest matched the target, if any.
    pub matched: Option<Vec<u8>>,
    /// Number of candidates evaluated; always the round's full keyspace.
    pub candidates_evaluated: u64,
}

/// Evaluate every candidate of one length against the target digest.
///
/// The grid's linear index range `0..keyspace` is split into contiguous
/// chunks, one per worker. The call blocks until every worker has finished
/// its chunk; a match never shortens the round. Workers dying before their
/// `Finished` message is fatal for the whole run.
pub fn run_round<K: DigestKernel>(
    space: &CandidateSpace,
    kernel: &K,
    target: &[u8],
    num_workers: usize,
) -> Result<RoundOutcome, CrackError> {
    let total = space.keyspace();
    let workers = (num_workers.max(1) as u64).min(total);
    let chunk = total.div_ceil(workers);

    let (tx, rx) = round_channel();

    thread::scope(|scope| {
        let mut spawned = 0usize;
        for worker_id in 0..workers {
            let start = worker_id * chunk;
            if start >= total {
                break;
            }
            let end = (start + chunk).min(total);
            let tx = tx.clone();
            scope.spawn(move || {
                scan_chunk(worker_id as usize, space, kernel, target, start..end, tx)
            });
            spawned += 1;
        }
        drop(tx);

        let mut matched: Option<Vec<u8>> = None;
        let mut candidates_evaluated = 0u64;
        let mut finished = 0usize;

        while finished < spawned {
            match rx.recv() {
                Ok(WorkerMessage::Match {
                    worker_id,
                    candidate,
                }) => {
                    debug!(
                        "worker {} matched a candidate of length {}",
                        worker_id,
                        candidate.len()
                    );
                    matched = Some(candidate);
                }
                Ok(WorkerMessage::Finished {
                    worker_id,
                    candidates_evaluated: count,
                }) => {
                    debug!("worker {} finished after {} candidates", worker_id, count);
                    candidates_evaluated += count;
                    finished += 1;
                }
                Err(_) => return Err(CrackError::WorkerFailure),
            }
        }

        Ok(RoundOutcome {
            matched,
            candidates_evaluated,
        })
    })
}

/// Per-work-item contract, applied to every index in the worker's chunk:
/// decode the coordinate into a candidate, digest it, compare against the
/// target, and report an exact match to the host.
fn scan_chunk<K: DigestKernel>(
    worker_id: usize,
    space: &CandidateSpace,
    kernel: &K,
    target: &[u8],
    indices: Range<u64>,
    tx: Sender<WorkerMessage>,
) {
    debug!(
        "worker {} scanning indices {}..{}",
        worker_id, indices.start, indices.end
    );

    let candidates_evaluated = indices.end - indices.start;
    let mut candidate = vec![0u8; space.len()];
    let mut digest = vec![0u8; kernel.digest_len()];

    for index in indices {
        space.candidate_at(index, &mut candidate);
        kernel.digest(&candidate, &mut digest);
        if digest.as_slice() == target {
            let _ = tx.send(WorkerMessage::Match {
                worker_id,
                candidate: candidate.clone(),
            });
        }
    }

    let _ = tx.send(WorkerMessage::Finished {
        worker_id,
        candidates_evaluated,
    });
}
