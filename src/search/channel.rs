//! Round channel between search workers and the host.

use crossbeam_channel::{Receiver, Sender, unbounded};

/// Message sent from a worker to the host during a round.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// The worker found a candidate whose digest matches the target.
    Match {
        worker_id: usize,
        candidate: Vec<u8>,
    },
    /// The worker has evaluated every index in its grid chunk.
    Finished {
        worker_id: usize,
        candidates_evaluated: u64,
    },
}

/// Create the worker-to-host channel for one round.
///
/// Unbounded so workers never block on reporting.
pub fn round_channel() -> (Sender<WorkerMessage>, Receiver<WorkerMessage>) {
    unbounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_message_round_trip() {
        let (tx, rx) = round_channel();

        tx.send(WorkerMessage::Finished {
            worker_id: 0,
            candidates_evaluated: 676,
        })
        .unwrap();

        match rx.recv().unwrap() {
            WorkerMessage::Finished {
                worker_id,
                candidates_evaluated,
            } => {
                assert_eq!(worker_id, 0);
                assert_eq!(candidates_evaluated, 676);
            }
            _ => panic!("Unexpected message type"),
        }
    }

    #[test]
    fn test_match_message_carries_candidate() {
        let (tx, rx) = round_channel();

        tx.send(WorkerMessage::Match {
            worker_id: 3,
            candidate: b"ab".to_vec(),
        })
        .unwrap();

        match rx.recv().unwrap() {
            WorkerMessage::Match {
                worker_id,
                candidate,
            } => {
                assert_eq!(worker_id, 3);
                assert_eq!(candidate, b"ab");
            }
            _ => panic!("Unexpected message type"),
        }
    }

    #[test]
    fn test_receiver_disconnects_after_senders_drop() {
        let (tx, rx) = round_channel();
        drop(tx);
        assert!(rx.recv().is_err());
    }
}
