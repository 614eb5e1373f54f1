//! State shared between search workers and the coordinator.

use crate::search::result::SearchStatistics;
use parking_lot::Mutex;

/// Message sent from a worker to the coordinator when its search ends.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker explored its whole subtree.
    Finished {
        worker_id: usize,
        statistics: SearchStatistics,
    },
    /// Worker gave up because the solution queue was closed.
    Stopped {
        worker_id: usize,
        statistics: SearchStatistics,
    },
}

impl WorkerMessage {
    pub fn worker_id(&self) -> usize {
        match self {
            WorkerMessage::Finished { worker_id, .. } | WorkerMessage::Stopped { worker_id, .. } => {
                *worker_id
            }
        }
    }

    pub fn statistics(&self) -> &SearchStatistics {
        match self {
            WorkerMessage::Finished { statistics, .. }
            | WorkerMessage::Stopped { statistics, .. } => statistics,
        }
    }
}

/// Solutions found across all workers.
///
/// Every update and read goes through the same lock, including the read made
/// by the interrupt handler.
#[derive(Debug, Default)]
pub struct SolutionCounter {
    total: Mutex<u64>,
}

impl SolutionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        *self.total.lock() += 1;
    }

    pub fn get(&self) -> u64 {
        *self.total.lock()
    }
}
