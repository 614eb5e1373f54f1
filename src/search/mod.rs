//! Backtracking search for non-attacking queen placements
//!
//! - `stack`: explicit placement stack standing in for recursion
//! - `feasibility`: conflict check for the newest queen
//! - `worker`: iterative backtracking driver run by each producer
//! - `parallel`: bounded queue, printer and coordinator for multi-worker runs

pub mod feasibility;
pub mod parallel;
pub mod result;
pub mod stack;
pub mod worker;

pub use parallel::{ParallelConfig, ParallelResult, SearchSession};
pub use result::{Outcome, SearchStatistics};
pub use worker::SearchWorker;

use crate::solution::Solution;

/// Destination for complete placements found by a worker.
pub trait SolutionSink: Sync {
    /// Take ownership of `solution`, blocking if the sink is full.
    ///
    /// Hands the solution back when the sink no longer accepts work, which
    /// tells the worker to stop.
    fn accept(&self, solution: Solution) -> Result<(), Solution>;
}

impl SolutionSink for parallel::BoundedQueue<Solution> {
    fn accept(&self, solution: Solution) -> Result<(), Solution> {
        self.enqueue(solution).map_err(|parallel::Closed(solution)| solution)
    }
}
