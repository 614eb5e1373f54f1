//! Iterative backtracking worker.

use std::time::Instant;

use tracing::{debug, trace};

use crate::board::{Cell, Frame};
use crate::error::Result;
use crate::search::SolutionSink;
use crate::search::feasibility::is_feasible;
use crate::search::parallel::channel::SolutionCounter;
use crate::search::result::{Outcome, SearchStatistics};
use crate::search::stack::PlacementStack;
use crate::solution::Solution;

/// One producer: owns a private placement stack and explores it to exhaustion.
#[derive(Debug)]
pub struct SearchWorker<const N: usize> {
    worker_id: usize,
    stack: PlacementStack<N>,
    seed_len: usize,
    target: usize,
}

impl<const N: usize> SearchWorker<N> {
    /// Worker starting from the canonical root seed `[0]`.
    pub fn root(worker_id: usize, target: usize) -> Self {
        Self {
            worker_id,
            stack: PlacementStack::root(),
            seed_len: 1,
            target,
        }
    }

    /// Worker starting from a copy of a shared prefix.
    pub fn from_seed(worker_id: usize, prefix: &[Cell<N>], target: usize) -> Result<Self> {
        Ok(Self {
            worker_id,
            stack: PlacementStack::from_seed(prefix)?,
            seed_len: prefix.len(),
            target,
        })
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// Run the search, handing every complete placement to `sink`.
    ///
    /// The search never pops below the seed depth. The last seed frame still
    /// advances through its successors; only the frames beneath it stay fixed.
    /// A target of zero places nothing and reports no solutions.
    pub fn run<S>(mut self, sink: &S, counter: &SolutionCounter) -> SearchStatistics
    where
        S: SolutionSink + ?Sized,
    {
        let start = Instant::now();
        let mut stats = SearchStatistics::new();
        debug!(
            worker_id = self.worker_id,
            seed_len = self.seed_len,
            target = self.target,
            "Search worker started"
        );

        if self.target > 0 {
            let outcome = self.explore(sink, counter, &mut stats);
            stats.outcome = outcome;
        }

        stats.elapsed_time = start.elapsed();
        debug!(
            worker_id = self.worker_id,
            outcome = %stats.outcome,
            solutions = stats.solutions_found,
            checks = stats.feasibility_checks,
            "Search worker finished"
        );
        stats
    }

    fn explore<S>(
        &mut self,
        sink: &S,
        counter: &SolutionCounter,
        stats: &mut SearchStatistics,
    ) -> Outcome
    where
        S: SolutionSink + ?Sized,
    {
        while self.stack.len() >= self.seed_len {
            let cell = match self.stack.top() {
                Some(Frame::Candidate(cell)) => cell,
                Some(Frame::Exhausted) => {
                    self.stack.pop();
                    if self.stack.is_empty() {
                        break;
                    }
                    stats.backtracks += 1;
                    self.stack.advance();
                    continue;
                }
                None => break,
            };

            stats.feasibility_checks += 1;
            if !is_feasible(self.stack.cells()) {
                stats.conflicts += 1;
                self.stack.advance();
                continue;
            }

            if self.stack.len() == self.target {
                let solution = Solution::format(&self.stack.placement());
                trace!(worker_id = self.worker_id, %solution, "Solution found");
                if sink.accept(solution).is_err() {
                    return Outcome::Stopped;
                }
                counter.increment();
                stats.solutions_found += 1;
                self.stack.advance();
            } else {
                // Descend: the next queen starts just after the current one.
                self.stack.push(Frame::Candidate(cell).successor());
            }
        }

        Outcome::Exhausted
    }
}
