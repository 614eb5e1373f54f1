//! Parallel search coordinator that manages worker threads.

use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tracing::{error, info};

use crate::board::Cell;
use crate::error::{QueensError, Result};
use crate::search::parallel::channel::{SolutionCounter, WorkerMessage};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::printer::PrintWorker;
use crate::search::parallel::queue::BoundedQueue;
use crate::search::result::{Outcome, SearchStatistics};
use crate::search::worker::SearchWorker;
use crate::solution::Solution;

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelResult {
    /// Value of the shared solution counter after all workers finished.
    pub total_solutions: u64,
    /// Lines written by the printer.
    pub printed: u64,
    /// Statistics aggregated from all workers.
    pub total_statistics: SearchStatistics,
    /// Per-worker statistics, ordered by worker id.
    pub worker_statistics: Vec<(usize, SearchStatistics)>,
}

/// Queue and counter for one run, created before any worker starts.
///
/// Handles to both can be taken out for an interrupt handler; the session
/// itself is consumed by [`SearchSession::find_solutions`].
#[derive(Debug)]
pub struct SearchSession {
    config: ParallelConfig,
    queue: Arc<BoundedQueue<Solution>>,
    counter: Arc<SolutionCounter>,
}

impl SearchSession {
    pub fn new(config: ParallelConfig) -> Result<Self> {
        if config.num_workers == 0 {
            return Err(QueensError::InvalidWorkerCount(0));
        }
        let queue = Arc::new(BoundedQueue::new(config.queue_capacity)?);
        Ok(Self {
            config,
            queue,
            counter: Arc::new(SolutionCounter::new()),
        })
    }

    pub fn queue(&self) -> Arc<BoundedQueue<Solution>> {
        Arc::clone(&self.queue)
    }

    pub fn counter(&self) -> Arc<SolutionCounter> {
        Arc::clone(&self.counter)
    }

    /// Run every worker on an `N`-sided board and print solutions to `out`.
    ///
    /// Returns once all search workers have finished and the printer has
    /// drained the queue.
    pub fn find_solutions<const N: usize, W>(self, out: W) -> Result<ParallelResult>
    where
        W: Write + Send,
    {
        let start_time = Instant::now();
        let config = &self.config;

        let prefix = config
            .seed_prefix
            .as_ref()
            .map(|coords| {
                coords
                    .iter()
                    .map(|&(row, col)| Cell::<N>::from_coords(row, col))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let workers = (0..config.num_workers)
            .map(|worker_id| match &prefix {
                Some(prefix) => SearchWorker::from_seed(worker_id, prefix, config.target_queens),
                None => Ok(SearchWorker::root(worker_id, config.target_queens)),
            })
            .collect::<Result<Vec<SearchWorker<N>>>>()?;

        info!(
            workers = config.num_workers,
            board = N,
            target = config.target_queens,
            queue_capacity = self.queue.capacity(),
            seeded = prefix.is_some(),
            "Starting queens search"
        );

        let queue: &BoundedQueue<Solution> = &self.queue;
        let counter: &SolutionCounter = &self.counter;
        let (worker_tx, coordinator_rx) = crossbeam_channel::unbounded();

        let (panicked, printed) = thread::scope(|s| -> Result<(usize, std::io::Result<u64>)> {
            let printer = thread::Builder::new()
                .name("printer".to_string())
                .spawn_scoped(s, move || PrintWorker::new(queue).run(out))?;

            let mut producers = Vec::with_capacity(workers.len());
            for worker in workers {
                let tx = worker_tx.clone();
                let worker_id = worker.worker_id();
                let spawned = thread::Builder::new()
                    .name(format!("search-{}", worker_id))
                    .spawn_scoped(s, move || {
                        let statistics = worker.run(queue, counter);
                        let message = match statistics.outcome {
                            Outcome::Exhausted => WorkerMessage::Finished {
                                worker_id,
                                statistics,
                            },
                            Outcome::Stopped => WorkerMessage::Stopped {
                                worker_id,
                                statistics,
                            },
                        };
                        let _ = tx.send(message);
                    });
                match spawned {
                    Ok(handle) => producers.push(handle),
                    Err(e) => {
                        // Release the workers already running and the printer.
                        queue.close();
                        return Err(e.into());
                    }
                }
            }

            let mut panicked = 0;
            for handle in producers {
                if handle.join().is_err() {
                    panicked += 1;
                }
            }

            // All producers are done: let the printer drain and exit.
            queue.close();
            let printed = match printer.join() {
                Ok(printed) => printed,
                Err(_) => {
                    panicked += 1;
                    Ok(0)
                }
            };

            Ok((panicked, printed))
        })?;
        drop(worker_tx);

        let mut worker_statistics: Vec<(usize, SearchStatistics)> = coordinator_rx
            .try_iter()
            .map(|message| (message.worker_id(), message.statistics().clone()))
            .collect();
        worker_statistics.sort_by_key(|(worker_id, _)| *worker_id);

        let mut total_statistics = SearchStatistics::new();
        for (_, statistics) in &worker_statistics {
            total_statistics.merge(statistics);
        }
        total_statistics.elapsed_time = start_time.elapsed();

        if panicked > 0 {
            error!(panicked, "Worker threads panicked");
            return Err(QueensError::WorkerPanicked(panicked));
        }
        let printed = printed?;

        let total_solutions = self.counter.get();
        info!(
            solutions = total_solutions,
            printed,
            elapsed = ?total_statistics.elapsed_time,
            "Queens search complete"
        );

        Ok(ParallelResult {
            total_solutions,
            printed,
            total_statistics,
            worker_statistics,
        })
    }
}
