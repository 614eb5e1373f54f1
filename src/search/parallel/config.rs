//! Configuration for parallel search execution.

/// Capacity of the solution queue unless overridden.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Queens placed per solution unless overridden.
pub const DEFAULT_TARGET_QUEENS: usize = 4;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of search worker threads to spawn.
    pub num_workers: usize,
    /// Capacity of the bounded solution queue.
    pub queue_capacity: usize,
    /// Number of queens in a complete placement.
    pub target_queens: usize,
    /// Shared starting placement as `(row, col)` pairs (None = root seed).
    pub seed_prefix: Option<Vec<(usize, usize)>>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: 1,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            target_queens: DEFAULT_TARGET_QUEENS,
            seed_prefix: None,
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers (at least one).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the solution queue capacity (at least one).
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Set the number of queens per solution.
    pub fn with_target(mut self, target_queens: usize) -> Self {
        self.target_queens = target_queens;
        self
    }

    /// Seed every worker with the same starting placement.
    pub fn with_prefix(mut self, prefix: Vec<(usize, usize)>) -> Self {
        self.seed_prefix = Some(prefix);
        self
    }

    /// Set the seed prefix from an Option.
    pub fn with_prefix_option(mut self, prefix: Option<Vec<(usize, usize)>>) -> Self {
        self.seed_prefix = prefix;
        self
    }
}
