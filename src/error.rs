//! Error types for the queens search.

use thiserror::Error;

/// Main error type for the search engine and its CLI glue.
#[derive(Error, Debug)]
pub enum QueensError {
    #[error("Cell {cell} is outside a board of {cells} cells")]
    InvalidCell { cell: usize, cells: usize },

    #[error("Seed prefix must contain at least one queen")]
    EmptySeed,

    #[error("Seed prefix of {len} queens does not fit a stack of {capacity} frames")]
    SeedTooLong { len: usize, capacity: usize },

    #[error("Queue capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("Worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("Malformed placement '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install interrupt handler: {0}")]
    SignalHandler(#[from] ctrlc::Error),

    #[error("{0} worker thread(s) panicked")]
    WorkerPanicked(usize),
}

impl QueensError {
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        QueensError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for queens operations.
pub type Result<T> = std::result::Result<T, QueensError>;
