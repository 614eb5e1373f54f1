//! Parallel search execution: many producers, one printer.
//!
//! # Architecture
//!
//! - A **coordinator** owns the run: it creates the queue and the shared
//!   counter, spawns the workers and the printer, and tears everything down
//! - **Search workers** run the backtracking search and push formatted
//!   solutions into the queue
//! - A **bounded queue** hands solutions over and applies backpressure:
//!   a worker blocks when the printer falls behind
//! - A **print worker** drains the queue to the output sink
//!
//! Every worker seeded with the same prefix explores the same subtree, so
//! `n` workers report each solution `n` times.
//!
//! # Example
//!
//! ```ignore
//! let config = ParallelConfig::default().with_workers(2).with_target(8);
//! let session = SearchSession::new(config)?;
//! let result = session.find_solutions::<8, _>(std::io::stdout())?;
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod printer;
pub mod queue;

pub use channel::SolutionCounter;
pub use config::ParallelConfig;
pub use coordinator::{ParallelResult, SearchSession};
pub use queue::{BoundedQueue, Closed};
