//! Consumer that drains the solution queue into an output sink.

use std::io::Write;

use tracing::{debug, warn};

use crate::search::parallel::queue::BoundedQueue;
use crate::solution::Solution;

/// Closes the queue when the printer exits, by return or by unwinding, so
/// producers blocked on a full queue are released.
struct CloseOnExit<'a>(&'a BoundedQueue<Solution>);

impl Drop for CloseOnExit<'_> {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Writes one solution per line until the queue is closed and empty.
pub struct PrintWorker<'a> {
    queue: &'a BoundedQueue<Solution>,
}

impl<'a> PrintWorker<'a> {
    pub fn new(queue: &'a BoundedQueue<Solution>) -> Self {
        Self { queue }
    }

    /// Returns the number of lines written.
    pub fn run<W: Write>(self, mut out: W) -> std::io::Result<u64> {
        let _guard = CloseOnExit(self.queue);
        let mut printed = 0u64;

        while let Some(solution) = self.queue.dequeue() {
            if let Err(e) = writeln!(out, "{}", solution) {
                warn!(error = %e, printed, "Output sink failed, closing queue");
                return Err(e);
            }
            printed += 1;
        }

        out.flush()?;
        debug!(printed, "Print worker finished");
        Ok(printed)
    }
}
