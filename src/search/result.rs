//! Search statistics

use std::time::Duration;

/// How a worker's search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// The worker's subtree was fully explored.
    #[default]
    Exhausted,
    /// The solution sink was closed before the subtree was explored.
    Stopped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Exhausted => write!(f, "exhausted"),
            Outcome::Stopped => write!(f, "stopped"),
        }
    }
}

/// Statistics from one worker's search (or an aggregate of several).
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// How the search ended
    pub outcome: Outcome,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of feasibility checks performed
    pub feasibility_checks: u64,
    /// Number of checks that rejected the newest queen
    pub conflicts: u64,
    /// Number of times an exhausted depth handed control back to its parent
    pub backtracks: u64,
    /// Number of complete placements emitted
    pub solutions_found: u64,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another worker's statistics into this aggregate.
    ///
    /// Elapsed time takes the maximum since workers run concurrently.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.feasibility_checks += other.feasibility_checks;
        self.conflicts += other.conflicts;
        self.backtracks += other.backtracks;
        self.solutions_found += other.solutions_found;
        self.elapsed_time = self.elapsed_time.max(other.elapsed_time);
        if other.outcome == Outcome::Stopped {
            self.outcome = Outcome::Stopped;
        }
    }

    /// Fraction of feasibility checks that found a conflict (0.0 to 1.0)
    pub fn conflict_rate(&self) -> f64 {
        if self.feasibility_checks == 0 {
            0.0
        } else {
            self.conflicts as f64 / self.feasibility_checks as f64
        }
    }

    /// Feasibility checks per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.feasibility_checks as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Outcome: {}\n", self.outcome));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Feasibility checks: {}\n", self.feasibility_checks));
        s.push_str(&format!("Throughput: {:.0} checks/sec\n", self.throughput()));

        if self.feasibility_checks > 0 {
            s.push_str(&format!(
                "Conflict rate: {:.2}%\n",
                self.conflict_rate() * 100.0
            ));
        }

        s.push_str(&format!("Backtracks: {}\n", self.backtracks));
        s.push_str(&format!("Solutions found: {}\n", self.solutions_found));

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_conflict_rate() {
        let mut stats = SearchStatistics::new();
        stats.feasibility_checks = 1000;
        stats.conflicts = 250;

        assert!((stats.conflict_rate() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_throughput() {
        let mut stats = SearchStatistics::new();
        stats.feasibility_checks = 10000;
        stats.elapsed_time = Duration::from_secs(10);

        assert!((stats.throughput() - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_zero_division() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.conflict_rate(), 0.0);
        assert_eq!(stats.throughput(), 0.0);
    }

    #[test]
    fn test_merge_sums_counters() {
        let mut total = SearchStatistics::new();
        let mut a = SearchStatistics::new();
        a.feasibility_checks = 10;
        a.solutions_found = 2;
        a.elapsed_time = Duration::from_millis(30);
        let mut b = SearchStatistics::new();
        b.feasibility_checks = 5;
        b.solutions_found = 1;
        b.outcome = Outcome::Stopped;
        b.elapsed_time = Duration::from_millis(10);

        total.merge(&a);
        total.merge(&b);

        assert_eq!(total.feasibility_checks, 15);
        assert_eq!(total.solutions_found, 3);
        assert_eq!(total.elapsed_time, Duration::from_millis(30));
        assert_eq!(total.outcome, Outcome::Stopped);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = SearchStatistics::new();
        stats.feasibility_checks = 40;
        stats.conflicts = 10;
        stats.solutions_found = 2;

        let summary = stats.format_summary();
        assert!(summary.contains("Feasibility checks: 40"));
        assert!(summary.contains("Conflict rate: 25.00%"));
        assert!(summary.contains("Solutions found: 2"));
    }
}
