//! Batch execution - drive the checker over a generated range with a
//! bounded worker pool, shared counters and append-only result logs.

mod ledger;
mod runner;

pub use ledger::{LogPaths, RunCounts, RunLedger};
pub use runner::{BatchConfig, BatchRunner, BatchSummary};

use std::time::Duration;

/// Render a wall-clock duration as `H:MM:SS` for logs and summaries.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "0:01:05");
        assert_eq!(format_elapsed(Duration::from_secs(3_725)), "1:02:05");
        assert_eq!(format_elapsed(Duration::from_secs(90_000)), "25:00:00");
    }
}
