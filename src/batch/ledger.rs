//! Run ledger: shared counters plus the two append-only result logs.
//!
//! One mutex guards both counters and file handles, so the counter bump and
//! the log lines for a single domain land atomically with respect to every
//! other worker. Log lines are comma-separated; comment lines start with `#`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use parking_lot::Mutex;

use super::format_elapsed;
use crate::error::{DomainSweepError, Result};
use crate::types::AvailabilityVerdict;

/// Locations of the two logs for one run.
#[derive(Debug, Clone)]
pub struct LogPaths {
    pub all: PathBuf,
    pub available: PathBuf,
}

/// Counter snapshot taken while the ledger lock is held.
#[derive(Debug, Clone, Copy)]
pub struct RunCounts {
    pub checked: u64,
    pub available: u64,
}

struct LedgerInner {
    all: File,
    available: File,
    checked: u64,
    available_count: u64,
}

/// Shared state for one batch run.
pub struct RunLedger {
    paths: LogPaths,
    inner: Mutex<LedgerInner>,
}

impl RunLedger {
    /// Create the output directory and both timestamped log files, and
    /// write their header comment blocks.
    pub fn create(output_dir: &Path, range_label: &str, threads: usize) -> Result<Self> {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            DomainSweepError::io(e.to_string(), Some(output_dir.display().to_string()))
        })?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let all_path = output_dir.join(format!("all_domains_{}.txt", timestamp));
        let available_path = output_dir.join(format!("available_domains_{}.txt", timestamp));

        let mut all = open_log(&all_path)?;
        let mut available = open_log(&available_path)?;

        let started = Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(
            all,
            "# 3-Letter Domain Availability Check\n\
             # Range: {}\n\
             # Started: {}\n\
             # Threads: {}\n\
             # Format: domain,status,registrar,expiry_date\n\n",
            range_label, started, threads
        )
        .map_err(|e| DomainSweepError::io(e.to_string(), Some(all_path.display().to_string())))?;

        write!(
            available,
            "# Available 3-Letter Domains\n\
             # Range: {}\n\
             # Started: {}\n\
             # Format: domain,status\n\n",
            range_label, started
        )
        .map_err(|e| {
            DomainSweepError::io(e.to_string(), Some(available_path.display().to_string()))
        })?;

        Ok(Self {
            paths: LogPaths {
                all: all_path,
                available: available_path,
            },
            inner: Mutex::new(LedgerInner {
                all,
                available,
                checked: 0,
                available_count: 0,
            }),
        })
    }

    pub fn paths(&self) -> &LogPaths {
        &self.paths
    }

    /// Commit one completed check: bump counters and append the log lines.
    pub fn record(&self, verdict: &AvailabilityVerdict) -> Result<RunCounts> {
        let mut inner = self.inner.lock();
        inner.checked += 1;

        if verdict.is_available() {
            inner.available_count += 1;
            let line = format!("{},AVAILABLE\n", verdict.domain);
            inner.all.write_all(line.as_bytes())?;
            inner.available.write_all(line.as_bytes())?;
        } else {
            let registrar = verdict.registrar.as_deref().unwrap_or("Unknown");
            let expiry = verdict.expiry.as_deref().unwrap_or("Unknown");
            let line = format!("{},TAKEN,{},{}\n", verdict.domain, registrar, expiry);
            inner.all.write_all(line.as_bytes())?;
        }

        inner.all.flush()?;
        inner.available.flush()?;

        Ok(RunCounts {
            checked: inner.checked,
            available: inner.available_count,
        })
    }

    /// Current counter snapshot.
    pub fn counts(&self) -> RunCounts {
        let inner = self.inner.lock();
        RunCounts {
            checked: inner.checked,
            available: inner.available_count,
        }
    }

    /// Append the summary footer blocks to both logs.
    pub fn finalize(&self, total: u64, elapsed: Duration) -> Result<()> {
        let mut inner = self.inner.lock();
        let finished = Local::now().format("%Y-%m-%d %H:%M:%S");
        let elapsed = format_elapsed(elapsed);
        let checked = inner.checked;
        let available_count = inner.available_count;

        write!(
            inner.all,
            "\n# Check completed or interrupted at: {}\n\
             # Total checked: {} out of {}\n\
             # Available domains found: {}\n\
             # Total elapsed time: {}\n",
            finished, checked, total, available_count, elapsed
        )?;

        write!(
            inner.available,
            "\n# Check completed or interrupted at: {}\n\
             # Total available domains found: {} out of {} checked\n\
             # Total elapsed time: {}\n",
            finished, available_count, checked, elapsed
        )?;

        inner.all.flush()?;
        inner.available.flush()?;
        Ok(())
    }
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| DomainSweepError::io(e.to_string(), Some(path.display().to_string())))
}
