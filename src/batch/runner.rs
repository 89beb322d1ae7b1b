//! Bounded-concurrency batch execution over a candidate range.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::ledger::{LogPaths, RunLedger};
use crate::check::DomainChecker;
use crate::error::Result;
use crate::generate::RangeGenerator;

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub start: String,
    pub end: String,
    pub tld: String,
    pub threads: usize,
    pub output_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            start: "aaa".to_string(),
            end: "zzz".to_string(),
            tld: "com".to_string(),
            threads: 10,
            output_dir: PathBuf::from("domain_results"),
        }
    }
}

/// What happened over one batch run; consumed by the reporter.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub total: u64,
    pub checked: u64,
    pub available: u64,
    pub elapsed: Duration,
    pub interrupted: bool,
    /// Suggested `--start` value to restart near where a cancelled run
    /// stopped. Approximate: derived from the completion ratio.
    pub resume_hint: Option<String>,
    pub end_bound: String,
    pub threads: usize,
    pub output_dir: PathBuf,
    pub log_paths: LogPaths,
}

/// Drives the checker over every candidate in a range.
pub struct BatchRunner {
    config: BatchConfig,
    checker: Arc<DomainChecker>,
}

impl BatchRunner {
    pub fn new(config: BatchConfig, checker: Arc<DomainChecker>) -> Self {
        Self { config, checker }
    }

    /// Run the full sweep. Returns a summary on both normal completion and
    /// user cancellation; only setup failures (e.g. unwritable output
    /// directory) are errors.
    pub async fn run(&self) -> Result<BatchSummary> {
        let generator = RangeGenerator::new(&self.config.start, &self.config.end);
        if generator.fell_back_to_full_range() {
            println!(
                "⚠️  Start '{}' sorts after end '{}'; defaulting to the full aaa-zzz range.",
                self.config.start, self.config.end
            );
        }

        let (start_bound, end_bound) = generator.bounds();
        let total = generator.total();
        let range_label = format!(
            "{}.{} to {}.{}",
            start_bound, self.config.tld, end_bound, self.config.tld
        );

        let ledger = Arc::new(RunLedger::create(
            &self.config.output_dir,
            &range_label,
            self.config.threads,
        )?);

        println!("===== 3-Letter Domain Availability Sweep =====");
        println!("Checking domains alphabetically from {}", range_label);
        println!("Total domains to check: {}", total);
        println!("Using up to {} workers for parallel checking", self.config.threads);
        println!("Results will be saved to:");
        println!("  - All domains: {}", ledger.paths().all.display());
        println!("  - Available domains: {}", ledger.paths().available.display());
        println!("Press Ctrl+C at any time to stop.");
        println!("{}", "-".repeat(70));

        let progress = ProgressBar::new(total);
        progress.set_style(
            ProgressStyle::with_template(
                "{pos}/{len} ({percent}%) | Found: {msg} available | {per_sec} | ETA: {eta}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message("0");

        let cancelled = Arc::new(AtomicBool::new(false));
        {
            let cancelled = Arc::clone(&cancelled);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancelled.store(true, Ordering::SeqCst);
                }
            });
        }

        let semaphore = Arc::new(Semaphore::new(self.config.threads.max(1)));
        let mut tasks: JoinSet<Result<()>> = JoinSet::new();
        let run_start = Instant::now();

        for base in generator.clone() {
            if cancelled.load(Ordering::SeqCst) {
                break;
            }

            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };
            // A Ctrl+C may have arrived while waiting for a slot.
            if cancelled.load(Ordering::SeqCst) {
                break;
            }

            let domain = format!("{}.{}", base, self.config.tld);
            let checker = Arc::clone(&self.checker);
            let ledger = Arc::clone(&ledger);
            let progress = progress.clone();

            tasks.spawn(async move {
                let _permit = permit;
                let verdict = checker.check(&domain).await;
                let counts = ledger.record(&verdict)?;

                progress.set_position(counts.checked);
                progress.set_message(counts.available.to_string());
                if verdict.is_available() {
                    progress.println(format!(
                        "✅ Found available: {} ({}/{})",
                        verdict.domain, counts.checked, total
                    ));
                }
                Ok(())
            });
        }

        // Let in-flight checks drain; each was committed atomically, so a
        // cancelled run still has a consistent log.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    progress.println(format!("Error checking domain: {}", e));
                    tracing::warn!(error = %e, "worker failed");
                }
                Err(e) => {
                    progress.println(format!("Worker panicked: {}", e));
                    tracing::error!(error = %e, "worker panicked");
                }
            }
        }
        progress.finish_and_clear();

        let elapsed = run_start.elapsed();
        let counts = ledger.counts();
        let interrupted = cancelled.load(Ordering::SeqCst);

        let resume_hint = if interrupted && counts.checked < total {
            next_candidate_hint(&generator, counts.checked, total)
        } else {
            None
        };

        ledger.finalize(total, elapsed)?;

        Ok(BatchSummary {
            total,
            checked: counts.checked,
            available: counts.available,
            elapsed,
            interrupted,
            resume_hint,
            end_bound,
            threads: self.config.threads,
            output_dir: self.config.output_dir.clone(),
            log_paths: ledger.paths().clone(),
        })
    }
}

/// Approximate next unchecked candidate, by completion ratio.
fn next_candidate_hint(generator: &RangeGenerator, checked: u64, total: u64) -> Option<String> {
    if total == 0 {
        return None;
    }
    let ratio = checked as f64 / total as f64;
    let index = ((total as f64 * ratio) as u64).min(total - 1);
    generator.candidate_at(index)
}
