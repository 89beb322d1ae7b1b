//! Result presentation and the interactive follow-up.
//!
//! The checking core only returns data; everything the user sees or answers
//! lives here, so the core runs (and tests) without a terminal.

use inquire::Select;

use crate::batch::{format_elapsed, BatchSummary};
use crate::types::{AvailabilityVerdict, PurchaseLink};

/// Print one verdict as it completes.
pub fn print_verdict(verdict: &AvailabilityVerdict) {
    println!("{}", verdict.message);
    if !verdict.details.is_empty() {
        println!("{}", verdict.details);
    }
}

/// Print all verdicts as a JSON array, for piping into other tools.
pub fn print_json(results: &[AvailabilityVerdict]) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Available vs. taken-or-unavailable split.
pub fn tally(results: &[AvailabilityVerdict]) -> (usize, usize) {
    let available = results.iter().filter(|v| v.is_available()).count();
    (available, results.len() - available)
}

/// Aggregate summary for single-base and random-mode runs.
pub fn print_summary(results: &[AvailabilityVerdict]) {
    let (available, taken) = tally(results);
    println!("{}", "=".repeat(60));
    println!();
    println!("Summary:");
    println!("Total domains checked: {}", results.len());
    println!("Available: {}", available);
    println!("Taken/Unavailable: {}", taken);
}

/// List available domains with purchase links and offer to open one in the
/// default browser. Declining (Esc, empty choice, or no terminal) is always
/// valid and side-effect-free.
pub fn offer_purchase(results: &[AvailabilityVerdict]) {
    let available: Vec<&AvailabilityVerdict> =
        results.iter().filter(|v| v.is_available()).collect();

    if available.is_empty() {
        println!();
        println!("No available domains found in this batch.");
        println!("Try running again for a new set of candidates.");
        return;
    }

    println!();
    println!("Available Domains Found:");
    for (index, verdict) in available.iter().enumerate() {
        println!("{}. {}", index + 1, verdict.domain);
        for link in &verdict.purchase_links {
            println!("   → {}: {}", link.registrar, link.url);
        }
    }

    println!();
    let domains: Vec<String> = available.iter().map(|v| v.domain.clone()).collect();
    let chosen = match Select::new("Open a purchase link in your browser?", domains)
        .with_help_message("↑↓ to move, Enter to select, Esc to skip")
        .prompt_skippable()
    {
        Ok(Some(domain)) => domain,
        Ok(None) => {
            println!("Skipping browser open.");
            return;
        }
        Err(e) => {
            tracing::debug!(error = %e, "interactive prompt unavailable");
            println!("Skipping browser open.");
            return;
        }
    };

    let Some(verdict) = available.iter().find(|v| v.domain == chosen) else {
        return;
    };
    let Some(link) = pick_registrar(&verdict.purchase_links) else {
        println!("No purchase links recorded for {}.", verdict.domain);
        return;
    };

    println!();
    println!("Opening {} link for {}...", link.registrar, verdict.domain);
    if open_in_browser(&link.url) {
        println!("Browser should have opened. Good luck!");
    } else {
        println!("If the browser didn't open, you can manually visit:");
        println!("{}", link.url);
    }
}

/// Ask which registrar to use when there is a choice; any decline falls
/// back to the first.
fn pick_registrar(links: &[PurchaseLink]) -> Option<&PurchaseLink> {
    if links.len() <= 1 {
        return links.first();
    }

    let names: Vec<String> = links.iter().map(|l| l.registrar.clone()).collect();
    match Select::new("Which registrar?", names)
        .with_help_message("Esc for the first one")
        .prompt_skippable()
    {
        Ok(Some(name)) => links.iter().find(|l| l.registrar == name).or_else(|| links.first()),
        _ => links.first(),
    }
}

/// Best-effort launch of the default browser. Failure is reported, never
/// fatal; the caller prints the raw URL as a fallback.
pub fn open_in_browser(url: &str) -> bool {
    println!("Attempting to open: {}", url);

    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd").args(["/C", "start", url]).spawn();
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(url).spawn();
    #[cfg(all(unix, not(target_os = "macos")))]
    let spawned = std::process::Command::new("xdg-open").arg(url).spawn();

    match spawned {
        Ok(_) => true,
        Err(e) => {
            eprintln!("Error opening browser: {}", e);
            false
        }
    }
}

/// Console summary for a batch sweep, mirroring the log footers.
pub fn print_batch_summary(summary: &BatchSummary) {
    if summary.interrupted {
        println!();
        println!(
            "Process interrupted by user after checking {} domains.",
            summary.checked
        );
        if let Some(next) = &summary.resume_hint {
            println!("You can resume with:");
            println!(
                "  domain-sweep sweep --start {} --end {} --threads {}",
                next, summary.end_bound, summary.threads
            );
        }
    }

    println!("{}", "=".repeat(70));
    println!("Summary:");
    println!(
        "Total domains checked: {} out of {}",
        summary.checked, summary.total
    );
    println!("Available domains found: {}", summary.available);
    println!(
        "Results saved to directory: {}",
        summary.output_dir.display()
    );
    if let Some(name) = summary.log_paths.all.file_name() {
        println!("  - All domains: {}", name.to_string_lossy());
    }
    if let Some(name) = summary.log_paths.available.file_name() {
        println!("  - Available domains: {}", name.to_string_lossy());
    }
    println!("Total time elapsed: {}", format_elapsed(summary.elapsed));

    let secs = summary.elapsed.as_secs_f64();
    if secs > 0.0 && summary.checked > 0 {
        let per_second = summary.checked as f64 / secs;
        println!();
        println!("Performance:");
        println!("Average speed: {:.2} domains/second", per_second);
        println!("              {:.2} domains/minute", per_second * 60.0);
        println!("              {:.2} domains/hour", per_second * 3600.0);

        if summary.checked < summary.total {
            let percent = summary.checked as f64 / summary.total as f64 * 100.0;
            println!("Completed: {:.2}% of the planned range", percent);
        }
    }
}
