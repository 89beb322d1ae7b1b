//! Domain Sweep - short-domain availability probing CLI
//!
//! Three modes: sweep an alphabetic range, check random 3-character
//! candidates, or check one base name across popular TLDs.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use domain_sweep::batch::{BatchConfig, BatchRunner};
use domain_sweep::check::{validate_base_name, DomainChecker, TOP_20_TLDS};
use domain_sweep::generate::RandomGenerator;
use domain_sweep::report;
use domain_sweep::types::CheckConfig;

#[derive(Parser)]
#[command(
    name = "domain-sweep",
    version,
    about = "Probe short domain names for availability via WHOIS with DNS/HTTP fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check every 3-letter domain in an alphabetic range
    Sweep {
        /// Starting 3-letter base (inclusive)
        #[arg(long, default_value = "aaa")]
        start: String,

        /// Ending 3-letter base (inclusive)
        #[arg(long, default_value = "zzz")]
        end: String,

        /// Number of parallel workers
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
        threads: u16,

        /// Directory for the result logs
        #[arg(long, default_value = "domain_results")]
        output_dir: PathBuf,

        /// TLD suffix to append to each candidate
        #[arg(long, default_value = "com")]
        tld: String,
    },

    /// Check randomly generated 3-character .com domains
    Random {
        /// How many distinct candidates to draw
        #[arg(default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Number of parallel workers
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
        threads: u16,

        /// Emit verdicts as JSON instead of the interactive report
        #[arg(long)]
        json: bool,
    },

    /// Check one base name across popular TLDs
    Check {
        /// Base name without a TLD (e.g. "mydomain")
        base: String,

        /// TLDs to check (defaults to the top-20 list)
        #[arg(long, value_delimiter = ',')]
        tlds: Option<Vec<String>>,

        /// Number of parallel workers
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
        threads: u16,

        /// Emit verdicts as JSON instead of the interactive report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Sweep {
            start,
            end,
            threads,
            output_dir,
            tld,
        } => run_sweep(start, end, threads as usize, output_dir, tld).await,
        Command::Random {
            count,
            threads,
            json,
        } => run_random(count as usize, threads as usize, json).await,
        Command::Check {
            base,
            tlds,
            threads,
            json,
        } => run_check(base, tlds, threads as usize, json).await,
    }
}

fn build_checker(threads: usize) -> DomainChecker {
    DomainChecker::with_config(CheckConfig {
        concurrency: threads,
        ..CheckConfig::default()
    })
}

async fn run_sweep(
    start: String,
    end: String,
    threads: usize,
    output_dir: PathBuf,
    tld: String,
) -> Result<()> {
    let runner = BatchRunner::new(
        BatchConfig {
            start,
            end,
            tld: tld.trim_start_matches('.').to_lowercase(),
            threads,
            output_dir,
        },
        Arc::new(build_checker(threads)),
    );

    let summary = runner.run().await?;
    report::print_batch_summary(&summary);

    println!();
    println!("--- Check Complete ---");
    Ok(())
}

async fn run_random(count: usize, threads: usize, json: bool) -> Result<()> {
    let mut generator = RandomGenerator::new();
    let domains: Vec<String> = generator
        .generate(count)?
        .into_iter()
        .map(|base| format!("{}.com", base))
        .collect();

    let checker = build_checker(threads);

    if json {
        let results = checker.check_all(&domains, |_| {}).await;
        report::print_json(&results)?;
        return Ok(());
    }

    println!("===== 3-Character .COM Domain Availability Checker =====");
    println!("Checking {} randomly generated 3-character domains", count);
    println!("Note: 3-character domains are rare and valuable if available");
    println!("{}", "-".repeat(60));

    let results = checker.check_all(&domains, report::print_verdict).await;

    report::print_summary(&results);
    report::offer_purchase(&results);

    println!();
    println!("--- Check Complete ---");
    Ok(())
}

async fn run_check(
    base: String,
    tlds: Option<Vec<String>>,
    threads: usize,
    json: bool,
) -> Result<()> {
    let base = base.trim().to_lowercase();
    validate_base_name(&base)?;

    let tlds: Vec<String> = match tlds {
        Some(tlds) => tlds
            .into_iter()
            .map(|tld| tld.trim_start_matches('.').to_lowercase())
            .collect(),
        None => TOP_20_TLDS.iter().map(|tld| tld.to_string()).collect(),
    };
    let domains: Vec<String> = tlds.iter().map(|tld| format!("{}.{}", base, tld)).collect();

    let checker = build_checker(threads);

    if json {
        let results = checker.check_all(&domains, |_| {}).await;
        report::print_json(&results)?;
        return Ok(());
    }

    println!();
    println!(
        "Checking availability for '{}' across {} TLDs...",
        base,
        tlds.len()
    );
    println!("Using up to {} parallel checks.", threads);
    println!("Note: Results rely on WHOIS and DNS/HTTP checks. Availability not guaranteed until registration.");
    println!("{}", "=".repeat(60));

    let results = checker.check_all(&domains, report::print_verdict).await;

    report::print_summary(&results);
    report::offer_purchase(&results);

    println!();
    println!("--- Check Complete ---");
    Ok(())
}
