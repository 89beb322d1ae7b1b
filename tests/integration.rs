//! Integration tests for domain-sweep

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use domain_sweep::batch::{BatchConfig, BatchRunner};
use domain_sweep::check::{HttpProber, NameResolver, RegistryLookup};
use domain_sweep::types::{CheckConfig, Outcome};
use domain_sweep::{DomainChecker, RandomGenerator, RangeGenerator, Result, WhoisRecord};

/// Registry stub: selected domains carry a registration record, everything
/// else is empty.
struct CannedRegistry {
    registered: HashSet<String>,
}

#[async_trait]
impl RegistryLookup for CannedRegistry {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        if self.registered.contains(domain) {
            Ok(WhoisRecord {
                domain_name: Some(domain.to_uppercase()),
                registrar: Some("Canned Registrar".to_string()),
                creation_date: Some("2001-01-01".to_string()),
                expiration_date: Some("2030-06-15T00:00:00Z".to_string()),
                status: vec!["clientTransferProhibited".to_string()],
            })
        } else {
            Ok(WhoisRecord::default())
        }
    }
}

struct NeverResolves;

#[async_trait]
impl NameResolver for NeverResolves {
    async fn resolves(&self, _domain: &str) -> bool {
        false
    }
}

struct NeverAnswers;

#[async_trait]
impl HttpProber for NeverAnswers {
    async fn head_status(&self, _url: &str) -> Option<u16> {
        None
    }
}

fn offline_checker(registered: &[&str]) -> Arc<DomainChecker> {
    Arc::new(DomainChecker::with_collaborators(
        CheckConfig::default(),
        Arc::new(CannedRegistry {
            registered: registered.iter().map(|d| d.to_string()).collect(),
        }),
        Arc::new(NeverResolves),
        Arc::new(NeverAnswers),
    ))
}

#[test]
fn test_range_generator_full_range() {
    let generator = RangeGenerator::new("aaa", "zzz");
    assert_eq!(generator.total(), 17_576);
}

#[test]
fn test_range_generator_is_ordered_and_complete() {
    let all: Vec<String> = RangeGenerator::new("aba", "abz").collect();
    assert_eq!(all.len(), 26);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(all.first().map(String::as_str), Some("aba"));
    assert_eq!(all.last().map(String::as_str), Some("abz"));
}

#[test]
fn test_random_generator_distinct_candidates() {
    let mut generator = RandomGenerator::new();
    let batch = generator.generate(5).unwrap();
    assert_eq!(batch.len(), 5);
    let distinct: HashSet<&String> = batch.iter().collect();
    assert_eq!(distinct.len(), 5);
}

#[tokio::test]
async fn test_checker_verdicts_with_canned_collaborators() {
    let checker = offline_checker(&["aab.com"]);

    let taken = checker.check("aab.com").await;
    assert_eq!(taken.outcome, Outcome::TakenRegistry);
    assert_eq!(taken.registrar.as_deref(), Some("Canned Registrar"));
    assert_eq!(taken.expiry.as_deref(), Some("2030-06-15"));

    let open = checker.check("aaa.com").await;
    assert_eq!(open.outcome, Outcome::Available);
    assert!(!open.purchase_links.is_empty());
}

#[tokio::test]
async fn test_sweep_aaa_to_aac_single_worker() {
    let dir = tempfile::tempdir().unwrap();
    let runner = BatchRunner::new(
        BatchConfig {
            start: "aaa".to_string(),
            end: "aac".to_string(),
            tld: "com".to_string(),
            threads: 1,
            output_dir: dir.path().to_path_buf(),
        },
        offline_checker(&["aab.com"]),
    );

    let summary = runner.run().await.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.available, 2);
    assert!(!summary.interrupted);
    assert!(summary.resume_hint.is_none());

    let all = std::fs::read_to_string(&summary.log_paths.all).unwrap();
    for domain in ["aaa.com", "aab.com", "aac.com"] {
        assert!(all.contains(domain), "missing {} in log:\n{}", domain, all);
    }
    assert!(all.contains("aab.com,TAKEN,Canned Registrar,2030-06-15"));
    assert!(all.contains("aaa.com,AVAILABLE"));
    assert!(all.contains("aac.com,AVAILABLE"));
    assert!(all.contains("# Total checked: 3 out of 3"));

    let available = std::fs::read_to_string(&summary.log_paths.available).unwrap();
    assert!(available.contains("aaa.com,AVAILABLE"));
    assert!(!available.contains("aab.com"));
    assert!(available.contains("# Total available domains found: 2 out of 3 checked"));
}

#[tokio::test]
async fn test_sweep_counts_never_exceed_total() {
    let dir = tempfile::tempdir().unwrap();
    let runner = BatchRunner::new(
        BatchConfig {
            start: "aaa".to_string(),
            end: "aaj".to_string(),
            tld: "com".to_string(),
            threads: 4,
            output_dir: dir.path().to_path_buf(),
        },
        offline_checker(&["aac.com", "aaf.com"]),
    );

    let summary = runner.run().await.unwrap();
    assert_eq!(summary.total, 10);
    assert_eq!(summary.checked, summary.total);
    assert!(summary.available <= summary.checked);
    assert_eq!(summary.available, 8);
}

#[test]
fn test_inverted_range_falls_back_to_full() {
    // The runner substitutes the full range; total reflects that.
    let generator = RangeGenerator::new("zzz", "aaa");
    assert!(generator.fell_back_to_full_range());
    assert_eq!(generator.total(), 17_576);
}

#[tokio::test]
async fn test_check_all_reports_every_domain() {
    let checker = offline_checker(&[]);
    let domains: Vec<String> = ["qqq", "qqr", "qqs", "qqt", "qqu"]
        .iter()
        .map(|base| format!("{}.com", base))
        .collect();

    let mut streamed = Vec::new();
    let results = checker
        .check_all(&domains, |verdict| streamed.push(verdict.domain.clone()))
        .await;

    assert_eq!(results.len(), 5);
    assert_eq!(streamed.len(), 5);
    assert!(results.iter().all(|v| v.is_available()));

    let (available, taken) = domain_sweep::report::tally(&results);
    assert_eq!(available, 5);
    assert_eq!(taken, 0);
}

#[tokio::test]
async fn test_checking_known_domains() {
    // Real network check, tolerated to fail in offline environments.
    let checker = DomainChecker::new();

    let verdict = checker.check("google.com").await;
    if verdict.outcome == Outcome::TakenRegistry || verdict.outcome == Outcome::TakenProbe {
        assert!(!verdict.is_available());
    } else {
        println!("Network unavailable; skipping strict assertion for google.com");
    }
}
