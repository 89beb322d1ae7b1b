//! The two-stage availability heuristic.

use std::sync::Arc;

use futures::StreamExt;

use super::probe::{DnsResolver, HeadProber};
use super::{HttpProber, NameResolver, RegistryLookup};
use crate::types::{purchase_links, AvailabilityVerdict, CheckConfig, Outcome};
use crate::whois::WhoisClient;

/// Checks one domain at a time: registry record first, then the DNS/HTTP
/// reachability fallback. Reachability is a heuristic, so every verdict it
/// produces stays labeled "likely".
pub struct DomainChecker {
    config: CheckConfig,
    registry: Arc<dyn RegistryLookup>,
    resolver: Arc<dyn NameResolver>,
    prober: Arc<dyn HttpProber>,
}

impl DomainChecker {
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    pub fn with_config(config: CheckConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("domain-sweep/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(config.concurrency)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create pooled HTTP client: {}. Using default.", e);
                reqwest::Client::new()
            });

        let registry = Arc::new(WhoisClient::with_timeout(config.whois_timeout));
        let resolver = Arc::new(DnsResolver::new());
        let prober = Arc::new(HeadProber::new(client, config.http_timeout));

        Self {
            config,
            registry,
            resolver,
            prober,
        }
    }

    /// Build a checker around explicit collaborators. The decision logic is
    /// what matters here; tests substitute canned registries and probes.
    pub fn with_collaborators(
        config: CheckConfig,
        registry: Arc<dyn RegistryLookup>,
        resolver: Arc<dyn NameResolver>,
        prober: Arc<dyn HttpProber>,
    ) -> Self {
        Self {
            config,
            registry,
            resolver,
            prober,
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check a single fully-qualified domain.
    ///
    /// Never fails: registry and network errors are folded into the verdict
    /// as explanatory text.
    pub async fn check(&self, domain: &str) -> AvailabilityVerdict {
        let lookup = self.registry.lookup(domain).await;

        match &lookup {
            Ok(record) if record.is_registered() => {
                tracing::debug!(domain = %domain, "taken via registry record");

                let registrar = record
                    .registrar
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string());
                let expiry = record.expiry_display();
                let details = match &expiry {
                    Some(expiry) => format!("   Registrar: {} (Expires: {})", registrar, expiry),
                    None => format!("   Registrar: {}", registrar),
                };

                return AvailabilityVerdict {
                    domain: domain.to_string(),
                    outcome: Outcome::TakenRegistry,
                    message: format!("❌ {} - Taken (WHOIS)", domain),
                    details,
                    registrar: Some(registrar),
                    expiry,
                    purchase_links: Vec::new(),
                };
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(domain = %domain, error = %e, "WHOIS lookup failed, falling back");
            }
        }

        // Registry was empty or errored; fall through to reachability.
        let whois_note = match &lookup {
            Ok(_) => "WHOIS empty".to_string(),
            Err(e) => e.short_note(),
        };
        let whois_errored = lookup.is_err();

        if self.probe_reachable(domain).await {
            return AvailabilityVerdict {
                domain: domain.to_string(),
                outcome: Outcome::TakenProbe,
                message: format!("❌ {} - Likely Taken", domain),
                details: format!(
                    "   ({}, but double-check indicates taken) (Checked via DNS/HTTP)",
                    whois_note
                ),
                registrar: None,
                expiry: None,
                purchase_links: Vec::new(),
            };
        }

        // Nothing resolved and nothing answered: available by elimination.
        let links = purchase_links(domain);
        let link_lines: Vec<String> = links
            .iter()
            .map(|link| format!("   → {}: {}", link.registrar, link.url))
            .collect();
        let (outcome, label) = if whois_errored {
            (Outcome::LikelyAvailable, "Likely Available")
        } else {
            (Outcome::Available, "Available")
        };

        tracing::debug!(domain = %domain, outcome = %outcome, "fallback check concluded");

        AvailabilityVerdict {
            domain: domain.to_string(),
            outcome,
            message: format!("✅ {} - {}", domain, label),
            details: format!(
                "   ({}) (Checked via DNS/HTTP)\n{}",
                whois_note,
                link_lines.join("\n")
            ),
            registrar: None,
            expiry: None,
            purchase_links: links,
        }
    }

    /// DNS resolution first; if that misses, HEAD over https then http.
    /// Timeouts and connection errors are inconclusive, never "taken".
    async fn probe_reachable(&self, domain: &str) -> bool {
        if self.resolver.resolves(domain).await {
            tracing::debug!(domain = %domain, "name resolves, treating as taken");
            return true;
        }

        for scheme in ["https://", "http://"] {
            let url = format!("{}{}", scheme, domain);
            if let Some(status) = self.prober.head_status(&url).await {
                if status < 400 {
                    tracing::debug!(domain = %domain, status = status, "HEAD probe answered, treating as taken");
                    return true;
                }
            }
        }

        false
    }

    /// Check many domains with bounded concurrency, invoking `on_result` in
    /// completion order. Returns all verdicts once every check finishes.
    pub async fn check_all<F>(&self, domains: &[String], mut on_result: F) -> Vec<AvailabilityVerdict>
    where
        F: FnMut(&AvailabilityVerdict),
    {
        let mut stream = futures::stream::iter(domains.iter().map(|domain| self.check(domain)))
            .buffer_unordered(self.config.concurrency.max(1));

        let mut results = Vec::with_capacity(domains.len());
        while let Some(verdict) = stream.next().await {
            on_result(&verdict);
            results.push(verdict);
        }
        results
    }
}

impl Default for DomainChecker {
    fn default() -> Self {
        Self::new()
    }
}
