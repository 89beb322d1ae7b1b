//! Core types and structures for domain-sweep

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a verdict was reached. Four user-facing cases layered onto the
/// boolean availability: the fallback path is a heuristic and its wording
/// must keep saying so ("likely").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Registry record present - taken via WHOIS.
    TakenRegistry,
    /// No registry data, but the name resolves or answers HTTP - likely taken.
    TakenProbe,
    /// No registry data and no network presence.
    Available,
    /// Registry lookup failed, but no network presence either.
    LikelyAvailable,
}

impl Outcome {
    /// The boolean the logs and counters care about.
    pub fn is_available(&self) -> bool {
        matches!(self, Outcome::Available | Outcome::LikelyAvailable)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::TakenRegistry => write!(f, "Taken (WHOIS)"),
            Outcome::TakenProbe => write!(f, "Likely Taken"),
            Outcome::Available => write!(f, "Available"),
            Outcome::LikelyAvailable => write!(f, "Likely Available"),
        }
    }
}

/// A purchase link at one registrar. Pure string substitution into the
/// registrar's search URL; nothing verifies the page exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLink {
    pub registrar: String,
    pub url: String,
}

/// Registrar search-URL templates, in display order. `{}` is replaced with
/// the fully-qualified domain.
pub const REGISTRARS: &[(&str, &str)] = &[
    ("Porkbun", "https://porkbun.com/checkout/search?q={}"),
    ("GoDaddy", "https://www.godaddy.com/domainsearch/find?domainToCheck={}"),
];

/// Build purchase links for an available domain.
pub fn purchase_links(domain: &str) -> Vec<PurchaseLink> {
    REGISTRARS
        .iter()
        .map(|(name, template)| PurchaseLink {
            registrar: (*name).to_string(),
            url: template.replace("{}", domain),
        })
        .collect()
}

/// Result of checking one domain. Created once per check, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub domain: String,
    pub outcome: Outcome,
    /// One-line human-readable status.
    pub message: String,
    /// Free-form detail text: registrar/expiry when taken, purchase links
    /// and any WHOIS failure note when available.
    pub details: String,
    /// Registrar name when the registry record carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    /// Expiration date as rendered for display (`YYYY-MM-DD` when parseable,
    /// otherwise the raw registry string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    /// Populated only when the domain is available.
    pub purchase_links: Vec<PurchaseLink>,
}

impl AvailabilityVerdict {
    pub fn is_available(&self) -> bool {
        self.outcome.is_available()
    }
}

/// Configuration for domain checking
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Maximum simultaneous checks when fanning out.
    pub concurrency: usize,
    /// Per-step WHOIS timeout (connect, write, read).
    pub whois_timeout: Duration,
    /// Per-request timeout for the HTTP HEAD probes.
    pub http_timeout: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            whois_timeout: Duration::from_secs(10),
            http_timeout: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_availability() {
        assert!(Outcome::Available.is_available());
        assert!(Outcome::LikelyAvailable.is_available());
        assert!(!Outcome::TakenRegistry.is_available());
        assert!(!Outcome::TakenProbe.is_available());
    }

    #[test]
    fn test_purchase_links_substitution() {
        let links = purchase_links("abc.com");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].registrar, "Porkbun");
        assert!(links[0].url.contains("abc.com"));
        assert!(!links[0].url.contains("{}"));
        assert_eq!(links[1].registrar, "GoDaddy");
        assert!(links[1].url.ends_with("domainToCheck=abc.com"));
    }

    #[test]
    fn test_default_check_config() {
        let config = CheckConfig::default();
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_verdict_json_shape() {
        let verdict = AvailabilityVerdict {
            domain: "abc.com".to_string(),
            outcome: Outcome::Available,
            message: "✅ abc.com - Available".to_string(),
            details: String::new(),
            registrar: None,
            expiry: None,
            purchase_links: purchase_links("abc.com"),
        };

        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"outcome\":\"available\""));
        // Absent optional fields are omitted entirely.
        assert!(!json.contains("\"expiry\""));

        let back: AvailabilityVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back.domain, "abc.com");
        assert_eq!(back.outcome, Outcome::Available);
        assert_eq!(back.purchase_links.len(), 2);
    }
}
