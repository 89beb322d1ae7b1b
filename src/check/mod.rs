//! Domain availability checking.
//!
//! The decision procedure lives in [`checker::DomainChecker`]; its network
//! collaborators sit behind the traits below so the heuristic can be tested
//! without touching the wire.

pub mod checker;
pub mod probe;
pub mod validator;

pub use checker::DomainChecker;
pub use validator::validate_base_name;

use async_trait::async_trait;

use crate::error::Result;
use crate::whois::WhoisRecord;

/// Registry lookup collaborator (WHOIS in production).
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord>;
}

/// Name resolution collaborator. A name that resolves is assumed to be
/// configured, hence registered.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolves(&self, domain: &str) -> bool;
}

/// HTTP reachability collaborator. Returns the status code of a HEAD
/// request, or `None` on timeout/connection failure (inconclusive).
#[async_trait]
pub trait HttpProber: Send + Sync {
    async fn head_status(&self, url: &str) -> Option<u16>;
}

/// The 20 most popular TLD suffixes, checked by the single-base mode.
pub const TOP_20_TLDS: &[&str] = &[
    "com", "net", "org", "io", "co",
    "ai", "app", "dev", "me", "info",
    "xyz", "tech", "online", "site", "store",
    "blog", "shop", "biz", "edu", "ly",
];
