//! Domain Sweep - short-domain availability probing
//!
//! Generates candidate domain names (exhaustive 3-letter ranges or random
//! 3-character strings) and checks whether they are registered, using WHOIS
//! with a DNS/HTTP reachability fallback.

pub mod batch;
pub mod check;
pub mod error;
pub mod generate;
pub mod report;
pub mod types;
pub mod whois;

// Re-export commonly used types
pub use error::{DomainSweepError, Result};
pub use types::{AvailabilityVerdict, CheckConfig, Outcome, PurchaseLink};

// Re-export main functionality
pub use batch::{BatchConfig, BatchRunner, BatchSummary};
pub use check::DomainChecker;
pub use generate::{RandomGenerator, RangeGenerator};
pub use whois::{WhoisClient, WhoisRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
