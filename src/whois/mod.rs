//! WHOIS lookup over TCP port 43.
//!
//! No external `whois` binary required. Known TLDs map straight to their
//! registry server; anything else goes through IANA discovery.

mod client;
mod record;

pub use client::WhoisClient;
pub use record::WhoisRecord;
