//! WHOIS client speaking the wire protocol directly.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::record::WhoisRecord;
use crate::error::{DomainSweepError, Result};

const IANA_SERVER: &str = "whois.iana.org";

/// WHOIS client for registry lookups.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    timeout: Duration,
}

impl WhoisClient {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10))
    }

    /// Per-step timeout (connect, write, read).
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Look up a fully-qualified domain and parse the response.
    pub async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        let raw = self.lookup_raw(domain).await?;
        Ok(WhoisRecord::parse(&raw))
    }

    /// Raw registry response for a fully-qualified domain.
    pub async fn lookup_raw(&self, domain: &str) -> Result<String> {
        let tld = domain
            .rsplit('.')
            .next()
            .filter(|tld| !tld.is_empty())
            .ok_or_else(|| DomainSweepError::validation("Invalid domain format - no TLD found"))?
            .to_lowercase();

        match whois_server_for_tld(&tld) {
            Some(server) => self.query(server, domain).await,
            None => {
                // Ask IANA which server is authoritative for this TLD.
                let iana = self.query(IANA_SERVER, &tld).await?;
                let discovered = parse_iana_whois_server(&iana)
                    .or_else(|| parse_iana_refer_server(&iana))
                    .ok_or_else(|| {
                        DomainSweepError::whois(
                            domain,
                            format!("No WHOIS server found for TLD: {}", tld),
                        )
                    })?;
                self.query(&discovered, domain).await
            }
        }
    }

    async fn query(&self, server: &str, query: &str) -> Result<String> {
        let addr = format!("{}:43", server);
        let secs = self.timeout.as_secs();

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| DomainSweepError::timeout("WHOIS connect", secs))?
            .map_err(|e| {
                DomainSweepError::network(format!("WHOIS connect failed: {}", e), None, Some(addr.clone()))
            })?;

        timeout(self.timeout, stream.write_all(format!("{}\r\n", query).as_bytes()))
            .await
            .map_err(|_| DomainSweepError::timeout("WHOIS write", secs))?
            .map_err(|e| {
                DomainSweepError::network(format!("WHOIS write failed: {}", e), None, Some(addr.clone()))
            })?;

        let mut buf = Vec::new();
        timeout(self.timeout, stream.read_to_end(&mut buf))
            .await
            .map_err(|_| DomainSweepError::timeout("WHOIS read", secs))?
            .map_err(|e| {
                DomainSweepError::network(format!("WHOIS read failed: {}", e), None, Some(addr))
            })?;

        tracing::debug!(server = %server, query = %query, bytes = buf.len(), "WHOIS response received");

        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal convention-based mapping for high-usage TLDs.
/// Unknown TLDs fall back to IANA discovery.
fn whois_server_for_tld(tld: &str) -> Option<&'static str> {
    match tld {
        "com" | "net" => Some("whois.verisign-grs.com"),
        "org" => Some("whois.pir.org"),
        "io" => Some("whois.nic.io"),
        "ai" => Some("whois.nic.ai"),
        "co" => Some("whois.nic.co"),
        "me" => Some("whois.nic.me"),
        "xyz" => Some("whois.nic.xyz"),
        _ => None,
    }
}

fn parse_iana_whois_server(iana: &str) -> Option<String> {
    iana.lines()
        .map(str::trim)
        .find_map(|line| {
            if line.to_lowercase().starts_with("whois:") {
                Some(line.splitn(2, ':').nth(1)?.trim().to_string())
            } else {
                None
            }
        })
        .filter(|s| !s.is_empty())
}

fn parse_iana_refer_server(iana: &str) -> Option<String> {
    iana.lines()
        .map(str::trim)
        .find_map(|line| {
            if line.to_lowercase().starts_with("refer:") {
                Some(line.splitn(2, ':').nth(1)?.trim().to_string())
            } else {
                None
            }
        })
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_map() {
        assert_eq!(whois_server_for_tld("com"), Some("whois.verisign-grs.com"));
        assert_eq!(whois_server_for_tld("net"), Some("whois.verisign-grs.com"));
        assert_eq!(whois_server_for_tld("org"), Some("whois.pir.org"));
        assert_eq!(whois_server_for_tld("dev"), None);
    }

    #[test]
    fn test_iana_whois_parsing() {
        let sample = r#"
domain:       COM
organisation: Verisign Global Registry Services
whois:        whois.verisign-grs.com
status:       ACTIVE
"#;
        assert_eq!(
            parse_iana_whois_server(sample).as_deref(),
            Some("whois.verisign-grs.com")
        );
    }

    #[test]
    fn test_iana_refer_parsing() {
        let sample = "refer: whois.nic.io\n";
        assert_eq!(parse_iana_refer_server(sample).as_deref(), Some("whois.nic.io"));
        assert_eq!(parse_iana_whois_server(sample), None);
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_lookup_known_domain() {
        let client = WhoisClient::new();
        let record = client.lookup("google.com").await.unwrap();
        assert!(record.is_registered());
    }
}
