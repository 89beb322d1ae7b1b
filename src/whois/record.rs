//! Structured view of a free-form WHOIS response.

use chrono::NaiveDate;

/// Parsed WHOIS registration fields. Every field is optional; registries
/// disagree on labels and layout, so extraction is line-oriented and
/// defaults to absent rather than assuming well-formed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub domain_name: Option<String>,
    pub registrar: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub status: Vec<String>,
}

/// Response phrases that indicate the registry has no record.
const AVAILABLE_PATTERNS: &[&str] = &[
    "no match",
    "not found",
    "no entries found",
    "domain not found",
    "domain available",
    "not registered",
    "available for registration",
];

/// Field labels that indicate a registration exists.
const TAKEN_PATTERNS: &[&str] = &[
    "registrar:",
    "creation date:",
    "created:",
    "registered:",
    "name server:",
    "nameserver:",
    "domain status:",
    "status:",
];

impl WhoisRecord {
    /// True iff the record carries any registration indicator.
    pub fn is_registered(&self) -> bool {
        self.domain_name.is_some()
            || self.creation_date.is_some()
            || self.registrar.is_some()
            || !self.status.is_empty()
    }

    /// Parse a raw WHOIS response body.
    ///
    /// Responses that match a "no match" phrase without any registration
    /// field parse to an empty record.
    pub fn parse(output: &str) -> Self {
        let output_lower = output.to_lowercase();

        let looks_available = AVAILABLE_PATTERNS
            .iter()
            .any(|pattern| output_lower.contains(pattern));
        let looks_taken = TAKEN_PATTERNS
            .iter()
            .any(|pattern| output_lower.contains(pattern));

        if looks_available && !looks_taken {
            return Self::default();
        }

        Self {
            domain_name: extract_field(output, &["domain name:", "domain:"]),
            registrar: extract_field(output, &["registrar:", "registrar name:", "sponsoring registrar:"]),
            creation_date: extract_field(output, &["creation date:", "created:", "registered:", "registration date:"]),
            expiration_date: extract_field(
                output,
                &["registry expiry date:", "expiration date:", "expires:", "expiry date:", "paid-till:"],
            ),
            status: extract_all(output, &["domain status:", "status:"]),
        }
    }

    /// Expiration date rendered `YYYY-MM-DD` when any known format parses,
    /// otherwise the raw registry string.
    pub fn expiry_display(&self) -> Option<String> {
        let raw = self.expiration_date.as_deref()?;
        Some(match parse_date(raw) {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => raw.to_string(),
        })
    }
}

/// First matching labeled value, tried label by label.
fn extract_field(output: &str, patterns: &[&str]) -> Option<String> {
    for pattern in patterns {
        for line in output.lines() {
            let trimmed = line.trim();
            if trimmed.to_lowercase().starts_with(pattern) {
                if let Some(value) = trimmed.splitn(2, ':').nth(1) {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
    }
    None
}

/// All values carrying one of the labels (status lines repeat).
fn extract_all(output: &str, patterns: &[&str]) -> Vec<String> {
    let mut values = Vec::new();
    for line in output.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();
        if patterns.iter().any(|p| lower.starts_with(p)) {
            if let Some(value) = trimmed.splitn(2, ':').nth(1) {
                let value = value.trim();
                if !value.is_empty() {
                    values.push(value.to_string());
                }
            }
        }
    }
    values
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    let date_formats = ["%Y-%m-%d", "%d-%b-%Y", "%d.%m.%Y", "%Y.%m.%d"];
    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    // Some registries append a zone name after the timestamp; parsing the
    // leading token is enough for a date-only rendering.
    let head = raw.split_whitespace().next().unwrap_or(raw);

    for format in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(head, format) {
            return Some(date);
        }
    }
    for format in datetime_formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(head, format) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTERED: &str = r#"
   Domain Name: EXAMPLE.COM
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN
   Registrar: RESERVED-Internet Assigned Numbers Authority
   Creation Date: 1995-08-14T04:00:00Z
   Registry Expiry Date: 2025-08-13T04:00:00Z
   Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited
   Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited
"#;

    const NO_MATCH: &str = "No match for \"QZQZQZ.COM\".\r\n>>> Last update of whois database: 2025-04-01T00:00:00Z <<<\r\n";

    #[test]
    fn test_parse_registered() {
        let record = WhoisRecord::parse(REGISTERED);
        assert!(record.is_registered());
        assert_eq!(record.domain_name.as_deref(), Some("EXAMPLE.COM"));
        assert_eq!(
            record.registrar.as_deref(),
            Some("RESERVED-Internet Assigned Numbers Authority")
        );
        assert_eq!(record.status.len(), 2);
    }

    #[test]
    fn test_parse_no_match() {
        let record = WhoisRecord::parse(NO_MATCH);
        assert!(!record.is_registered());
        assert_eq!(record, WhoisRecord::default());
    }

    #[test]
    fn test_expiry_display_rfc3339() {
        let record = WhoisRecord::parse(REGISTERED);
        assert_eq!(record.expiry_display().as_deref(), Some("2025-08-13"));
    }

    #[test]
    fn test_expiry_display_unparseable_kept_raw() {
        let record = WhoisRecord {
            expiration_date: Some("sometime next year".to_string()),
            ..Default::default()
        };
        assert_eq!(record.expiry_display().as_deref(), Some("sometime next year"));
    }

    #[test]
    fn test_expiry_display_date_only() {
        let record = WhoisRecord {
            expiration_date: Some("2026-01-02".to_string()),
            ..Default::default()
        };
        assert_eq!(record.expiry_display().as_deref(), Some("2026-01-02"));
    }

    #[test]
    fn test_timestamp_value_not_split_on_colons() {
        let record = WhoisRecord::parse("Creation Date: 1995-08-14T04:00:00Z\n");
        assert_eq!(record.creation_date.as_deref(), Some("1995-08-14T04:00:00Z"));
    }

    #[test]
    fn test_status_only_counts_as_registered() {
        let record = WhoisRecord::parse("Status: ACTIVE\n");
        assert!(record.is_registered());
        assert_eq!(record.status, vec!["ACTIVE".to_string()]);
    }

    #[test]
    fn test_empty_response() {
        let record = WhoisRecord::parse("");
        assert!(!record.is_registered());
    }
}
