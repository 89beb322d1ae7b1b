//! Base-name validation for user-supplied input.

use regex::Regex;

use crate::error::{DomainSweepError, Result};

/// Validate a base domain name (the part left of the TLD).
///
/// Letters, digits and inner hyphens only; no dots, spaces or slashes;
/// hyphens cannot lead or trail. Checked before any work begins.
pub fn validate_base_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DomainSweepError::validation("Base domain name is empty"));
    }

    if name.contains(' ') || name.contains('.') || name.contains('/') || name.contains('\\') {
        return Err(DomainSweepError::validation(
            "Invalid characters (space, dot, slashes) in base domain name",
        ));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(DomainSweepError::validation(
            "Domain part cannot start or end with a hyphen",
        ));
    }

    let valid_chars = Regex::new(r"^[a-z0-9-]+$")
        .map_err(|e| DomainSweepError::internal(format!("Invalid regex: {}", e)))?;
    if !valid_chars.is_match(name) {
        return Err(DomainSweepError::validation(
            "Invalid characters. Use only letters, numbers, and hyphens",
        ));
    }

    Ok(())
}
