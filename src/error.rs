//! Error handling for domain-sweep

use thiserror::Error;

/// Main error type for domain-sweep
#[derive(Error, Debug, Clone)]
pub enum DomainSweepError {
    #[error("WHOIS error for '{domain}': {message}")]
    Whois { domain: String, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl DomainSweepError {
    /// Create a WHOIS lookup error
    pub fn whois(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Whois {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// True if this failure was a timeout rather than a hard error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// One-line note suitable for embedding in verdict detail text.
    pub fn short_note(&self) -> String {
        match self {
            Self::Timeout { .. } => "WHOIS Timeout".to_string(),
            other => {
                let text = other.to_string();
                let first = text.lines().next().unwrap_or_default();
                match first.char_indices().nth(70) {
                    Some((idx, _)) => format!("{}...", &first[..idx]),
                    None => first.to_string(),
                }
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for DomainSweepError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 3)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for DomainSweepError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for DomainSweepError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<tokio::time::error::Elapsed> for DomainSweepError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::timeout("Operation", 10)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainSweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainSweepError::whois("abc.com", "connection refused");
        assert!(err.to_string().contains("abc.com"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_timeout_note() {
        let err = DomainSweepError::timeout("WHOIS read", 10);
        assert!(err.is_timeout());
        assert_eq!(err.short_note(), "WHOIS Timeout");
    }

    #[test]
    fn test_short_note_truncates() {
        let err = DomainSweepError::internal("x".repeat(200));
        let note = err.short_note();
        assert!(note.ends_with("..."));
        assert!(note.len() <= 90);
    }
}
