//! Centralized error types for SEO audits.

use thiserror::Error;

/// Main error type for audit operations.
///
/// The `Display` output of each variant is the message returned to API
/// clients, so validation messages carry no prefix.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

impl AuditError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a fetch error from the upstream status text.
    pub fn fetch(status_text: impl Into<String>) -> Self {
        Self::Fetch(status_text.into())
    }

    /// Create an unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short machine-friendly name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Fetch(_) => "fetch",
            Self::Unexpected(_) => "unexpected",
            Self::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_has_no_prefix() {
        let err = AuditError::validation("URL is required");
        assert_eq!(err.to_string(), "URL is required");
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_fetch_message_carries_status_text() {
        let err = AuditError::fetch("Not Found");
        assert_eq!(err.to_string(), "Failed to fetch URL: Not Found");
    }
}
