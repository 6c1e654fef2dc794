//! Completion error types

use thiserror::Error;

/// Completion error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    pub message: String,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(
            CompletionErrorKind::MissingCredential,
            "OpenRouter API key not configured",
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Timeout, message)
    }

    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::UpstreamStatus(status), message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::MalformedResponse, message)
    }

    pub fn empty() -> Self {
        Self::new(
            CompletionErrorKind::EmptyCompletion,
            "Model returned an empty completion",
        )
    }

    pub fn cancelled() -> Self {
        Self::new(CompletionErrorKind::Cancelled, "Request cancelled by caller")
    }
}

/// Why a completion attempt produced no usable text.
///
/// Every kind is absorbed by the dispatcher and resolved through the
/// fallback responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// No API key configured, no request was made
    MissingCredential,
    /// Connection refused, DNS failure, body read error
    Network,
    /// Request exceeded the configured timeout
    Timeout,
    /// Non-200 status from the provider
    UpstreamStatus(u16),
    /// Body was not JSON or had no choices
    MalformedResponse,
    /// Completion text was empty after trimming
    EmptyCompletion,
    /// Caller abandoned the request
    Cancelled,
}

impl CompletionErrorKind {
    /// Short label used in structured logs
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::UpstreamStatus(_) => "upstream_status",
            Self::MalformedResponse => "malformed_response",
            Self::EmptyCompletion => "empty_completion",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a network request actually went out for this failure
    pub fn attempted_request(self) -> bool {
        !matches!(self, Self::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(
            CompletionError::missing_credential().kind,
            CompletionErrorKind::MissingCredential
        );
        assert_eq!(
            CompletionError::upstream_status(502, "bad gateway").kind,
            CompletionErrorKind::UpstreamStatus(502)
        );
        assert_eq!(CompletionError::empty().kind, CompletionErrorKind::EmptyCompletion);
    }

    #[test]
    fn test_display_uses_message() {
        let err = CompletionError::timeout("Request timeout after 30s");
        assert_eq!(err.to_string(), "Request timeout after 30s");
    }

    #[test]
    fn test_missing_credential_makes_no_request() {
        assert!(!CompletionErrorKind::MissingCredential.attempted_request());
        assert!(CompletionErrorKind::Timeout.attempted_request());
        assert!(CompletionErrorKind::UpstreamStatus(401).attempted_request());
    }
}
