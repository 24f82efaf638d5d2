//! Error types for the LegiScan SDK.

use legiscan_core::ValidationError;
use std::time::Duration;

/// Result type for SDK operations.
pub type LegiScanResult<T> = Result<T, LegiScanError>;

/// Error types that can occur when calling LegiScan.
#[derive(Debug, thiserror::Error)]
pub enum LegiScanError {
    /// Invalid client configuration (missing API key, bad base URL).
    #[error("{0}")]
    Config(String),

    /// Operation input rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {}ms", .after.as_millis())]
    Timeout { after: Duration },

    /// Non-2xx HTTP response.
    #[error("HTTP error {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// LegiScan answered with `status: "ERROR"`.
    #[error("{message}")]
    Api { message: String },

    /// Connection, DNS, or body decoding failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsed but did not have the expected shape.
    #[error("Network error: unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Coarse failure classification, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    Timeout,
    Http,
    Api,
    Network,
}

impl LegiScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::InvalidUrl(_) => ErrorKind::Config,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Http { .. } => ErrorKind::Http,
            Self::Api { .. } => ErrorKind::Api,
            Self::Network(_) | Self::InvalidResponse(_) => ErrorKind::Network,
        }
    }

    /// Classify a transport failure.
    ///
    /// The request URL carries the API key, so it is stripped before the
    /// error is rendered.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout { after: timeout };
        }

        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Network(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let timeout = LegiScanError::Timeout {
            after: Duration::from_secs(30),
        };
        assert_eq!(timeout.to_string(), "Request timed out after 30000ms");

        let http = LegiScanError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(http.to_string(), "HTTP error 500: Internal Server Error");

        let api = LegiScanError::Api {
            message: "Bad request".to_string(),
        };
        assert_eq!(api.to_string(), "Bad request");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            LegiScanError::Config("x".into()).kind(),
            ErrorKind::Config
        );
        assert_eq!(
            LegiScanError::from(ValidationError::MissingScope).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            LegiScanError::InvalidResponse("x".into()).kind(),
            ErrorKind::Network
        );
    }

    #[test]
    fn test_validation_message_is_transparent() {
        let err = LegiScanError::from(ValidationError::MissingScope);
        assert_eq!(err.to_string(), "Either session_id or state is required");
    }
}
