//! Configuration types for the LegiScan SDK.

use crate::error::{LegiScanError, LegiScanResult};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Public LegiScan API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.legiscan.com/";

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the LegiScan client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API endpoint; every operation is a GET against this URL.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    api_key: String,
}

impl ClientConfig {
    /// Create a configuration for the public endpoint.
    pub fn new(api_key: impl Into<String>) -> LegiScanResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LegiScanError::Config(
                "LegiScan API key is required".to_string(),
            ));
        }

        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            timeout: DEFAULT_TIMEOUT,
            api_key,
        })
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("test-key").unwrap();

        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        for key in ["", "   "] {
            let err = ClientConfig::new(key).unwrap_err();
            assert_eq!(err.to_string(), "LegiScan API key is required");
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret").unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
