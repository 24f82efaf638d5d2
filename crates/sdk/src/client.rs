//! Main client for the LegiScan SDK.

use crate::api::*;
use crate::config::ClientConfig;
use crate::error::{LegiScanError, LegiScanResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the LegiScan API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct LegiScanClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl LegiScanClient {
    /// Create a new client builder.
    pub fn builder() -> LegiScanClientBuilder {
        LegiScanClientBuilder::new()
    }

    /// Create a client for the public endpoint with default settings.
    pub fn new(api_key: impl Into<String>) -> LegiScanResult<Self> {
        Self::from_config(ClientConfig::new(api_key)?)
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> LegiScanResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session listing.
    pub fn sessions(&self) -> SessionsApi<'_> {
        SessionsApi::new(self)
    }

    /// Master lists, bill detail and bill lookup by number.
    pub fn bills(&self) -> BillsApi<'_> {
        BillsApi::new(self)
    }

    /// Bill texts, amendments and supplements.
    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    /// Roll call votes.
    pub fn votes(&self) -> VotesApi<'_> {
        VotesApi::new(self)
    }

    /// Legislators, rosters and sponsorships.
    pub fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    /// Full-text search.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Bulk dataset archives.
    pub fn datasets(&self) -> DatasetsApi<'_> {
        DatasetsApi::new(self)
    }

    /// GAITS monitor list.
    pub fn monitor(&self) -> MonitorApi<'_> {
        MonitorApi::new(self)
    }
}

/// Builder for creating a LegiScanClient.
pub struct LegiScanClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl LegiScanClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> LegiScanResult<LegiScanClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| LegiScanError::Config("LegiScan API key is required".to_string()))?;

        let mut config = ClientConfig::new(api_key)?;
        if let Some(base_url) = self.base_url {
            config.base_url = Url::parse(&base_url)?;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        LegiScanClient::from_config(config)
    }
}

impl Default for LegiScanClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
