//! HTTP transport layer for the LegiScan SDK.
//!
//! Every LegiScan operation is a single GET against the base endpoint with
//! `key`, `op` and operation parameters in the query string. Failures are
//! classified here so the API modules only deal with payload shapes.

use crate::config::ClientConfig;
use crate::error::{LegiScanError, LegiScanResult};
use legiscan_core::reshape::decode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Query parameters for one operation. Absent values are never sent.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    pub fn with_opt<T: ToString>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(name, _)| *name).collect()
    }
}

/// HTTP transport for LegiScan operations.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> LegiScanResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LegiScanError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Perform one operation and return the top-level response object.
    pub async fn request(&self, op: &str, params: Params) -> LegiScanResult<Map<String, Value>> {
        debug!(op, params = ?params.names(), "LegiScan request");

        let mut query: Vec<(&str, &str)> = vec![("key", self.config.api_key()), ("op", op)];
        query.extend(params.0.iter().map(|(name, value)| (*name, value.as_str())));

        let response = self
            .client
            .get(self.config.base_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| LegiScanError::from_transport(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LegiScanError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LegiScanError::from_transport(e, self.config.timeout))?;
        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| LegiScanError::Network(format!("invalid JSON in response: {e}")))?;

        let Value::Object(body) = value else {
            return Err(LegiScanError::InvalidResponse(format!(
                "{op} did not return a JSON object"
            )));
        };

        if body.get("status").and_then(Value::as_str) == Some("ERROR") {
            let message = body
                .get("alert")
                .and_then(|alert| alert.get("message"))
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or("Unknown API error");
            debug!(op, "LegiScan returned an error status");
            return Err(LegiScanError::Api {
                message: message.to_string(),
            });
        }

        Ok(body)
    }

    /// Perform an operation and take one top-level field of the response.
    pub async fn fetch_value(
        &self,
        op: &str,
        params: Params,
        field: &str,
    ) -> LegiScanResult<Value> {
        let mut body = self.request(op, params).await?;
        body.remove(field).ok_or_else(|| {
            LegiScanError::InvalidResponse(format!("{op} response is missing '{field}'"))
        })
    }

    /// Perform an operation and deserialize one top-level field.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        op: &str,
        params: Params,
        field: &str,
    ) -> LegiScanResult<T> {
        let value = self.fetch_value(op, params, field).await?;
        decode(value).map_err(|e| LegiScanError::InvalidResponse(format!("{op}: {e}")))
    }
}
