//! Datasets API endpoints.

use crate::client::LegiScanClient;
use crate::error::LegiScanResult;
use crate::transport::Params;
use legiscan_core::validate::non_empty;
use legiscan_core::{Dataset, DatasetArchive, DatasetFormat, StateCode};

/// Datasets API for bulk session archives.
pub struct DatasetsApi<'a> {
    client: &'a LegiScanClient,
}

impl<'a> DatasetsApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// List available datasets, optionally narrowed by state and year.
    pub async fn list(
        &self,
        state: Option<&StateCode>,
        year: Option<u16>,
    ) -> LegiScanResult<Vec<Dataset>> {
        let params = Params::new()
            .with_opt("state", state)
            .with_opt("year", year);

        self.client
            .http
            .fetch("getDatasetList", params, "datasetlist")
            .await
    }

    /// Download a session archive. `access_key` comes from [`Self::list`].
    pub async fn get(
        &self,
        session_id: u64,
        access_key: &str,
        format: Option<DatasetFormat>,
    ) -> LegiScanResult<DatasetArchive> {
        non_empty("access_key", access_key)?;

        let params = Params::new()
            .with("id", session_id)
            .with("access_key", access_key)
            .with_opt("format", format.map(|f| f.as_str()));

        self.client
            .http
            .fetch("getDataset", params, "dataset")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client;
    use serde_json::json;
    use wiremock::matchers::{method, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_with_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getDatasetList"))
            .and(query_param("state", "TX"))
            .and(query_param("year", "2025"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "datasetlist": [
                    {
                        "state_id": 43,
                        "session_id": 2200,
                        "session_name": "89th Legislature",
                        "dataset_hash": "abc",
                        "dataset_size": 1024,
                        "access_key": "key123"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = StateCode::parse("tx").unwrap();
        let datasets = client(&server)
            .datasets()
            .list(Some(&state), Some(2025))
            .await
            .unwrap();

        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].access_key, "key123");
    }

    #[tokio::test]
    async fn test_get_dataset_with_format() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getDataset"))
            .and(query_param("id", "2200"))
            .and(query_param("access_key", "key123"))
            .and(query_param("format", "csv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "dataset": {
                    "session_id": 2200,
                    "dataset_hash": "abc",
                    "mime_type": "application/zip",
                    "zip": "UEsDBA=="
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let archive = client(&server)
            .datasets()
            .get(2200, "key123", Some(DatasetFormat::Csv))
            .await
            .unwrap();

        assert_eq!(archive.mime_type, "application/zip");
        assert_eq!(archive.zip, "UEsDBA==");
    }

    #[tokio::test]
    async fn test_get_dataset_default_format_omitted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getDataset"))
            .and(query_param_is_missing("format"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "dataset": { "session_id": 2200, "zip": "" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let archive = client(&server)
            .datasets()
            .get(2200, "key123", None)
            .await
            .unwrap();
        assert_eq!(archive.session_id, 2200);
    }
}
