// Bulk dataset tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_enum, json_schema_integer, json_schema_object, json_schema_state,
    json_schema_string, parse_arguments, Tool,
};
use anyhow::Result;
use legiscan_core::{DatasetFormat, StateCode};
use legiscan_sdk::LegiScanClient;
use serde::Deserialize;
use serde_json::{json, Value};

pub struct GetDatasetListTool {
    client: LegiScanClient,
}

impl GetDatasetListTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetListArgs {
    #[serde(default)]
    state: Option<StateCode>,
    #[serde(default)]
    year: Option<u16>,
}

#[async_trait::async_trait]
impl Tool for GetDatasetListTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_dataset_list".to_string(),
            description: "List downloadable session datasets with their hash, size, date, and \
                          the access_key needed by legiscan_get_dataset."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "state": json_schema_state("Two-letter state abbreviation to filter by"),
                    "year": json_schema_integer("Only datasets for sessions covering this year")
                }),
                vec![],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: DatasetListArgs = parse_arguments(arguments)?;
        let datasets = self
            .client
            .datasets()
            .list(args.state.as_ref(), args.year)
            .await?;
        Ok(CallToolResult::json(&datasets)?)
    }
}

pub struct GetDatasetTool {
    client: LegiScanClient,
}

impl GetDatasetTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetArgs {
    session_id: u64,
    access_key: String,
    #[serde(default)]
    format: Option<DatasetFormat>,
}

#[async_trait::async_trait]
impl Tool for GetDatasetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_dataset".to_string(),
            description: "Download a whole session as a base64 ZIP archive of bills, people, \
                          and votes. Archives are large; prefer the per-bill tools unless you \
                          need everything."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "session_id": json_schema_integer("Session ID from legiscan_get_dataset_list"),
                    "access_key": json_schema_string("Access key from legiscan_get_dataset_list"),
                    "format": json_schema_enum(&["json", "csv"], "Archive content format (default json)")
                }),
                vec!["session_id", "access_key"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: DatasetArgs = parse_arguments(arguments)?;
        let archive = self
            .client
            .datasets()
            .get(args.session_id, &args.access_key, args.format)
            .await?;

        Ok(CallToolResult::json(&json!({
            "state_id": archive.state_id,
            "session_id": archive.session_id,
            "session_name": archive.session_name,
            "dataset_hash": archive.dataset_hash,
            "dataset_date": archive.dataset_date,
            "dataset_size": archive.dataset_size,
            "mime_type": archive.mime_type,
            "zip_base64_length": archive.zip.len(),
            "zip": archive.zip,
        }))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_dataset_reports_archive_length() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getDataset"))
            .and(query_param("id", "2200"))
            .and(query_param("access_key", "k3y"))
            .and(query_param("format", "csv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "dataset": {
                    "state_id": 43,
                    "session_id": 2200,
                    "session_name": "89th Legislature",
                    "dataset_hash": "abc",
                    "mime_type": "application/zip",
                    "zip": "UEsDBA=="
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetDatasetTool::new(client(&server));
        let result = tool
            .execute(json!({ "session_id": 2200, "access_key": "k3y", "format": "csv" }))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(body["zip_base64_length"], 8);
        assert_eq!(body["zip"], "UEsDBA==");
        assert_eq!(body["mime_type"], "application/zip");
    }

    #[tokio::test]
    async fn test_unknown_format_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = GetDatasetTool::new(client(&server));
        let err = tool
            .execute(json!({ "session_id": 1, "access_key": "k", "format": "xml" }))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments:"));
    }

    #[tokio::test]
    async fn test_list_by_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getDatasetList"))
            .and(query_param("state", "TX"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "datasetlist": [{ "session_id": 2200, "access_key": "k3y" }]
            })))
            .mount(&server)
            .await;

        let tool = GetDatasetListTool::new(client(&server));
        let result = tool.execute(json!({ "state": "tx" })).await.unwrap();

        let body: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(body[0]["access_key"], "k3y");
    }
}
