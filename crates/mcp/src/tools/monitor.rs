// GAITS monitor list tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_enum, json_schema_object, json_schema_string, parse_arguments, Tool, ToolTier,
};
use anyhow::Result;
use legiscan_core::{BillIdList, MonitorAction, MonitorRecord, Stance};
use legiscan_sdk::LegiScanClient;
use serde::Deserialize;
use serde_json::{json, Value};

/// `legiscan_get_monitor_list` or its `_raw` variant.
pub struct GetMonitorListTool {
    client: LegiScanClient,
    raw: bool,
}

impl GetMonitorListTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client, raw: false }
    }

    pub fn raw(client: LegiScanClient) -> Self {
        Self { client, raw: true }
    }
}

#[derive(Debug, Deserialize)]
struct MonitorListArgs {
    #[serde(default)]
    record: Option<MonitorRecord>,
}

#[async_trait::async_trait]
impl Tool for GetMonitorListTool {
    fn schema(&self) -> ToolSchema {
        let (name, description) = if self.raw {
            (
                "legiscan_get_monitor_list_raw",
                "List the bills on this API key's monitor list with only bill_id, stance, and \
                 change hash, for cheap change detection.",
            )
        } else {
            (
                "legiscan_get_monitor_list",
                "List the bills on this API key's monitor list with stance, status, and last \
                 action.",
            )
        };

        ToolSchema {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: json_schema_object(
                json!({
                    "record": json_schema_string(
                        "'current' (default), 'archived', or a year of 2010 or later"
                    )
                }),
                vec![],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: MonitorListArgs = parse_arguments(arguments)?;
        let monitor = self.client.monitor();

        if self.raw {
            Ok(CallToolResult::json(&monitor.list_raw(args.record).await?)?)
        } else {
            Ok(CallToolResult::json(&monitor.list(args.record).await?)?)
        }
    }
}

pub struct SetMonitorTool {
    client: LegiScanClient,
}

impl SetMonitorTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SetMonitorArgs {
    list: BillIdList,
    action: MonitorAction,
    #[serde(default)]
    stance: Option<Stance>,
}

#[async_trait::async_trait]
impl Tool for SetMonitorTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_set_monitor".to_string(),
            description: "Add bills to, remove them from, or change their stance on this API \
                          key's monitor list. This changes account state."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "list": json_schema_string("Comma-separated bill IDs, e.g. '123,456'"),
                    "action": json_schema_enum(
                        &["monitor", "remove", "set"],
                        "monitor adds bills, remove drops them, set changes their stance"
                    ),
                    "stance": json_schema_enum(
                        &["watch", "support", "oppose"],
                        "Position on the bills (default watch)"
                    )
                }),
                vec!["list", "action"],
            ),
            annotations: None,
        }
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Write
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SetMonitorArgs = parse_arguments(arguments)?;
        let result = self
            .client
            .monitor()
            .set(&args.list, args.action, args.stance)
            .await?;
        Ok(CallToolResult::json(&result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client;
    use wiremock::matchers::{method, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_set_monitor_sends_canonical_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "setMonitor"))
            .and(query_param("list", "123,456"))
            .and(query_param("action", "monitor"))
            .and(query_param("stance", "support"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "return": { "123": "Success", "456": "Success" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SetMonitorTool::new(client(&server));
        let result = tool
            .execute(json!({ "list": "123, 456", "action": "monitor", "stance": "support" }))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(body["456"], "Success");
    }

    #[tokio::test]
    async fn test_set_monitor_rejects_non_numeric_ids() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = SetMonitorTool::new(client(&server));
        let err = tool
            .execute(json!({ "list": "123,abc", "action": "remove" }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("comma-separated numeric bill IDs"));
    }

    #[tokio::test]
    async fn test_monitor_list_accepts_numeric_year() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getMonitorListRaw"))
            .and(query_param("record", "2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "monitorlist": {
                    "0": { "bill_id": 5, "stance": "1", "change_hash": "h" }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetMonitorListTool::raw(client(&server));
        let result = tool.execute(json!({ "record": 2024 })).await.unwrap();

        let body: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(body[0]["bill_id"], 5);
        assert_eq!(body[0]["stance"], 1);
    }

    #[tokio::test]
    async fn test_monitor_list_defaults_to_current() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getMonitorList"))
            .and(query_param_is_missing("record"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "monitorlist": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetMonitorListTool::new(client(&server));
        let result = tool.execute(json!({})).await.unwrap();
        assert_eq!(result.text().unwrap(), "[]");
    }

    #[test]
    fn test_set_monitor_is_write_tier() {
        let tool = SetMonitorTool::new(LegiScanClient::new("k").unwrap());
        assert_eq!(tool.tier(), ToolTier::Write);
    }
}
