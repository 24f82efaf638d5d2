// Session listing tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_state, parse_arguments, Tool};
use anyhow::Result;
use legiscan_core::StateCode;
use legiscan_sdk::LegiScanClient;
use serde::Deserialize;
use serde_json::{json, Value};

pub struct GetSessionListTool {
    client: LegiScanClient,
}

impl GetSessionListTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SessionListArgs {
    #[serde(default)]
    state: Option<StateCode>,
}

#[async_trait::async_trait]
impl Tool for GetSessionListTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_session_list".to_string(),
            description: "List legislative sessions with their IDs, years, and names. Most tools \
                          resolve a state's current session on their own, so only use this for \
                          past or special sessions."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "state": json_schema_state(
                        "Two-letter state abbreviation (e.g. CA, TX). Omit to list sessions for every state."
                    )
                }),
                vec![],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SessionListArgs = parse_arguments(arguments)?;
        let sessions = self.client.sessions().list(args.state.as_ref()).await?;
        Ok(CallToolResult::json(&sessions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_lists_sessions_for_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getSessionList"))
            .and(query_param("state", "NY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "sessions": [{ "session_id": 2100, "session_name": "2025-2026 General Assembly" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetSessionListTool::new(client(&server));
        let result = tool.execute(json!({ "state": "ny" })).await.unwrap();

        let sessions: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(sessions[0]["session_id"], 2100);
    }

    #[tokio::test]
    async fn test_bad_state_rejected_without_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = GetSessionListTool::new(client(&server));
        let err = tool.execute(json!({ "state": "California" })).await.unwrap_err();

        assert!(err.to_string().contains("two-letter abbreviation"));
    }
}
