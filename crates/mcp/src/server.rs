//! MCP server over newline-delimited JSON-RPC 2.0.
//!
//! Requests are read one line at a time. Responses go through a channel to a
//! single writer task, so `tools/call` can run on its own task and answer
//! whenever it finishes without interleaving output.

use crate::protocol::*;
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "legiscan-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SERVER_INSTRUCTIONS: &str = "\
These tools read US state and federal legislation from LegiScan.

Never ask the user for internal IDs (bill_id, people_id, session_id, doc_id). \
Resolve them yourself:
- A printed bill number like 'AB 858' becomes a bill_id via legiscan_find_bill_by_number.
- A legislator's name becomes a people_id via legiscan_find_legislator.
- A state abbreviation is enough for most tools; they use the state's current session.
- Text, amendment, supplement, and roll call IDs are listed in legiscan_get_bill.

Common chains:
- How did a legislator vote on a bill: legiscan_find_legislator, then \
legiscan_find_bill_by_number or legiscan_search, then legiscan_get_legislator_votes.
- What did a legislator author: legiscan_find_legislator, then legiscan_get_primary_authored.
- What is happening on a topic: legiscan_search, then legiscan_get_bill for the top results.

Use legiscan_get_session_list only for past or special sessions, and legiscan_set_monitor \
only when the user asks to change their monitor list.";

/// MCP server dispatching to a tool registry.
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    initialized: bool,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            initialized: false,
        }
    }

    /// Serve on the process's stdin and stdout until stdin closes or
    /// `shutdown` resolves.
    pub async fn serve_stdio<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        self.serve_until(tokio::io::stdin(), tokio::io::stdout(), shutdown)
            .await
    }

    /// Serve until `reader` reaches end of input.
    pub async fn serve<R, W>(&mut self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        self.serve_until(reader, writer, std::future::pending::<()>())
            .await
    }

    /// Serve until `reader` reaches end of input or `shutdown` resolves.
    /// Either way, in-flight tool calls are answered before this returns.
    pub async fn serve_until<R, W, F>(&mut self, reader: R, writer: W, shutdown: F) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
        F: Future<Output = ()>,
    {
        let mut lines = FramedRead::new(reader, LinesCodec::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let writer = tokio::spawn(write_responses(writer, rx));
        tokio::pin!(shutdown);

        info!(tools = self.registry.len(), "MCP server listening on stdio");

        loop {
            let line = tokio::select! {
                line = lines.next() => line,
                _ = &mut shutdown => {
                    info!("Shutdown requested, finishing in-flight calls");
                    break;
                }
            };

            let line = match line {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    error!(error = %e, "Failed to read request line");
                    break;
                }
                None => break,
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!(bytes = line.len(), "Received message");
            self.handle_message(line, &tx);
        }

        // Spawned calls hold their own senders; the writer ends after the last one
        drop(tx);
        writer.await??;

        info!("MCP server shutting down");
        Ok(())
    }

    fn handle_message(&mut self, message: &str, tx: &mpsc::UnboundedSender<JsonRpcResponse>) {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparseable message");
                let error = JsonRpcError::parse_error(e.to_string());
                send(tx, JsonRpcResponse::error(Value::Null, error));
                return;
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                let error = JsonRpcError::invalid_request(e.to_string());
                send(tx, JsonRpcResponse::error(id, error));
                return;
            }
        };

        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return;
        };

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => match self.spawn_tool_call(id.clone(), request.params, tx) {
                Ok(()) => return,
                Err(e) => Err(e),
            },
            method => Err(JsonRpcError::method_not_found(method)),
        };

        let response = match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, e),
        };
        send(tx, response);
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => info!("Client confirmed initialization"),
            "notifications/cancelled" => debug!("Client cancelled a request"),
            method => debug!(method, "Ignoring notification"),
        }
    }

    fn handle_initialize(&mut self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?,
            None => InitializeParams::default(),
        };

        match &params.client_info {
            Some(client) => info!(
                client = %client.name,
                version = client.version.as_deref().unwrap_or("unknown"),
                protocol = %params.protocol_version,
                "Initializing MCP session"
            ),
            None => info!(protocol = %params.protocol_version, "Initializing MCP session"),
        }

        self.initialized = true;

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        };

        serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
    }

    fn handle_tools_list(&self) -> Result<Value, JsonRpcError> {
        self.ensure_initialized()?;

        let result = ListToolsResult {
            tools: self.registry.list_schemas(),
        };
        serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
    }

    /// Validate a `tools/call` request and run it on its own task.
    fn spawn_tool_call(
        &self,
        id: Value,
        params: Option<Value>,
        tx: &mpsc::UnboundedSender<JsonRpcResponse>,
    ) -> Result<(), JsonRpcError> {
        self.ensure_initialized()?;

        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tool call parameters"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        let registry = self.registry.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = registry.call(&params.name, params.arguments).await;
            send(&tx, JsonRpcResponse::from_result(id, &result));
        });
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), JsonRpcError> {
        if self.initialized {
            Ok(())
        } else {
            Err(JsonRpcError::invalid_request("Server not initialized"))
        }
    }
}

fn send(tx: &mpsc::UnboundedSender<JsonRpcResponse>, response: JsonRpcResponse) {
    if tx.send(response).is_err() {
        warn!("Response dropped, writer already closed");
    }
}

async fn write_responses<W>(
    writer: W,
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut sink = FramedWrite::new(writer, LinesCodec::new());

    while let Some(response) = rx.recv().await {
        let line = serde_json::to_string(&response)?;
        sink.send(line).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client;
    use crate::tools::build_registry;
    use std::time::Duration;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Feed `input` lines to a fresh server and collect every response.
    async fn exchange(registry: ToolRegistry, input: &[Value]) -> Vec<Value> {
        let (mut client_end, server_in) = tokio::io::duplex(64 * 1024);
        let (server_out, client_out) = tokio::io::duplex(64 * 1024);

        let server = tokio::spawn(async move {
            McpServer::new(registry).serve(server_in, server_out).await
        });

        for message in input {
            client_end
                .write_all(format!("{}\n", message).as_bytes())
                .await
                .unwrap();
        }
        drop(client_end);

        server.await.unwrap().unwrap();

        let mut responses = Vec::new();
        let mut lines = BufReader::new(client_out).lines();
        while let Some(line) = lines.next_line().await.unwrap() {
            responses.push(serde_json::from_str(&line).unwrap());
        }
        responses
    }

    fn by_id(responses: &[Value], id: i64) -> &Value {
        responses
            .iter()
            .find(|r| r["id"] == id)
            .unwrap_or_else(|| panic!("no response with id {id}"))
    }

    fn initialize(id: i64) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "test", "version": "1.0" }
            }
        })
    }

    #[tokio::test]
    async fn test_initialize_and_list_tools() {
        let registry = build_registry(&legiscan_sdk::LegiScanClient::new("k").unwrap());
        let responses = exchange(
            registry,
            &[
                initialize(1),
                json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
                json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
            ],
        )
        .await;

        assert_eq!(responses.len(), 2);

        let init = &by_id(&responses, 1)["result"];
        assert_eq!(init["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(init["serverInfo"]["name"], SERVER_NAME);
        let instructions = init["instructions"].as_str().unwrap();
        assert!(instructions.contains("legiscan_find_bill_by_number"));
        assert!(instructions.contains("legiscan_get_legislator_votes"));
        assert!(instructions.contains("legiscan_get_primary_authored"));

        let tools = by_id(&responses, 2)["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 22);
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_requires_initialize() {
        let responses = exchange(
            ToolRegistry::new(),
            &[json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" })],
        )
        .await;

        assert_eq!(responses[0]["error"]["code"], -32600);
        assert_eq!(responses[0]["error"]["message"], "Server not initialized");
    }

    #[tokio::test]
    async fn test_parse_error_has_null_id() {
        let (mut client_end, server_in) = tokio::io::duplex(1024);
        let (server_out, client_out) = tokio::io::duplex(1024);

        client_end.write_all(b"{not json\n").await.unwrap();
        drop(client_end);

        McpServer::new(ToolRegistry::new())
            .serve(server_in, server_out)
            .await
            .unwrap();

        let mut lines = BufReader::new(client_out).lines();
        let line = lines.next_line().await.unwrap().unwrap();
        let response: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(response["id"], Value::Null);
        assert_eq!(response["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_ping_and_unknown_method() {
        let responses = exchange(
            ToolRegistry::new(),
            &[
                json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }),
                json!({ "jsonrpc": "2.0", "id": 2, "method": "resources/list" }),
            ],
        )
        .await;

        assert_eq!(by_id(&responses, 1)["result"], json!({}));
        assert_eq!(by_id(&responses, 2)["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_tool_call_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getBill"))
            .and(query_param("id", "77"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "bill": { "bill_id": 77, "bill_number": "HB 77" }
            })))
            .mount(&server)
            .await;

        let responses = exchange(
            build_registry(&client(&server)),
            &[
                initialize(1),
                json!({
                    "jsonrpc": "2.0",
                    "id": 2,
                    "method": "tools/call",
                    "params": { "name": "legiscan_get_bill", "arguments": { "bill_id": 77 } }
                }),
                json!({
                    "jsonrpc": "2.0",
                    "id": 3,
                    "method": "tools/call",
                    "params": { "name": "legiscan_get_bill", "arguments": {} }
                }),
            ],
        )
        .await;

        let ok = &by_id(&responses, 2)["result"];
        assert!(ok.get("isError").is_none());
        let bill: Value = serde_json::from_str(ok["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(bill["bill_number"], "HB 77");

        let failed = &by_id(&responses, 3)["result"];
        assert_eq!(failed["isError"], true);
        assert!(failed["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Error: Invalid arguments:"));
    }

    #[tokio::test]
    async fn test_shutdown_answers_in_flight_calls() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getBill"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "status": "OK",
                        "bill": { "bill_id": 5, "bill_number": "SB 5" }
                    }))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (mut client_end, server_in) = tokio::io::duplex(64 * 1024);
        let (server_out, client_out) = tokio::io::duplex(64 * 1024);

        for message in [
            initialize(1),
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": { "name": "legiscan_get_bill", "arguments": { "bill_id": 5 } }
            }),
        ] {
            client_end
                .write_all(format!("{}\n", message).as_bytes())
                .await
                .unwrap();
        }

        // Input stays open; only the shutdown future ends the read loop
        let call_in_flight = async {
            while !server
                .received_requests()
                .await
                .is_some_and(|requests| !requests.is_empty())
            {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };

        McpServer::new(build_registry(&client(&server)))
            .serve_until(server_in, server_out, call_in_flight)
            .await
            .unwrap();
        drop(client_end);

        let mut responses = Vec::new();
        let mut lines = BufReader::new(client_out).lines();
        while let Some(line) = lines.next_line().await.unwrap() {
            responses.push(serde_json::from_str::<Value>(&line).unwrap());
        }

        let result = &by_id(&responses, 2)["result"];
        let bill: Value =
            serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(bill["bill_number"], "SB 5");
    }
}
