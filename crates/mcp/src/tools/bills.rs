// Bill tools: master lists, bill detail, lookup by number, roll calls

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_state, json_schema_string,
    parse_arguments, Tool,
};
use anyhow::Result;
use legiscan_core::StateCode;
use legiscan_sdk::{LegiScanClient, Scope};
use serde::Deserialize;
use serde_json::{json, Value};

/// Session selection shared by the session-scoped tools.
#[derive(Debug, Deserialize)]
pub(crate) struct ScopeArgs {
    #[serde(default)]
    pub session_id: Option<u64>,
    #[serde(default)]
    pub state: Option<StateCode>,
}

impl ScopeArgs {
    pub fn scope(self) -> Result<Scope> {
        Ok(Scope::from_parts(self.session_id, self.state)?)
    }
}

pub(crate) fn scope_properties() -> Value {
    json!({
        "session_id": json_schema_integer(
            "Session ID. Takes precedence over state when both are given."
        ),
        "state": json_schema_state(
            "Two-letter state abbreviation (e.g. CA). Uses the state's current session."
        )
    })
}

pub struct GetMasterListTool {
    client: LegiScanClient,
}

impl GetMasterListTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetMasterListTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_master_list".to_string(),
            description: "List every bill in a legislative session with its number, status, \
                          title, and last action. Give either a session_id or a state; the \
                          returned bill_id feeds legiscan_get_bill."
                .to_string(),
            input_schema: json_schema_object(scope_properties(), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let scope = parse_arguments::<ScopeArgs>(arguments)?.scope()?;
        let bills = self.client.bills().master_list(&scope).await?;
        Ok(CallToolResult::json(&bills)?)
    }
}

pub struct GetMasterListRawTool {
    client: LegiScanClient,
}

impl GetMasterListRawTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetMasterListRawTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_master_list_raw".to_string(),
            description: "List every bill in a session with only its ID, number, and change \
                          hash. Compare change hashes between calls to spot bills that changed."
                .to_string(),
            input_schema: json_schema_object(scope_properties(), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let scope = parse_arguments::<ScopeArgs>(arguments)?.scope()?;
        let bills = self.client.bills().master_list_raw(&scope).await?;
        Ok(CallToolResult::json(&bills)?)
    }
}

pub struct GetBillTool {
    client: LegiScanClient,
}

impl GetBillTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct BillArgs {
    bill_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetBillTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_bill".to_string(),
            description: "Get everything about one bill: sponsors, history, votes, text \
                          versions, amendments, and supplements. Use \
                          legiscan_find_bill_by_number when you only know the printed number."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "bill_id": json_schema_integer("Bill ID from a master list, search, or bill lookup")
                }),
                vec!["bill_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: BillArgs = parse_arguments(arguments)?;
        let bill = self.client.bills().get(args.bill_id).await?;
        Ok(CallToolResult::json(&bill)?)
    }
}

pub struct FindBillByNumberTool {
    client: LegiScanClient,
}

impl FindBillByNumberTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct FindBillArgs {
    bill_number: String,
    #[serde(flatten)]
    scope: ScopeArgs,
}

#[async_trait::async_trait]
impl Tool for FindBillByNumberTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = scope_properties();
        properties["bill_number"] =
            json_schema_string("Printed bill number in any common format, e.g. 'AB 858', 'ab858', 'SB-12'");

        ToolSchema {
            name: "legiscan_find_bill_by_number".to_string(),
            description: "Find a bill by its printed number (like 'AB 858') in a state's current \
                          session or a given session. Returns the bill summary including bill_id, \
                          or found: false when nothing matches."
                .to_string(),
            input_schema: json_schema_object(properties, vec!["bill_number"]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: FindBillArgs = parse_arguments(arguments)?;
        let scope = args.scope.scope()?;

        let found = self
            .client
            .bills()
            .find_by_number(&scope, &args.bill_number)
            .await?;

        let body = match found {
            Some(bill) => json!({ "found": true, "bill": bill }),
            None => json!({
                "found": false,
                "message": format!("No bill matching '{}' in {}", args.bill_number, scope)
            }),
        };
        Ok(CallToolResult::json(&body)?)
    }
}

pub struct GetRollCallTool {
    client: LegiScanClient,
}

impl GetRollCallTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RollCallArgs {
    roll_call_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetRollCallTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_roll_call".to_string(),
            description: "Get a recorded vote: totals, whether it passed, and how each legislator \
                          voted. Roll call IDs are listed in the votes section of legiscan_get_bill."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "roll_call_id": json_schema_integer("Roll call ID from a bill's vote list")
                }),
                vec!["roll_call_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: RollCallArgs = parse_arguments(arguments)?;
        let roll_call = self.client.votes().roll_call(args.roll_call_id).await?;
        Ok(CallToolResult::json(&roll_call)?)
    }
}
