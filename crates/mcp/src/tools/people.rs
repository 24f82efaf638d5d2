// Legislator tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::bills::{scope_properties, ScopeArgs};
use crate::tools::{json_schema_integer, json_schema_object, json_schema_string, parse_arguments, Tool};
use anyhow::Result;
use legiscan_sdk::api::{DEFAULT_PRIMARY_CHECKS, MAX_PRIMARY_CHECKS, MAX_ROLL_CALLS};
use legiscan_sdk::LegiScanClient;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct PersonArgs {
    people_id: u64,
}

fn people_id_schema() -> Value {
    json!({
        "people_id": json_schema_integer(
            "Legislator ID. Use legiscan_find_legislator to get it from a name."
        )
    })
}

pub struct GetPersonTool {
    client: LegiScanClient,
}

impl GetPersonTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetPersonTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_person".to_string(),
            description: "Get a legislator's party, role, district, and IDs in outside \
                          directories (VoteSmart, OpenSecrets, Ballotpedia, FollowTheMoney). Use \
                          legiscan_find_legislator first if you only have a name."
                .to_string(),
            input_schema: json_schema_object(people_id_schema(), vec!["people_id"]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: PersonArgs = parse_arguments(arguments)?;
        let person = self.client.people().get(args.people_id).await?;
        Ok(CallToolResult::json(&person)?)
    }
}

pub struct FindLegislatorTool {
    client: LegiScanClient,
}

impl FindLegislatorTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct FindLegislatorArgs {
    name: String,
    #[serde(flatten)]
    scope: ScopeArgs,
}

#[async_trait::async_trait]
impl Tool for FindLegislatorTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = scope_properties();
        properties["name"] =
            json_schema_string("Full name, last name, or nickname, e.g. 'Smith' or 'Bob Smith'");

        ToolSchema {
            name: "legiscan_find_legislator".to_string(),
            description: "Find legislators by name in a state's current session or a given \
                          session. Returns each match with people_id, party, role, and district."
                .to_string(),
            input_schema: json_schema_object(properties, vec!["name"]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: FindLegislatorArgs = parse_arguments(arguments)?;
        let scope = args.scope.scope()?;
        let matches = self
            .client
            .people()
            .find_legislator(&scope, &args.name)
            .await?;
        Ok(CallToolResult::json(&matches)?)
    }
}

pub struct GetSessionPeopleTool {
    client: LegiScanClient,
}

impl GetSessionPeopleTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SessionPeopleArgs {
    session_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetSessionPeopleTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_session_people".to_string(),
            description: "List every legislator serving in a session with role, party, and \
                          district."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "session_id": json_schema_integer(
                        "Session ID. Use legiscan_get_session_list to find a state's sessions."
                    )
                }),
                vec!["session_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SessionPeopleArgs = parse_arguments(arguments)?;
        let roster = self.client.people().session_people(args.session_id).await?;
        Ok(CallToolResult::json(&roster)?)
    }
}

pub struct GetSponsoredListTool {
    client: LegiScanClient,
}

impl GetSponsoredListTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetSponsoredListTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "legiscan_get_sponsored_list".to_string(),
            description: "List the bills a legislator has sponsored, across sessions, with the \
                          legislator's details and the sessions covered."
                .to_string(),
            input_schema: json_schema_object(people_id_schema(), vec!["people_id"]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: PersonArgs = parse_arguments(arguments)?;
        let sponsored = self.client.people().sponsored_list(args.people_id).await?;
        Ok(CallToolResult::json(&sponsored)?)
    }
}

pub struct GetLegislatorVotesTool {
    client: LegiScanClient,
}

impl GetLegislatorVotesTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct LegislatorVotesArgs {
    people_id: u64,
    bill_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetLegislatorVotesTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = people_id_schema();
        properties["bill_id"] = json_schema_integer(
            "Bill ID. Use legiscan_find_bill_by_number or legiscan_search to get it.",
        );

        ToolSchema {
            name: "legiscan_get_legislator_votes".to_string(),
            description: format!(
                "How one legislator voted on a bill: yea, nay, not voting, or absent on each \
                 recorded vote, with the date, motion, and whether it passed. Covers the first \
                 {MAX_ROLL_CALLS} votes on the bill. Use legiscan_find_legislator for the \
                 legislator's ID."
            ),
            input_schema: json_schema_object(properties, vec!["people_id", "bill_id"]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: LegislatorVotesArgs = parse_arguments(arguments)?;
        let votes = self
            .client
            .votes()
            .legislator_votes(args.people_id, args.bill_id)
            .await?;
        Ok(CallToolResult::json(&votes)?)
    }
}

pub struct GetPrimaryAuthoredTool {
    client: LegiScanClient,
}

impl GetPrimaryAuthoredTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct PrimaryAuthoredArgs {
    people_id: u64,
    #[serde(default)]
    session_id: Option<u64>,
    #[serde(default)]
    limit: Option<usize>,
}

#[async_trait::async_trait]
impl Tool for GetPrimaryAuthoredTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = people_id_schema();
        properties["session_id"] =
            json_schema_integer("Only check bills from this session (optional)");
        properties["limit"] = json_schema_integer(&format!(
            "How many sponsored bills to check, 1 to {MAX_PRIMARY_CHECKS} \
             (default {DEFAULT_PRIMARY_CHECKS})"
        ));

        ToolSchema {
            name: "legiscan_get_primary_authored".to_string(),
            description: "List the bills a legislator is the primary author of, leaving out \
                          bills they only co-sponsored. Use legiscan_find_legislator for the \
                          legislator's ID."
                .to_string(),
            input_schema: json_schema_object(properties, vec!["people_id"]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: PrimaryAuthoredArgs = parse_arguments(arguments)?;
        let authored = self
            .client
            .people()
            .primary_authored(
                args.people_id,
                args.session_id,
                args.limit.unwrap_or(DEFAULT_PRIMARY_CHECKS),
            )
            .await?;
        Ok(CallToolResult::json(&authored)?)
    }
}
