// Full-text search tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_integer, json_schema_object, json_schema_string, parse_arguments, Tool};
use anyhow::Result;
use legiscan_core::{SearchState, YearFilter};
use legiscan_sdk::{LegiScanClient, SearchQuery, SearchScope};
use serde::Deserialize;
use serde_json::{json, Value};

/// `legiscan_search` (50 rich results per page) or `legiscan_search_raw`
/// (2000 minimal results per page).
pub struct SearchTool {
    client: LegiScanClient,
    raw: bool,
}

impl SearchTool {
    pub fn new(client: LegiScanClient) -> Self {
        Self { client, raw: false }
    }

    pub fn raw(client: LegiScanClient) -> Self {
        Self { client, raw: true }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    state: Option<SearchState>,
    #[serde(default)]
    year: Option<YearFilter>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    session_id: Option<u64>,
}

impl SearchArgs {
    fn into_query(self) -> SearchQuery {
        let query = SearchQuery::new(self.query).scope(SearchScope::from_parts(
            self.session_id,
            self.state,
            self.year,
        ));
        match self.page {
            Some(page) => query.page(page),
            None => query,
        }
    }
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn schema(&self) -> ToolSchema {
        let (name, description) = if self.raw {
            (
                "legiscan_search_raw",
                "Full-text search returning up to 2000 results per page with only bill_id, \
                 relevance, and change hash. Suited to bulk monitoring rather than reading.",
            )
        } else {
            (
                "legiscan_search",
                "Full-text search across bills. Returns 50 results per page with relevance, \
                 bill number, title, last action, and links.",
            )
        };

        ToolSchema {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: json_schema_object(
                json!({
                    "query": json_schema_string(
                        "Search terms. Supports quoted phrases and AND/OR/NOT."
                    ),
                    "state": {
                        "type": "string",
                        "pattern": "^([A-Za-z]{2}|[Aa][Ll][Ll])$",
                        "description": "Two-letter state abbreviation, or ALL for every state (default)"
                    },
                    "year": {
                        "type": "integer",
                        "description": "1 = all years, 2 = current, 3 = recent, 4 = prior, or an exact year after 1900"
                    },
                    "page": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Result page, starting at 1"
                    },
                    "session_id": json_schema_integer(
                        "Search one session instead of a state and year"
                    )
                }),
                vec!["query"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let query = parse_arguments::<SearchArgs>(arguments)?.into_query();
        let search = self.client.search();

        if self.raw {
            Ok(CallToolResult::json(&search.search_raw(&query).await?)?)
        } else {
            Ok(CallToolResult::json(&search.search(&query).await?)?)
        }
    }
}
