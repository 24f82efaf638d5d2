//! Search API endpoints.

use crate::client::LegiScanClient;
use crate::error::{LegiScanError, LegiScanResult};
use crate::transport::Params;
use legiscan_core::reshape::{collect_records, decode, BILL_ID};
use legiscan_core::validate::non_empty;
use legiscan_core::{
    SearchPage, SearchRawResult, SearchResult, SearchState, SearchSummary, ValidationError,
    YearFilter,
};
use serde_json::Value;

/// Where a search looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// One session; state and year are not sent.
    Session(u64),
    /// A state (or every state) and an optional year filter.
    State {
        state: SearchState,
        year: Option<YearFilter>,
    },
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::State {
            state: SearchState::All,
            year: None,
        }
    }
}

impl SearchScope {
    /// An explicit session wins over state and year.
    pub fn from_parts(
        session_id: Option<u64>,
        state: Option<SearchState>,
        year: Option<YearFilter>,
    ) -> Self {
        match session_id {
            Some(id) => Self::Session(id),
            None => Self::State {
                state: state.unwrap_or_default(),
                year,
            },
        }
    }
}

/// A full-text search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub scope: SearchScope,
    pub page: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            scope: SearchScope::default(),
            page: None,
        }
    }

    pub fn scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    fn params(&self) -> Result<Params, ValidationError> {
        non_empty("query", &self.query)?;
        if self.page == Some(0) {
            return Err(ValidationError::Page);
        }

        let params = Params::new()
            .with("query", &self.query)
            .with_opt("page", self.page);

        Ok(match &self.scope {
            SearchScope::Session(id) => params.with("id", id),
            SearchScope::State { state, year } => params
                .with("state", state)
                .with_opt("year", year.map(|y| y.as_param())),
        })
    }
}

/// Search API. Normal search pages hold 50 results, raw search pages 2000.
pub struct SearchApi<'a> {
    client: &'a LegiScanClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// Search with rich results.
    ///
    /// Results sit in the `searchresult` object as numbered keys next to its
    /// `summary`.
    pub async fn search(&self, query: &SearchQuery) -> LegiScanResult<SearchPage<SearchResult>> {
        let params = query.params()?;
        let searchresult = self
            .client
            .http
            .fetch_value("getSearch", params, "searchresult")
            .await?;

        if !searchresult.is_object() {
            return Err(LegiScanError::InvalidResponse(
                "getSearch: searchresult is not an object".to_string(),
            ));
        }

        // `summary` has no bill_id, so the reshaper skips it
        let summary = parse_summary("getSearch", searchresult.get("summary").cloned())?;
        let results = collect_records(searchresult, BILL_ID);
        Ok(SearchPage { summary, results })
    }

    /// Search with minimal results (bill ID, relevance, change hash).
    pub async fn search_raw(
        &self,
        query: &SearchQuery,
    ) -> LegiScanResult<SearchPage<SearchRawResult>> {
        let params = query.params()?;
        let mut searchresult = self
            .client
            .http
            .fetch_value("getSearchRaw", params, "searchresult")
            .await?;

        let summary = searchresult.get_mut("summary").map(Value::take);
        let summary = parse_summary("getSearchRaw", summary)?;
        let results = match searchresult.get_mut("results").map(Value::take) {
            Some(results) => collect_records(results, BILL_ID),
            None => Vec::new(),
        };
        Ok(SearchPage { summary, results })
    }
}

fn parse_summary(op: &str, summary: Option<Value>) -> LegiScanResult<SearchSummary> {
    match summary {
        Some(value) if !value.is_null() => decode(value)
            .map_err(|e| LegiScanError::InvalidResponse(format!("{op} summary: {e}"))),
        _ => Ok(SearchSummary::default()),
    }
}
