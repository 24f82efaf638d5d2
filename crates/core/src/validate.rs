//! Validated input values for LegiScan operations.
//!
//! Each type parses from the loose shape a tool caller sends (strings or
//! numbers) and rejects anything the upstream API would not accept, so
//! malformed input never reaches the network.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejected tool or operation input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("State must be a two-letter abbreviation (got '{0}')")]
    StateCode(String),

    #[error("State must be a two-letter abbreviation or 'ALL' (got '{0}')")]
    SearchState(String),

    #[error("Year must be 1 (all), 2 (current), 3 (recent), 4 (prior), or a year after 1900 (got {0})")]
    Year(i64),

    #[error("Record filter must be 'current', 'archived', or a year of 2010 or later (got '{0}')")]
    MonitorRecord(String),

    #[error("Bill list must be comma-separated numeric bill IDs (got '{0}')")]
    BillIdList(String),

    #[error("Either session_id or state is required")]
    MissingScope,

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("Page must be 1 or greater")]
    Page,

    #[error("Limit must be between 1 and {max}")]
    Limit { max: usize },

    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

/// Two-letter US state abbreviation, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode(String);

impl StateCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.len() == 2 && input.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(input.to_ascii_uppercase()))
        } else {
            Err(ValidationError::StateCode(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State filter for full-text search: one state, or every state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SearchState {
    #[default]
    All,
    State(StateCode),
}

impl SearchState {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }
        StateCode::parse(input)
            .map(Self::State)
            .map_err(|_| ValidationError::SearchState(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::State(code) => code.as_str(),
        }
    }
}

impl TryFrom<String> for SearchState {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SearchState> for String {
    fn from(state: SearchState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Year filter for full-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum YearFilter {
    All,
    Current,
    Recent,
    Prior,
    Exact(u16),
}

impl YearFilter {
    pub fn parse(value: i64) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Self::All),
            2 => Ok(Self::Current),
            3 => Ok(Self::Recent),
            4 => Ok(Self::Prior),
            y if y > 1900 && y <= i64::from(u16::MAX) => Ok(Self::Exact(y as u16)),
            other => Err(ValidationError::Year(other)),
        }
    }

    /// Value sent as the `year` query parameter.
    pub fn as_param(&self) -> i64 {
        match self {
            Self::All => 1,
            Self::Current => 2,
            Self::Recent => 3,
            Self::Prior => 4,
            Self::Exact(year) => i64::from(*year),
        }
    }
}

impl TryFrom<i64> for YearFilter {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<YearFilter> for i64 {
    fn from(year: YearFilter) -> Self {
        year.as_param()
    }
}

/// Which slice of the GAITS monitor list to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordInput", into = "String")]
pub enum MonitorRecord {
    Current,
    Archived,
    Year(u16),
}

/// Earliest year the monitor list keeps history for.
pub const MONITOR_FIRST_YEAR: u16 = 2010;

impl MonitorRecord {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("current") {
            return Ok(Self::Current);
        }
        if trimmed.eq_ignore_ascii_case("archived") {
            return Ok(Self::Archived);
        }
        match trimmed.parse::<u16>() {
            Ok(year) if year >= MONITOR_FIRST_YEAR => Ok(Self::Year(year)),
            _ => Err(ValidationError::MonitorRecord(input.to_string())),
        }
    }

    pub fn as_param(&self) -> String {
        match self {
            Self::Current => "current".to_string(),
            Self::Archived => "archived".to_string(),
            Self::Year(year) => year.to_string(),
        }
    }
}

/// Callers send the record filter either as text or as a bare year.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordInput {
    Text(String),
    Year(i64),
}

impl TryFrom<RecordInput> for MonitorRecord {
    type Error = ValidationError;

    fn try_from(value: RecordInput) -> Result<Self, Self::Error> {
        match value {
            RecordInput::Text(text) => Self::parse(&text),
            RecordInput::Year(year) => Self::parse(&year.to_string()),
        }
    }
}

impl From<MonitorRecord> for String {
    fn from(record: MonitorRecord) -> Self {
        record.as_param()
    }
}

/// Comma-separated list of numeric bill IDs, as `setMonitor` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillIdList(Vec<u64>);

impl BillIdList {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let ids = input
            .split(',')
            .map(|part| part.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ValidationError::BillIdList(input.to_string()))?;

        if ids.is_empty() {
            return Err(ValidationError::BillIdList(input.to_string()));
        }
        Ok(Self(ids))
    }

    pub fn ids(&self) -> &[u64] {
        &self.0
    }

    /// Canonical `1,2,3` form sent upstream.
    pub fn as_param(&self) -> String {
        self.0
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl TryFrom<String> for BillIdList {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BillIdList> for String {
    fn from(list: BillIdList) -> Self {
        list.as_param()
    }
}

/// Reject blank free-text input.
pub fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}
