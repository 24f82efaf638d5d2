//! LegiScan record types.
//!
//! Records model the fields this crate reads or that callers commonly need.
//! Every other upstream field lands in the flattened `extra` map so nothing is
//! dropped when a record is serialized back out. Numeric fields that LegiScan
//! sends as strings on some endpoints go through `serde_aux` coercion.

use crate::document::Document;
use serde::{Deserialize, Serialize};
use serde_aux::prelude::{deserialize_number_from_string, deserialize_string_from_number};
use serde_json::{Map, Value};

/// Upstream fields not modelled explicitly.
pub type Extra = Map<String, Value>;

// ============================================================================
// Sessions
// ============================================================================

/// A legislative session for a state and year range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub session_id: u64,
    pub state_id: u32,
    pub year_start: u16,
    pub year_end: u16,
    pub prefile: u8,
    pub sine_die: u8,
    pub prior: u8,
    pub special: u8,
    pub session_tag: String,
    pub session_title: String,
    pub session_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_hash: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Session {
    pub fn is_prior(&self) -> bool {
        self.prior != 0
    }

    pub fn is_special(&self) -> bool {
        self.special != 0
    }
}

// ============================================================================
// Bills
// ============================================================================

/// Full bill detail from `getBill`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bill {
    pub bill_id: u64,
    pub change_hash: String,
    pub session_id: u64,
    pub session: Option<Session>,
    pub url: String,
    pub state_link: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub status: u32,
    pub status_date: String,
    pub state: String,
    pub bill_number: String,
    pub bill_type: String,
    pub title: String,
    pub description: String,
    pub sponsors: Vec<Sponsor>,
    pub history: Vec<HistoryStep>,
    pub subjects: Vec<Subject>,
    pub sasts: Vec<BillReference>,
    pub texts: Vec<TextReference>,
    pub votes: Vec<VoteReference>,
    pub amendments: Vec<AmendmentReference>,
    pub supplements: Vec<SupplementReference>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Sponsor entry on a bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsor {
    pub people_id: u64,
    pub name: String,
    pub party: String,
    pub role: String,
    pub district: String,
    pub sponsor_type_id: u8,
    pub sponsor_order: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Sponsor {
    /// Sponsor type 1 is the primary author.
    pub fn is_primary(&self) -> bool {
        self.sponsor_type_id == 1
    }
}

/// One step of a bill's legislative history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryStep {
    pub date: String,
    pub action: String,
    pub chamber: String,
    pub importance: u8,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub subject_id: u64,
    pub subject_name: String,
}

/// Cross-reference to a related bill (same-as, replaced-by, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillReference {
    pub type_id: u8,
    #[serde(rename = "type")]
    pub kind: String,
    pub sast_bill_number: String,
    pub sast_bill_id: u64,
}

/// Pointer to a bill text version; fetch with `getBillText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextReference {
    pub doc_id: u64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mime: String,
    pub url: String,
    pub state_link: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Pointer to a roll call; fetch with `getRollCall`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteReference {
    pub roll_call_id: u64,
    pub date: String,
    pub desc: String,
    pub yea: u32,
    pub nay: u32,
    pub nv: u32,
    pub absent: u32,
    pub total: u32,
    pub passed: u8,
    pub chamber: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Pointer to an amendment; fetch with `getAmendment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmendmentReference {
    pub amendment_id: u64,
    pub adopted: u8,
    pub chamber: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub mime: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Pointer to a supplement (fiscal note, veto letter, ...); fetch with `getSupplement`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplementReference {
    pub supplement_id: u64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub mime: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Entry of `getMasterList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterListItem {
    pub bill_id: u64,
    pub number: String,
    pub change_hash: String,
    pub url: String,
    pub status_date: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub status: u32,
    pub last_action_date: String,
    pub last_action: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Entry of `getMasterListRaw`, for change detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterListRawItem {
    pub bill_id: u64,
    pub number: String,
    pub change_hash: String,
    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Documents
// ============================================================================

/// Bill text version with base64 payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillText {
    pub doc_id: u64,
    pub bill_id: u64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mime: String,
    pub text_size: u64,
    pub text_hash: String,
    pub doc: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amendment {
    pub amendment_id: u64,
    pub bill_id: u64,
    pub chamber: String,
    pub adopted: u8,
    pub date: String,
    pub title: String,
    pub description: String,
    pub mime: String,
    pub amendment_size: u64,
    pub amendment_hash: String,
    pub doc: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplement {
    pub supplement_id: u64,
    pub bill_id: u64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub mime: String,
    pub supplement_size: u64,
    pub supplement_hash: String,
    pub doc: String,
    #[serde(flatten)]
    pub extra: Extra,
}

macro_rules! impl_document {
    ($($ty:ty),+) => {
        $(
            impl Document for $ty {
                fn mime(&self) -> &str {
                    &self.mime
                }

                fn payload(&self) -> &str {
                    &self.doc
                }

                fn replace_payload(&mut self, payload: String) {
                    self.doc = payload;
                }
            }
        )+
    };
}

impl_document!(BillText, Amendment, Supplement);

// ============================================================================
// People & votes
// ============================================================================

/// A legislator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub people_id: u64,
    pub person_hash: String,
    pub state_id: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub party_id: u32,
    pub party: String,
    pub role_id: u32,
    pub role: String,
    pub name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub nickname: String,
    pub district: String,
    pub votesmart_id: u64,
    pub opensecrets_id: String,
    pub ballotpedia: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bioguide_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Person {
    /// Case-insensitive match against the full name, nickname, or
    /// "first last" / "nickname last" combinations.
    pub fn matches_name(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }

        let candidates = [
            self.name.clone(),
            format!("{} {}", self.first_name, self.last_name),
            format!("{} {}", self.nickname, self.last_name),
            self.last_name.clone(),
        ];

        candidates
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .any(|c| c.contains(&needle))
    }
}

/// A recorded vote event with individual votes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollCall {
    pub roll_call_id: u64,
    pub bill_id: u64,
    pub date: String,
    pub desc: String,
    pub yea: u32,
    pub nay: u32,
    pub nv: u32,
    pub absent: u32,
    pub total: u32,
    pub passed: u8,
    pub chamber: String,
    pub votes: Vec<IndividualVote>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualVote {
    pub people_id: u64,
    pub vote_id: u8,
    pub vote_text: String,
}

impl IndividualVote {
    pub fn value(&self) -> Option<VoteValue> {
        VoteValue::from_code(self.vote_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteValue {
    Yea,
    Nay,
    NotVoting,
    Absent,
}

impl VoteValue {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Yea),
            2 => Some(Self::Nay),
            3 => Some(Self::NotVoting),
            4 => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Legislators active in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPeople {
    pub session: Session,
    pub people: Vec<Person>,
}

/// Bills sponsored by one legislator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsoredBills {
    pub sponsor: Person,
    pub sessions: Vec<Session>,
    pub bills: Vec<SponsoredBill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsoredBill {
    pub session_id: u64,
    pub bill_id: u64,
    pub number: String,
    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Search
// ============================================================================

/// Pagination metadata shared by both search shapes.
///
/// `page`, `range` and `relevancy` are display labels ("1 of 3", "1 - 50");
/// the counters are always numeric here even when sent as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSummary {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub page: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub range: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub relevancy: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub count: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_current: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_total: u32,
}

/// Result of `getSearch` (50 per page).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub relevance: u32,
    pub state: String,
    pub bill_number: String,
    pub bill_id: u64,
    pub change_hash: String,
    pub url: String,
    pub text_url: String,
    pub research_url: String,
    pub last_action_date: String,
    pub last_action: String,
    pub title: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Result of `getSearchRaw` (2000 per page).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRawResult {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub relevance: u32,
    pub bill_id: u64,
    pub change_hash: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub summary: SearchSummary,
    pub results: Vec<T>,
}

// ============================================================================
// Datasets
// ============================================================================

/// Listing entry of `getDatasetList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub state_id: u32,
    pub session_id: u64,
    pub year_start: u16,
    pub year_end: u16,
    pub special: u8,
    pub session_name: String,
    pub session_title: String,
    pub dataset_hash: String,
    pub dataset_date: String,
    pub dataset_size: u64,
    pub dataset_size_csv: u64,
    pub access_key: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Archive returned by `getDataset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetArchive {
    pub state_id: u32,
    pub session_id: u64,
    pub session_name: String,
    pub dataset_hash: String,
    pub dataset_date: String,
    pub dataset_size: u64,
    pub mime_type: String,
    /// Base64 ZIP archive.
    pub zip: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

// ============================================================================
// GAITS monitor list
// ============================================================================

/// Position held on a monitored bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Watch,
    Support,
    Oppose,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watch => "watch",
            Self::Support => "support",
            Self::Oppose => "oppose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorAction {
    Monitor,
    Remove,
    Set,
}

impl MonitorAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Remove => "remove",
            Self::Set => "set",
        }
    }
}

/// Entry of `getMonitorList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorEntry {
    pub bill_id: u64,
    pub state: String,
    pub number: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub stance: u8,
    pub change_hash: String,
    pub url: String,
    pub status_date: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub status: u32,
    pub last_action_date: String,
    pub last_action: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Entry of `getMonitorListRaw`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorRawEntry {
    pub bill_id: u64,
    pub state: String,
    pub number: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub stance: u8,
    pub change_hash: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub status: u32,
    #[serde(flatten)]
    pub extra: Extra,
}
