//! # LegiScan SDK
//!
//! Typed async client for the LegiScan legislative data API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use legiscan_sdk::{LegiScanClient, LegiScanResult, Scope, StateCode};
//!
//! #[tokio::main]
//! async fn main() -> LegiScanResult<()> {
//!     let client = LegiScanClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let ca = StateCode::parse("CA")?;
//!     let sessions = client.sessions().list(Some(&ca)).await?;
//!     println!("Found {} sessions", sessions.len());
//!
//!     if let Some(bill) = client.bills().find_by_number(&Scope::State(ca), "AB 858").await? {
//!         println!("{}: {}", bill.number, bill.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use api::{
    AuthoredBill, LegislatorMatches, LegislatorVote, LegislatorVotes, PrimaryAuthored, Scope,
    SearchQuery, SearchScope,
};
pub use client::{LegiScanClient, LegiScanClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ErrorKind, LegiScanError, LegiScanResult};

// Re-export core types for convenience
pub use legiscan_core::{
    // Validated input
    BillIdList, MonitorRecord, SearchState, StateCode, ValidationError, YearFilter,
    // Records
    Bill, Dataset, DatasetArchive, MasterListItem, MasterListRawItem, MonitorEntry,
    MonitorRawEntry, Person, RollCall, SearchPage, SearchRawResult, SearchResult,
    SearchSummary, Session, SessionPeople, SponsoredBills,
    // Documents
    Amendment, BillText, ProcessedDocument, Supplement,
    // Enums
    DatasetFormat, MonitorAction, Stance,
};
